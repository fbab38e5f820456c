use stonekit_core::{Key, KeyChord};
use stonekit_designer::{DesignerState, KeyCommand, Mode, TextConfig};

#[test]
fn test_mutually_exclusive_modes() {
    let mut state = DesignerState::new();
    assert_eq!(state.mode(), Mode::Idle);
    assert_eq!(state.toggle_move(), Mode::Move);
    assert_eq!(state.toggle_rotate(), Mode::Rotate);
    assert_eq!(state.toggle_remove(), Mode::Remove);

    assert_eq!(state.toggle_remove(), Mode::Idle);
}

#[test]
fn test_add_text_enters_move() {
    let mut state = DesignerState::new();
    state.toggle_rotate();
    state.add_text(TextConfig::new("RIP")).expect("add text");
    assert_eq!(state.mode(), Mode::Move);
}

#[test]
fn test_remove_action_cycle() {
    let mut state = DesignerState::new();
    state.add_text(TextConfig::new("one")).expect("add text");
    state.add_text(TextConfig::new("two")).expect("add text");

    // First press enters Remove.
    assert_eq!(state.remove_action(), Mode::Remove);
    assert_eq!(state.texts().len(), 2);

    // With a selection, the next press deletes it and leaves Remove.
    assert_eq!(state.remove_action(), Mode::Idle);
    assert_eq!(state.texts().len(), 1);

    // Without a selection, it just leaves Remove.
    state.remove_action();
    assert!(state.selection().is_none());
    assert_eq!(state.remove_action(), Mode::Idle);
    assert_eq!(state.texts().len(), 1);
}

#[test]
fn test_click_in_remove_mode_deletes() {
    let mut state = DesignerState::new();
    state.add_text(TextConfig::new("one")).expect("add text");
    let layer = format!("text-{}", state.texts()[0].id);
    state.clear_selection();

    state.toggle_remove();
    assert!(state.click_layer(&layer));
    assert!(state.texts().is_empty());
    assert_eq!(state.mode(), Mode::Idle);
}

#[test]
fn test_gestures_gated_by_mode() {
    let mut state = DesignerState::new();
    state.add_text(TextConfig::new("one")).expect("add text");
    assert!(state.drag_selected([0.1, 0.0, 0.0]));
    assert!((state.texts()[0].position[0] - 0.1).abs() < 1e-12);

    // Rotate needs Rotate mode and an image.
    assert!(!state.rotate_selected(0.5));
    state.toggle_rotate();
    assert!(!state.rotate_selected(0.5));
    assert!(!state.drag_selected([0.1, 0.0, 0.0]));
}

#[test]
fn test_escape_keeps_mode() {
    let mut state = DesignerState::new();
    state.add_text(TextConfig::new("one")).expect("add text");
    assert_eq!(
        state.handle_key(&KeyChord::plain(Key::Escape)),
        Some(KeyCommand::Deselect)
    );
    assert!(state.selection().is_none());
    assert_eq!(state.mode(), Mode::Move);
}

#[test]
fn test_key_commands() {
    let mut state = DesignerState::new();
    state.add_text(TextConfig::new("one")).expect("add text");

    state.handle_key(&KeyChord::ctrl(Key::char('c')));
    state.handle_key(&KeyChord::meta(Key::char('v')));
    assert_eq!(state.texts().len(), 2);

    state.handle_key(&KeyChord::ctrl(Key::char('z')));
    assert_eq!(state.texts().len(), 1);
    state.handle_key(&KeyChord::ctrl(Key::char('y')));
    assert_eq!(state.texts().len(), 2);
    state.handle_key(&KeyChord::meta(Key::char('z')));
    state.handle_key(&KeyChord::meta(Key::char('z')).with_shift());
    assert_eq!(state.texts().len(), 2);

    assert_eq!(state.handle_key(&KeyChord::plain(Key::char('q'))), None);
}
