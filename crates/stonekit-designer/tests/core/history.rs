use stonekit_designer::history::{ActionType, HistoryEngine};
use stonekit_designer::model::{TextConfig, TextElement};
use stonekit_designer::DesignerState;

fn texts_after(state: &mut DesignerState, text: &str) -> Vec<TextElement> {
    state.add_text(TextConfig::new(text)).expect("add text");
    state.texts().to_vec()
}

#[test]
fn test_history_engine_creation() {
    let history = HistoryEngine::new(Some(50));
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(history.redo_depth(), 0);
    assert_eq!(history.max_depth(), Some(50));
}

#[test]
fn test_zero_depth_is_raised() {
    let history = HistoryEngine::new(Some(0));
    assert_eq!(history.max_depth(), Some(1));
}

#[test]
fn test_long_session_undoes_to_start() {
    let mut state = DesignerState::new();
    for i in 0..75 {
        state.add_text(TextConfig::new(format!("line {}", i))).expect("add text");
    }
    assert_eq!(state.history().undo_depth(), 75);

    let mut steps = 0;
    while state.undo() {
        steps += 1;
    }
    assert_eq!(steps, 75);
    assert!(state.texts().is_empty());
    assert_eq!(state.layers().len(), 1);
}

#[test]
fn test_snapshot_holds_prior_state() {
    let mut state = DesignerState::new();
    let before = texts_after(&mut state, "first");

    state.add_text(TextConfig::new("second")).expect("add text");
    assert_eq!(state.texts().len(), 2);

    state.undo();
    assert_eq!(state.texts(), before.as_slice());
}

#[test]
fn test_redo_after_undo() {
    let mut state = DesignerState::new();
    let after = texts_after(&mut state, "RIP");

    assert!(state.undo());
    assert!(state.can_redo());
    assert!(state.redo());
    assert_eq!(state.texts(), after.as_slice());
    assert!(!state.can_redo());
}

#[test]
fn test_new_action_clears_redo() {
    let mut history = HistoryEngine::default();
    history.snapshot(ActionType::AddText, &[], &[]);
    history.snapshot(ActionType::MoveText, &[], &[]);
    history.undo(&[], &[]);
    history.undo(&[], &[]);
    assert_eq!(history.redo_depth(), 2);

    history.snapshot(ActionType::Paste, &[], &[]);
    assert_eq!(history.redo_depth(), 0);
    assert_eq!(history.peek_undo(), Some(ActionType::Paste));
}

#[test]
fn test_undo_on_empty_is_noop() {
    let mut state = DesignerState::new();
    assert!(!state.undo());
    assert!(!state.redo());
    assert!(state.take_messages().is_empty());
}

#[test]
fn test_depth_follows_settings() {
    let settings = stonekit_settings::EditorSettings {
        history_depth: Some(2),
        ..Default::default()
    };
    let mut state = DesignerState::with_settings(&settings);
    for text in ["a", "b", "c", "d"] {
        state.add_text(TextConfig::new(text)).expect("add text");
    }
    assert_eq!(state.history().undo_depth(), 2);

    assert!(state.undo());
    assert!(state.undo());
    assert!(!state.undo());
    assert_eq!(state.texts().len(), 2);
}

#[test]
fn test_undo_messages() {
    let mut state = DesignerState::new();
    state.add_text(TextConfig::new("RIP")).expect("add text");
    state.take_messages();

    state.undo();
    state.redo();
    let messages: Vec<String> = state.take_messages().into_iter().map(|m| m.text).collect();
    assert_eq!(messages, vec!["Undid text addition", "Redid text addition"]);
}
