use stonekit_designer::layers::LayerKind;
use stonekit_designer::{DesignerState, Selection, TextConfig};

fn state_with_texts(n: usize) -> DesignerState {
    let mut state = DesignerState::new();
    for i in 0..n {
        state
            .add_text(TextConfig::new(format!("line {}", i)))
            .expect("add text");
    }
    state
}

fn assert_layers_backed(state: &DesignerState) {
    for layer in state.layers().layers() {
        let live = match layer.kind {
            LayerKind::Texture => layer.id == "texture-stone",
            LayerKind::Text => state.texts().iter().any(|t| t.id == layer.element_id),
            LayerKind::Image => state.images().iter().any(|i| i.id == layer.element_id),
        };
        assert!(live, "orphaned layer {}", layer.id);
    }
    assert_eq!(
        state.layers().len(),
        1 + state.texts().len() + state.images().len()
    );
}

#[test]
fn test_layer_ids() {
    let state = state_with_texts(1);
    let id = &state.texts()[0].id;
    let ids: Vec<&str> = state.layers().ids().collect();
    assert_eq!(ids, vec!["texture-stone".to_string(), format!("text-{}", id)]);
}

#[test]
fn test_remove_drops_layer() {
    let mut state = state_with_texts(2);
    let removed = state.texts()[0].id.clone();
    state.select_text(0);
    assert!(state.remove_selected());

    assert!(state.layers().resolve(&format!("text-{}", removed)).is_none());
    assert!(!state.is_layer_visible(&format!("text-{}", removed)));
    assert_layers_backed(&state);
}

#[test]
fn test_undo_redo_keeps_layers_in_sync() {
    let mut state = state_with_texts(3);
    state.select_text(1);
    state.remove_selected();
    assert_layers_backed(&state);

    state.undo();
    assert_layers_backed(&state);
    state.undo();
    assert_layers_backed(&state);
    state.redo();
    state.redo();
    assert_layers_backed(&state);
}

#[test]
fn test_reorder_and_select() {
    let mut state = state_with_texts(2);
    let first = format!("text-{}", state.texts()[0].id);
    let second = format!("text-{}", state.texts()[1].id);

    state.reorder_layers(&[second.as_str(), "texture-stone", "bogus", first.as_str()]);
    let ids: Vec<String> = state.layers().ids().map(str::to_string).collect();
    assert_eq!(ids, vec![second.clone(), "texture-stone".to_string(), first]);

    assert!(state.select_layer(&second));
    assert_eq!(state.selected_text_index(), Some(1));
    assert_eq!(state.selected_image_index(), None);
    assert_eq!(state.selected_layer_id(), Some(second));
}

#[test]
fn test_reorder_keeps_missing_layers() {
    let mut state = state_with_texts(2);
    state.reorder_layers(&["texture-stone"]);
    assert_layers_backed(&state);
    assert_eq!(state.layers().ids().next(), Some("texture-stone"));
}

#[test]
fn test_unknown_layer_is_noop() {
    let mut state = state_with_texts(1);
    let before = state.selection().clone();
    assert!(!state.select_layer("image-gone"));
    assert_eq!(state.selection(), &before);
    assert_eq!(state.toggle_layer_visibility("image-gone"), None);
}

#[test]
fn test_toggle_visibility_keeps_element() {
    let mut state = state_with_texts(1);
    let layer = format!("text-{}", state.texts()[0].id);
    assert_eq!(state.toggle_layer_visibility(&layer), Some(false));
    assert!(!state.is_layer_visible(&layer));
    assert_eq!(state.texts().len(), 1);
    assert_eq!(state.toggle_layer_visibility(&layer), Some(true));
}

#[test]
fn test_select_texture_clears_selection() {
    let mut state = state_with_texts(1);
    assert!(matches!(state.selection(), Selection::Text(_)));
    assert!(state.select_layer("texture-stone"));
    assert!(state.selection().is_none());
}
