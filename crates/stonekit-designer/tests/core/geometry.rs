use stonekit_designer::geometry::{
    outline, surface_point, FrameShape, GeometryCache, CIRCLE_SEGMENTS, FRAME_WIDTH,
};
use stonekit_designer::{DesignerState, ObjectType, TextConfig};

#[test]
fn test_outline_is_deterministic() {
    for shape in [
        FrameShape::Circle,
        FrameShape::Square,
        FrameShape::Rectangle,
        FrameShape::Oval,
    ] {
        assert_eq!(outline(shape, [1.5, 0.8]), outline(shape, [1.5, 0.8]));
    }
}

#[test]
fn test_round_outlines_are_smooth() {
    let oval = outline(FrameShape::Oval, [2.0, 1.0]);
    assert!(oval.inner.rings[0].len() >= CIRCLE_SEGMENTS);
    let circle = outline(FrameShape::Circle, [1.0, 1.0]);
    assert!(circle.inner.rings[0].len() >= CIRCLE_SEGMENTS);
}

#[test]
fn test_square_ignores_height() {
    let frame = outline(FrameShape::Square, [1.0, 3.0]);
    let (x1, y1, x2, y2) = frame.inner.bounds();
    assert!((x2 - x1 - 1.0).abs() < 1e-5);
    assert!((y2 - y1 - 1.0).abs() < 1e-5);
}

#[test]
fn test_square_hit_test() {
    let frame = outline(FrameShape::Square, [1.0, 1.0]);
    let band = 0.5 + FRAME_WIDTH / 2.0;
    assert!(frame.outer.contains(band, 0.0));
    assert!(frame.inner.contains(0.0, 0.0));
    assert!(!frame.inner.contains(band, 0.0));
}

#[test]
fn test_cache_memoizes() {
    let mut cache = GeometryCache::new();
    let a = cache.outline(FrameShape::Circle, [1.0, 1.0]);
    let b = cache.outline(FrameShape::Circle, [1.0, 1.0]);
    assert!(std::sync::Arc::ptr_eq(&a, &b));
    cache.outline(FrameShape::Circle, [2.0, 2.0]);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_flat_surface_is_identity() {
    let placed = surface_point([0.3, -0.2, 0.26], false, 1.0);
    assert_eq!(placed.point.coords.as_slice(), &[0.3, -0.2, 0.26]);
    assert_eq!(placed.normal.z, 1.0);
}

#[test]
fn test_cylinder_wraps_text() {
    let mut state = DesignerState::new();
    state.set_object_type(ObjectType::Urn);
    state.add_text(TextConfig::new("Forever")).expect("add text");
    assert!(state.texts()[0].is_cylindrical);

    let radius = state.dimensions().width / 2.0;
    let centre = state.text_placement(0).expect("placement");
    assert!((centre.point.z - radius).abs() < 1e-9);

    let quarter = std::f64::consts::FRAC_PI_2 * radius;
    state.update_text_position(0, [quarter, 0.1, 0.11]);
    let side = state.text_placement(0).expect("placement");
    assert!((side.point.x - radius).abs() < 1e-9);
    assert!(side.point.z.abs() < 1e-9);
    assert!((side.point.y - 0.1).abs() < 1e-12);
}

#[test]
fn test_frames_on_state() {
    let mut state = DesignerState::new();
    let id = state
        .add_frame(FrameShape::Oval, [1.2, 0.8], [0.0, 0.5, 0.26])
        .expect("add frame");
    let first = state.frame_outline(&id).expect("outline");
    let again = state.frame_outline(&id).expect("outline");
    assert!(std::sync::Arc::ptr_eq(&first, &again));

    assert!(state
        .update_frame(&id, [1.0, 1.0], [0.0, 0.0, 0.26])
        .expect("update"));
    assert!(state.add_frame(FrameShape::Circle, [0.0, 1.0], [0.0; 3]).is_err());
    assert!(state.remove_frame(&id));
    assert!(!state.remove_frame(&id));
    assert!(state.frames().is_empty());
    // Frames are not undoable.
    assert!(!state.can_undo());
}
