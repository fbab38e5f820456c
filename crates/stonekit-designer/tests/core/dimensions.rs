use stonekit_designer::dimensions::{Dimension, SizeClass};
use stonekit_designer::{DesignerError, DesignerState, ObjectType};

mod support {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use image::{ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;

    pub fn png(width: u32, height: u32) -> String {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(width, height, Rgba([10, 10, 10, 255]));
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png).expect("encode png");
        format!("data:image/png;base64,{}", STANDARD.encode(bytes.into_inner()))
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_width_clamped_on_gravestone() {
    let mut state = DesignerState::new();
    let stored = state.set_dimension(Dimension::Width, 200.0).expect("set");
    assert_eq!(stored, 90.0);
    assert_eq!(state.dimensions().width, 90.0);
}

#[test]
fn test_invalid_dimension_rejected() {
    let mut state = DesignerState::new();
    let before = state.dimensions();
    let err = state.set_dimension(Dimension::Thickness, -0.5).unwrap_err();
    assert!(matches!(err, DesignerError::Validation(_)));
    assert_eq!(state.dimensions(), before);
    assert_eq!(state.take_messages().len(), 1);
}

#[test]
fn test_thickness_moves_images() {
    let mut state = DesignerState::new();
    state.upload_image(&support::png(4, 2)).expect("upload");
    state.upload_image(&support::png(2, 4)).expect("upload");
    state.update_image_position(1, [0.4, -0.3, 5.0]);
    assert!(state.images().iter().all(|i| close(i.position[2], 0.26)));

    state.set_dimension(Dimension::Thickness, 0.8).expect("set");
    assert!(state.images().iter().all(|i| close(i.position[2], 0.41)));
    assert_eq!(state.images()[1].position[0], 0.4);
    assert_eq!(state.images()[1].position[1], -0.3);
}

#[test]
fn test_object_type_moves_images() {
    let mut state = DesignerState::new();
    state.upload_image(&support::png(3, 3)).expect("upload");

    state.set_object_type(ObjectType::Base);
    assert!(close(state.images()[0].position[2], 0.21));
    state.set_object_type(ObjectType::Urn);
    assert!(close(state.images()[0].position[2], 0.2));
}

#[test]
fn test_object_type_resets_texture_and_clamps() {
    let mut state = DesignerState::new();
    state.set_texture("sandstone").expect("texture");
    state.set_object_type(ObjectType::Urn);
    assert_eq!(state.texture(), "marble");
    assert_eq!(state.dimensions().width, 1.0);
    assert_eq!(state.dimensions().height, 1.5);

    state.set_texture("bronze").expect("texture");
    state.set_object_type(ObjectType::TableSign);
    assert_eq!(state.texture(), "marble");
    assert!(state.set_texture("bronze").is_err());
    assert_eq!(state.texture(), "marble");
}

#[test]
fn test_preset_sizes() {
    let mut state = DesignerState::new();
    state.apply_preset_size(SizeClass::Large).expect("preset");
    assert_eq!(state.dimensions().width, 80.0);
    assert_eq!(state.dimensions().height, 100.0);

    state.set_object_type(ObjectType::Urn);
    let before = state.dimensions();
    assert!(state.apply_preset_size(SizeClass::Small).is_err());
    assert_eq!(state.dimensions(), before);
}

#[test]
fn test_upload_scene_size_keeps_aspect() {
    let mut state = DesignerState::new();
    state.upload_image(&support::png(8, 2)).expect("upload");
    let image = &state.images()[0];
    assert_eq!((image.width, image.height), (8, 2));
    assert_eq!(image.size, [1.0, 0.25]);
}
