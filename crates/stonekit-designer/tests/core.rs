#[path = "core/dimensions.rs"]
mod dimensions;
#[path = "core/geometry.rs"]
mod geometry;
#[path = "core/history.rs"]
mod history;
#[path = "core/layers.rs"]
mod layers;
#[path = "core/modes.rs"]
mod modes;
