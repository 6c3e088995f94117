//! egui panels and windows that drive the surface settings.
pub mod color_picker;
pub mod stroke_width;
pub mod top_bar;
