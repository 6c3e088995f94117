use crate::utils::color::Color;

/// Everything a canvas needs to stroke one object. Built per draw call, never shared.
///
/// There is a single look for all geometry: an anti-aliased outline with round joins and
/// round caps, never filled. Only color and width vary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    /// Width in render units.
    pub width: f32,
}

/// Style used for every stroke and rectangle on the surface.
pub fn style_for(color: Color, width: f32) -> StrokeStyle {
    StrokeStyle { color, width }
}
