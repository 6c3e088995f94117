//! Committed paint objects and the store that keeps them in commit order.
pub mod path;
pub mod store;
pub mod style;

use crate::utils::color::Color;
use path::Path;

/// How the next gesture is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintMode {
    #[default]
    Line,
    Rectangle,
}

impl PaintMode {
    pub fn label(&self) -> &'static str {
        match self {
            PaintMode::Line => "Line",
            PaintMode::Rectangle => "Rectangle",
        }
    }
}

/// Axis-aligned rectangle edges. Not normalized: `right`/`bottom` may sit left of/above
/// `left`/`top` when the pointer moved backward from the anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectBounds {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}

/// A finished drawable. Built once at gesture end and never edited afterwards.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintObject {
    Stroke {
        color: Color,
        stroke_width: f32,
        path: Path,
    },
    Rectangle {
        color: Color,
        stroke_width: f32,
        bounds: RectBounds,
    },
}

impl PaintObject {
    pub fn color(&self) -> Color {
        match self {
            PaintObject::Stroke { color, .. } | PaintObject::Rectangle { color, .. } => *color,
        }
    }

    /// Width in render units.
    pub fn stroke_width(&self) -> f32 {
        match self {
            PaintObject::Stroke { stroke_width, .. }
            | PaintObject::Rectangle { stroke_width, .. } => *stroke_width,
        }
    }

    pub fn mode(&self) -> PaintMode {
        match self {
            PaintObject::Stroke { .. } => PaintMode::Line,
            PaintObject::Rectangle { .. } => PaintMode::Rectangle,
        }
    }
}
