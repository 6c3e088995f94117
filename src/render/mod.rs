//! Replays committed objects and the in-progress gesture onto a canvas.
pub mod egui_canvas;

use crate::{
    gesture::{GestureTracker, InProgress},
    paint::{
        PaintObject, RectBounds,
        path::Path,
        store::DrawingStore,
        style::{StrokeStyle, style_for},
    },
    session::SessionState,
};

/// Anything that can stroke paths and rectangle outlines.
pub trait PaintCanvas {
    fn draw_path(&mut self, path: &Path, style: &StrokeStyle);
    fn draw_rect(&mut self, rect: &RectBounds, style: &StrokeStyle);
}

/// Draw the whole frame: history in commit order, each object in its own style, then the
/// gesture in progress (if any) in the session's live style.
pub fn render_frame(
    canvas: &mut dyn PaintCanvas,
    store: &DrawingStore,
    tracker: &GestureTracker,
    session: &SessionState,
) {
    for object in store {
        draw_object(canvas, object);
    }

    // Builders only hold geometry between pointer down and up.
    if !tracker.is_active() {
        return;
    }
    let live = style_for(session.color, session.stroke_width);
    match tracker.in_progress(session.mode) {
        InProgress::Path(path) => canvas.draw_path(path, &live),
        InProgress::Rectangle(rect) => canvas.draw_rect(rect, &live),
    }
}

pub fn draw_object(canvas: &mut dyn PaintCanvas, object: &PaintObject) {
    match object {
        PaintObject::Stroke {
            color,
            stroke_width,
            path,
        } => canvas.draw_path(path, &style_for(*color, *stroke_width)),
        PaintObject::Rectangle {
            color,
            stroke_width,
            bounds,
        } => canvas.draw_rect(bounds, &style_for(*color, *stroke_width)),
    }
}

/// One recorded canvas call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Path { path: Path, style: StrokeStyle },
    Rect { rect: RectBounds, style: StrokeStyle },
}

/// Canvas that only records what it was asked to draw, in call order.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl PaintCanvas for RecordingCanvas {
    fn draw_path(&mut self, path: &Path, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Path {
            path: path.clone(),
            style: *style,
        });
    }

    fn draw_rect(&mut self, rect: &RectBounds, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Rect {
            rect: *rect,
            style: *style,
        });
    }
}
