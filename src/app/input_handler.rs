use crate::SketchApp;
use crate::tablet::{PenInput, PenPhase, PenSample};
use eframe::egui;

/// Map a window position (points) to canvas-local render units (physical pixels).
pub fn to_surface(pos: egui::Pos2, origin: egui::Pos2, pixels_per_point: f32) -> (f32, f32) {
    let local = (pos - origin) * pixels_per_point;
    (local.x, local.y)
}

/// Route this frame's pen and pointer input to the surface. With `blocked` set (a settings
/// window is up) the tablet is still drained but nothing reaches the canvas.
pub fn handle_input(
    app: &mut SketchApp,
    ctx: &egui::Context,
    response: &egui::Response,
    origin: egui::Pos2,
    blocked: bool,
) {
    let ppp = ctx.pixels_per_point();

    let samples = app.tablet.as_mut().map(PenInput::poll).unwrap_or_default();
    route_pen_samples(app, &samples, origin, ppp, blocked);
    if blocked {
        return;
    }

    let hovered = response.hovered();
    let events = ctx.input(|i| i.events.clone());
    for event in &events {
        apply_pointer_event(app, event, origin, ppp, hovered);
    }
}

/// Apply a frame's pen samples in order, or drop them all when `blocked`.
pub fn route_pen_samples(
    app: &mut SketchApp,
    samples: &[PenSample],
    origin: egui::Pos2,
    pixels_per_point: f32,
    blocked: bool,
) {
    if blocked {
        if !samples.is_empty() {
            log::trace!("dropping {} pen samples behind a dialog", samples.len());
        }
        return;
    }
    for sample in samples {
        apply_pen_sample(app, sample, origin, pixels_per_point);
    }
}

/// Feed one pen sample into the surface. A mouse gesture in progress keeps the canvas.
pub fn apply_pen_sample(
    app: &mut SketchApp,
    sample: &PenSample,
    origin: egui::Pos2,
    pixels_per_point: f32,
) {
    let pos = egui::Pos2::new(sample.pos[0], sample.pos[1]);
    let (x, y) = to_surface(pos, origin, pixels_per_point);
    match sample.phase {
        PenPhase::Down if !app.pointer_down => {
            app.pen_down = true;
            app.surface.on_pointer_down(x, y);
        }
        PenPhase::Move if app.pen_down => app.surface.on_pointer_move(x, y),
        PenPhase::Up if app.pen_down => {
            app.pen_down = false;
            app.surface.on_pointer_up(x, y);
        }
        _ => {}
    }
}

/// Feed one egui event into the surface. Only the primary button draws.
pub fn apply_pointer_event(
    app: &mut SketchApp,
    event: &egui::Event,
    origin: egui::Pos2,
    pixels_per_point: f32,
    hovered: bool,
) {
    if app.pen_down {
        return;
    }
    match *event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            ..
        } => {
            let (x, y) = to_surface(pos, origin, pixels_per_point);
            if pressed && hovered && !app.pointer_down {
                app.pointer_down = true;
                app.last_pointer = Some(pos);
                app.surface.on_pointer_down(x, y);
            } else if !pressed && app.pointer_down {
                app.pointer_down = false;
                app.last_pointer = None;
                app.surface.on_pointer_up(x, y);
            }
        }
        egui::Event::PointerMoved(pos) if app.pointer_down => {
            app.last_pointer = Some(pos);
            let (x, y) = to_surface(pos, origin, pixels_per_point);
            app.surface.on_pointer_move(x, y);
        }
        egui::Event::PointerGone if app.pointer_down => {
            // The pointer left the window mid-gesture; end it where it was last seen.
            let last = app.last_pointer.take().unwrap_or(origin);
            let (x, y) = to_surface(last, origin, pixels_per_point);
            app.pointer_down = false;
            app.surface.on_pointer_up(x, y);
        }
        _ => {}
    }
}
