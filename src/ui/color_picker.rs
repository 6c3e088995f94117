use crate::{surface::DrawingSurface, utils::color::Color};
use eframe::egui::{self, Color32, color_picker::Alpha};

/// Pending choice of the "Choose color" window. Nothing reaches the surface until OK.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPickerState {
    pub open: bool,
    pub pending: Color32,
}

impl Default for ColorPickerState {
    fn default() -> Self {
        Self {
            open: false,
            pending: Color32::BLACK,
        }
    }
}

impl ColorPickerState {
    pub fn open_with(&mut self, current: Color) {
        self.pending = current.to_color32();
        self.open = true;
    }

    pub fn confirm(&mut self, surface: &mut DrawingSurface) {
        surface.set_color(Color::from_color32(self.pending));
        self.open = false;
    }

    pub fn cancel(&mut self) {
        self.open = false;
    }
}

/// Modal-style window with an opaque color picker and OK/Cancel.
pub fn color_picker_window(
    ctx: &egui::Context,
    state: &mut ColorPickerState,
    surface: &mut DrawingSurface,
) {
    if !state.open {
        return;
    }
    egui::Window::new("Choose color")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::color_picker::color_picker_color32(ui, &mut state.pending, Alpha::Opaque);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    state.cancel();
                }
                if ui.button("OK").clicked() {
                    state.confirm(surface);
                }
            });
        });
}
