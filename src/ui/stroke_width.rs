use crate::{error::SurfaceError, surface::DrawingSurface};
use eframe::egui;
use std::ops::RangeInclusive;

/// Slider bounds in device-independent units.
pub const WIDTH_RANGE: RangeInclusive<f32> = 1.0..=100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StrokeWidthDialog {
    pub open: bool,
    pub pending: f32,
}

impl StrokeWidthDialog {
    pub fn open_with(&mut self, current_dp: f32) {
        self.pending = current_dp.clamp(*WIDTH_RANGE.start(), *WIDTH_RANGE.end());
        self.open = true;
    }

    /// Apply the slider value. The dialog stays open if the surface refuses it.
    pub fn confirm(&mut self, surface: &mut DrawingSurface) -> Result<(), SurfaceError> {
        surface.set_stroke_width(self.pending)?;
        self.open = false;
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.open = false;
    }
}

/// Toolbar label for a width: whole device-independent units, truncated.
pub fn width_label(width_dp: f32) -> String {
    format!("{}", width_dp.trunc() as i32)
}

pub fn stroke_width_window(
    ctx: &egui::Context,
    dialog: &mut StrokeWidthDialog,
    surface: &mut DrawingSurface,
) {
    if !dialog.open {
        return;
    }
    egui::Window::new("Stroke width")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.add(egui::Slider::new(&mut dialog.pending, WIDTH_RANGE).step_by(1.0));
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    dialog.cancel();
                }
                if ui.button("OK").clicked() {
                    if let Err(e) = dialog.confirm(surface) {
                        log::warn!("stroke width not applied: {e}");
                    }
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceConfig;

    #[test]
    fn cancel_keeps_old_width() {
        let surface = DrawingSurface::new(SurfaceConfig::default()).unwrap();
        let mut dialog = StrokeWidthDialog::default();
        dialog.open_with(surface.stroke_width());
        dialog.pending = 40.0;
        dialog.cancel();
        assert_eq!(surface.stroke_width(), 12.0);
    }

    #[test]
    fn confirm_applies_and_closes() {
        let mut surface = DrawingSurface::new(SurfaceConfig::default()).unwrap();
        let mut dialog = StrokeWidthDialog::default();
        dialog.open_with(surface.stroke_width());
        assert_eq!(dialog.pending, 12.0);
        dialog.pending = 40.0;
        dialog.confirm(&mut surface).unwrap();
        assert!(!dialog.open);
        assert_eq!(surface.stroke_width(), 40.0);
    }

    #[test]
    fn rejected_width_keeps_dialog_open() {
        let mut surface = DrawingSurface::new(SurfaceConfig::default()).unwrap();
        let mut dialog = StrokeWidthDialog {
            open: true,
            pending: 0.0,
        };
        assert!(dialog.confirm(&mut surface).is_err());
        assert!(dialog.open);
    }

    #[test]
    fn label_truncates_to_whole_units() {
        assert_eq!(width_label(12.0), "12");
        assert_eq!(width_label(7.9), "7");
    }
}
