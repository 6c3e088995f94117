use crate::SketchApp;
use crate::paint::PaintMode;
use crate::ui::stroke_width::width_label;
use eframe::egui;

pub fn top_bar(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("quick_settings").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let mut mode = app.surface.mode();
            ui.selectable_value(&mut mode, PaintMode::Line, "〰 Line");
            ui.selectable_value(&mut mode, PaintMode::Rectangle, "⬚ Rectangle");
            app.surface.set_mode(mode);

            ui.separator();

            let chip = egui::Button::new("   ").fill(app.surface.color().to_color32());
            if ui.add(chip).on_hover_text("Color").clicked() {
                app.color_picker.open_with(app.surface.color());
            }

            let label = format!("Width {}", width_label(app.surface.stroke_width()));
            if ui.button(label).clicked() {
                app.stroke_width_dialog.open_with(app.surface.stroke_width());
            }
        });
    });
}
