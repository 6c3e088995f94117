use super::state::LaunchOptions;
use crate::{
    error::SurfaceError,
    render::egui_canvas::EguiCanvas,
    surface::DrawingSurface,
    tablet::PenInput,
    ui::{self, color_picker::ColorPickerState, stroke_width::StrokeWidthDialog},
};
use eframe::egui::{self, Color32};

/// Main egui application: one drawing surface plus the windows that adjust it.
pub struct SketchApp {
    pub(crate) surface: DrawingSurface,
    pub(crate) tablet: Option<PenInput>,
    /// A mouse/touch gesture is in progress.
    pub(crate) pointer_down: bool,
    /// A pen gesture is in progress; mouse events echoed by the OS are ignored meanwhile.
    pub(crate) pen_down: bool,
    pub(crate) last_pointer: Option<egui::Pos2>,
    pub(crate) color_picker: ColorPickerState,
    pub(crate) stroke_width_dialog: StrokeWidthDialog,
}

impl SketchApp {
    /// Build the surface from launch options, using the window scale as density by default.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        options: LaunchOptions,
    ) -> Result<Self, SurfaceError> {
        let config = options.resolve(cc.egui_ctx.pixels_per_point());
        let mut app = Self::with_surface(DrawingSurface::new(config)?);
        app.tablet = PenInput::new(cc);
        Ok(app)
    }

    pub fn with_surface(surface: DrawingSurface) -> Self {
        Self {
            surface,
            tablet: None,
            pointer_down: false,
            pen_down: false,
            last_pointer: None,
            color_picker: ColorPickerState::default(),
            stroke_width_dialog: StrokeWidthDialog::default(),
        }
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    /// Canvas input is blocked while a settings window is up, like a modal dialog.
    pub fn dialog_open(&self) -> bool {
        self.color_picker.open || self.stroke_width_dialog.open
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::top_bar::top_bar(self, ctx);
        ui::color_picker::color_picker_window(ctx, &mut self.color_picker, &mut self.surface);
        ui::stroke_width::stroke_width_window(
            ctx,
            &mut self.stroke_width_dialog,
            &mut self.surface,
        );

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::WHITE))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_at_least(ui.available_size(), egui::Sense::click_and_drag());

                let blocked = self.dialog_open();
                super::input_handler::handle_input(self, ctx, &response, rect.min, blocked);

                let painter = ui.painter_at(rect);
                let mut canvas = EguiCanvas::new(&painter, rect.min, ctx.pixels_per_point());
                self.surface.render(&mut canvas);
            });

        if self.surface.take_redraw_request() {
            ctx.request_repaint();
        }
    }
}
