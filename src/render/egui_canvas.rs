use super::PaintCanvas;
use crate::{
    paint::{RectBounds, path::Path, style::StrokeStyle},
    utils::vector::Vec2,
};
use eframe::egui::{self, Color32, Pos2, Shape, Stroke};

/// Below this on-screen width round joins and caps are indistinguishable from egui's own.
const MIN_ROUNDED_WIDTH: f32 = 2.0;

/// Draws surface geometry (physical pixels, canvas-local) with an egui painter (points).
///
/// egui anti-aliases through its global feathering option. Round joins and caps are filled
/// discs under the outline.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    pixels_per_point: f32,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2, pixels_per_point: f32) -> Self {
        Self {
            painter,
            origin,
            pixels_per_point: pixels_per_point.max(f32::EPSILON),
        }
    }

    fn to_screen(&self, p: Vec2) -> Pos2 {
        self.origin + egui::vec2(p.x, p.y) / self.pixels_per_point
    }

    fn screen_width(&self, style: &StrokeStyle) -> f32 {
        style.width / self.pixels_per_point
    }

    fn disc(&self, center: Pos2, width: f32, color: Color32) {
        self.painter.circle_filled(center, width * 0.5, color);
    }
}

impl PaintCanvas for EguiCanvas<'_> {
    fn draw_path(&mut self, path: &Path, style: &StrokeStyle) {
        let width = self.screen_width(style);
        let color = style.color.to_color32();
        // Sample curves at roughly one point per pixel on screen.
        let polylines = path.flatten(self.pixels_per_point);

        for polyline in polylines {
            // A lone move-to has no extent and paints nothing.
            if polyline.len() < 2 {
                continue;
            }
            let points: Vec<Pos2> = polyline.iter().map(|p| self.to_screen(*p)).collect();

            if width >= MIN_ROUNDED_WIDTH {
                for p in &points {
                    self.disc(*p, width, color);
                }
            }
            self.painter.add(Shape::line(points, Stroke::new(width, color)));
        }
    }

    fn draw_rect(&mut self, rect: &RectBounds, style: &StrokeStyle) {
        let width = self.screen_width(style);
        let color = style.color.to_color32();
        let corners = [
            self.to_screen(Vec2::new(rect.left, rect.top)),
            self.to_screen(Vec2::new(rect.right, rect.top)),
            self.to_screen(Vec2::new(rect.right, rect.bottom)),
            self.to_screen(Vec2::new(rect.left, rect.bottom)),
        ];

        if width >= MIN_ROUNDED_WIDTH {
            for corner in corners {
                self.disc(corner, width, color);
            }
        }
        let screen_rect = egui::Rect::from_two_pos(corners[0], corners[2]);
        self.painter
            .rect_stroke(screen_rect, 0.0, Stroke::new(width, color));
    }
}
