//! The drawing surface: one session, its gesture tracker and its committed drawings.
use crate::{
    error::SurfaceError,
    gesture::{GestureTracker, TrackerOutcome},
    paint::{PaintMode, PaintObject, store::DrawingStore},
    render::{self, PaintCanvas},
    session::SessionState,
    utils::{color::Color, units::DisplayDensity, vector::Vec2},
};

/// Default touch slop, in device-independent units.
pub const DEFAULT_TOUCH_SLOP_DP: f32 = 8.0;
pub const DEFAULT_STROKE_WIDTH_DP: f32 = 12.0;

/// Settings read once when a surface is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceConfig {
    pub color: Color,
    pub stroke_width_dp: f32,
    pub mode: PaintMode,
    pub touch_slop_dp: f32,
    pub density: DisplayDensity,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            stroke_width_dp: DEFAULT_STROKE_WIDTH_DP,
            mode: PaintMode::Line,
            touch_slop_dp: DEFAULT_TOUCH_SLOP_DP,
            density: DisplayDensity::BASELINE,
        }
    }
}

/// Owns everything one drawing view needs. Pointer coordinates are in render units.
#[derive(Debug)]
pub struct DrawingSurface {
    session: SessionState,
    tracker: GestureTracker,
    store: DrawingStore,
    redraw_requested: bool,
}

impl DrawingSurface {
    pub fn new(config: SurfaceConfig) -> Result<Self, SurfaceError> {
        if !config.touch_slop_dp.is_finite() || config.touch_slop_dp < 0.0 {
            return Err(SurfaceError::InvalidTouchSlop(config.touch_slop_dp));
        }
        let session = SessionState::new(
            config.mode,
            config.color,
            config.stroke_width_dp,
            config.density,
        )?;
        let tolerance = config.density.to_render_units(config.touch_slop_dp);
        log::debug!(
            "surface created: mode {}, width {} px, slop {} px, density {}",
            session.mode.label(),
            session.stroke_width,
            tolerance,
            config.density.scale()
        );
        Ok(Self {
            session,
            tracker: GestureTracker::new(tolerance),
            store: DrawingStore::new(),
            redraw_requested: false,
        })
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        let outcome = self.tracker.pointer_down(Vec2::new(x, y), &self.session);
        self.note(outcome);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let outcome = self.tracker.pointer_move(Vec2::new(x, y), &self.session);
        self.note(outcome);
    }

    /// The release position is not part of the shape; the last accepted move is.
    pub fn on_pointer_up(&mut self, _x: f32, _y: f32) {
        let outcome = self.tracker.pointer_up(&self.session, &mut self.store);
        self.note(outcome);
    }

    fn note(&mut self, outcome: TrackerOutcome) {
        if outcome.needs_redraw() {
            self.redraw_requested = true;
        }
    }

    pub fn render(&self, canvas: &mut dyn PaintCanvas) {
        render::render_frame(canvas, &self.store, &self.tracker, &self.session);
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn set_mode(&mut self, mode: PaintMode) {
        if mode == self.session.mode {
            return;
        }
        if self.tracker.is_active() {
            log::warn!(
                "mode switched to {} mid-gesture, the {} builder keeps its stale state",
                mode.label(),
                self.session.mode.label()
            );
        }
        log::debug!("mode set to {}", mode.label());
        self.session.mode = mode;
    }

    pub fn mode(&self) -> PaintMode {
        self.session.mode
    }

    pub fn set_color(&mut self, color: Color) {
        if !color.is_opaque() {
            log::debug!("dropping alpha from {:#010x}", color.argb());
        }
        self.session.color = color.opaque();
        self.redraw_requested = true;
    }

    pub fn color(&self) -> Color {
        self.session.color
    }

    /// Width in device-independent units; rejected widths leave the current one in place.
    pub fn set_stroke_width(&mut self, width_dp: f32) -> Result<(), SurfaceError> {
        self.session.set_stroke_width_dp(width_dp)?;
        log::debug!("stroke width set to {width_dp} dp ({} px)", self.session.stroke_width);
        self.redraw_requested = true;
        Ok(())
    }

    /// Width in device-independent units.
    pub fn stroke_width(&self) -> f32 {
        self.session.stroke_width_dp()
    }

    pub fn density(&self) -> DisplayDensity {
        self.session.density
    }

    pub fn touch_slop(&self) -> f32 {
        self.tracker.tolerance()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn drawings(&self) -> &[PaintObject] {
        self.store.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{
        RectBounds,
        path::{Path, PathCommand},
    };
    use crate::render::{DrawCommand, RecordingCanvas};

    fn surface() -> DrawingSurface {
        DrawingSurface::new(SurfaceConfig::default()).unwrap()
    }

    fn hd_surface() -> DrawingSurface {
        DrawingSurface::new(SurfaceConfig {
            density: DisplayDensity::new(2.75).unwrap(),
            ..SurfaceConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn line_gesture_commits_one_smoothed_stroke() {
        let mut s = surface();
        let tol = s.touch_slop();
        s.set_mode(PaintMode::Line);
        s.on_pointer_down(10.0, 10.0);
        s.on_pointer_move(10.0, 10.0 + 2.0 * tol);
        s.on_pointer_up(10.0, 10.0 + 2.0 * tol);

        assert_eq!(s.drawings().len(), 1);
        let PaintObject::Stroke { path, .. } = &s.drawings()[0] else {
            panic!("expected a stroke, got {:?}", s.drawings()[0]);
        };
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Vec2::new(10.0, 10.0)),
                PathCommand::QuadTo {
                    control: Vec2::new(10.0, 10.0),
                    end: Vec2::new(10.0, 10.0 + tol),
                },
            ]
        );
    }

    #[test]
    fn rectangle_gesture_commits_bounds() {
        let mut s = surface();
        s.set_mode(PaintMode::Rectangle);
        s.on_pointer_down(0.0, 0.0);
        s.on_pointer_move(50.0, 50.0);
        s.on_pointer_up(50.0, 50.0);

        assert_eq!(
            s.drawings(),
            &[PaintObject::Rectangle {
                color: Color::BLACK,
                stroke_width: DEFAULT_STROKE_WIDTH_DP,
                bounds: RectBounds::new(0.0, 0.0, 50.0, 50.0),
            }]
        );
    }

    #[test]
    fn taps_still_commit_degenerate_objects() {
        let mut s = surface();
        s.on_pointer_down(5.0, 5.0);
        s.on_pointer_up(5.0, 5.0);

        s.set_mode(PaintMode::Rectangle);
        s.on_pointer_down(7.0, 9.0);
        s.on_pointer_up(7.0, 9.0);

        let drawings = s.drawings();
        assert_eq!(drawings.len(), 2);
        let PaintObject::Stroke { path, .. } = &drawings[0] else {
            panic!("expected a stroke");
        };
        assert_eq!(path.commands(), &[PathCommand::MoveTo(Vec2::new(5.0, 5.0))]);
        let PaintObject::Rectangle { bounds, .. } = &drawings[1] else {
            panic!("expected a rectangle");
        };
        assert!(bounds.is_empty());
        assert_eq!(*bounds, RectBounds::new(7.0, 9.0, 7.0, 9.0));
    }

    #[test]
    fn committed_style_is_read_at_release_and_then_frozen() {
        let mut s = surface();
        s.on_pointer_down(0.0, 0.0);
        s.on_pointer_move(30.0, 30.0);
        s.set_color(Color::rgb(200, 0, 0));
        s.set_stroke_width(20.0).unwrap();
        s.on_pointer_up(30.0, 30.0);

        s.set_color(Color::rgb(0, 200, 0));
        s.set_stroke_width(3.0).unwrap();

        let committed = &s.drawings()[0];
        assert_eq!(committed.color(), Color::rgb(200, 0, 0));
        assert_eq!(committed.stroke_width(), 20.0);
    }

    #[test]
    fn suppressed_move_requests_no_redraw() {
        let mut s = surface();
        let tol = s.touch_slop();
        s.on_pointer_down(100.0, 100.0);
        assert!(!s.take_redraw_request());

        s.on_pointer_move(100.0 + tol * 0.5, 100.0 - tol * 0.5);
        assert!(!s.take_redraw_request());

        s.on_pointer_move(100.0 + tol, 100.0);
        assert!(s.take_redraw_request());
        assert!(!s.take_redraw_request());

        s.on_pointer_up(100.0 + tol, 100.0);
        assert!(s.take_redraw_request());
    }

    #[test]
    fn stroke_width_round_trips_through_density() {
        let mut s = hd_surface();
        for w in [1.0_f32, 2.5, 12.0, 37.3, 100.0] {
            s.set_stroke_width(w).unwrap();
            assert!((s.stroke_width() - w).abs() <= w * 1e-5, "{w} -> {}", s.stroke_width());
        }
        assert_eq!(s.session().stroke_width, s.density().to_render_units(100.0));
    }

    #[test]
    fn invalid_stroke_width_is_rejected() {
        let mut s = surface();
        s.set_stroke_width(6.0).unwrap();
        assert_eq!(
            s.set_stroke_width(0.0),
            Err(SurfaceError::InvalidStrokeWidth(0.0))
        );
        assert!(s.set_stroke_width(-1.0).is_err());
        assert!(s.set_stroke_width(f32::INFINITY).is_err());
        assert_eq!(s.stroke_width(), 6.0);
    }

    #[test]
    fn touch_slop_scales_with_density() {
        let s = hd_surface();
        assert_eq!(s.touch_slop(), DEFAULT_TOUCH_SLOP_DP * 2.75);
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(
            DrawingSurface::new(SurfaceConfig {
                stroke_width_dp: 0.0,
                ..SurfaceConfig::default()
            })
            .is_err()
        );
        assert_eq!(
            DrawingSurface::new(SurfaceConfig {
                touch_slop_dp: -1.0,
                ..SurfaceConfig::default()
            })
            .unwrap_err(),
            SurfaceError::InvalidTouchSlop(-1.0)
        );
    }

    #[test]
    fn mode_switch_leaves_history_alone_and_applies_to_next_gesture() {
        let mut s = surface();
        s.on_pointer_down(0.0, 0.0);
        s.on_pointer_move(40.0, 0.0);
        s.on_pointer_up(40.0, 0.0);
        let before = s.drawings().to_vec();

        s.set_mode(PaintMode::Rectangle);
        assert_eq!(s.drawings(), before.as_slice());

        s.on_pointer_down(10.0, 10.0);
        s.on_pointer_move(60.0, 70.0);
        s.on_pointer_up(60.0, 70.0);
        assert_eq!(s.drawings()[0], before[0]);
        assert_eq!(s.drawings()[1].mode(), PaintMode::Rectangle);
    }

    #[test]
    fn mode_switch_mid_gesture_finalizes_the_stale_builder() {
        let mut s = surface();
        s.set_mode(PaintMode::Rectangle);
        s.on_pointer_down(10.0, 10.0);
        s.set_mode(PaintMode::Line);
        s.on_pointer_move(40.0, 10.0);
        s.on_pointer_up(40.0, 10.0);

        // The path builder never saw a move-to; the rectangle start is lost.
        let mut expected = Path::new();
        expected.quad_to(Vec2::new(10.0, 10.0), Vec2::new(25.0, 10.0));
        assert_eq!(
            s.drawings(),
            &[PaintObject::Stroke {
                color: Color::BLACK,
                stroke_width: DEFAULT_STROKE_WIDTH_DP,
                path: expected,
            }]
        );
    }

    #[test]
    fn render_replays_history_before_live_gesture() {
        let mut s = surface();
        s.set_color(Color::rgb(255, 0, 0));
        s.on_pointer_down(0.0, 0.0);
        s.on_pointer_move(20.0, 0.0);
        s.on_pointer_up(20.0, 0.0);

        s.set_color(Color::rgb(0, 0, 255));
        s.set_mode(PaintMode::Rectangle);
        s.on_pointer_down(5.0, 5.0);
        s.on_pointer_move(15.0, 15.0);

        let mut canvas = RecordingCanvas::new();
        s.render(&mut canvas);
        assert_eq!(canvas.commands.len(), 2);
        match (&canvas.commands[0], &canvas.commands[1]) {
            (DrawCommand::Path { style: old, .. }, DrawCommand::Rect { rect, style: live }) => {
                assert_eq!(old.color, Color::rgb(255, 0, 0));
                assert_eq!(live.color, Color::rgb(0, 0, 255));
                assert_eq!(*rect, RectBounds::new(5.0, 5.0, 15.0, 15.0));
            }
            other => panic!("unexpected draw order {other:?}"),
        }
    }

    #[test]
    fn alpha_is_dropped_from_colors() {
        let mut s = surface();
        s.set_color(Color::from_argb(0x4000_FF00));
        assert_eq!(s.color(), Color::from_argb(0xFF00_FF00));
    }
}
