use crate::{
    error::SurfaceError,
    paint::PaintMode,
    utils::{color::Color, units::DisplayDensity},
};

/// Live settings of one drawing surface: what the next gesture draws and how it looks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub mode: PaintMode,
    pub color: Color,
    /// Current width in render units; always positive.
    pub stroke_width: f32,
    pub density: DisplayDensity,
}

impl SessionState {
    pub fn new(
        mode: PaintMode,
        color: Color,
        stroke_width_dp: f32,
        density: DisplayDensity,
    ) -> Result<Self, SurfaceError> {
        let mut session = Self {
            mode,
            color: color.opaque(),
            stroke_width: 1.0,
            density,
        };
        session.set_stroke_width_dp(stroke_width_dp)?;
        Ok(session)
    }

    /// Store a width given in device-independent units, rejecting non-positive values.
    pub fn set_stroke_width_dp(&mut self, dp: f32) -> Result<(), SurfaceError> {
        if !dp.is_finite() || dp <= 0.0 {
            return Err(SurfaceError::InvalidStrokeWidth(dp));
        }
        self.stroke_width = self.density.to_render_units(dp);
        Ok(())
    }

    pub fn stroke_width_dp(&self) -> f32 {
        self.density.to_device_units(self.stroke_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_kept_in_render_units() {
        let density = DisplayDensity::new(3.0).unwrap();
        let session = SessionState::new(PaintMode::Line, Color::BLACK, 4.0, density).unwrap();
        assert_eq!(session.stroke_width, 12.0);
        assert_eq!(session.stroke_width_dp(), 4.0);
    }

    #[test]
    fn rejected_width_leaves_state_untouched() {
        let mut session =
            SessionState::new(PaintMode::Line, Color::BLACK, 4.0, DisplayDensity::BASELINE)
                .unwrap();
        assert_eq!(
            session.set_stroke_width_dp(0.0),
            Err(SurfaceError::InvalidStrokeWidth(0.0))
        );
        assert!(session.set_stroke_width_dp(-3.0).is_err());
        assert!(session.set_stroke_width_dp(f32::NAN).is_err());
        assert_eq!(session.stroke_width, 4.0);
    }

    #[test]
    fn color_is_forced_opaque() {
        let session = SessionState::new(
            PaintMode::Line,
            Color::from_argb(0x0011_2233),
            1.0,
            DisplayDensity::BASELINE,
        )
        .unwrap();
        assert_eq!(session.color, Color::from_argb(0xFF11_2233));
    }
}
