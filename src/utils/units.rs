use crate::error::SurfaceError;

/// Scale factor between device-independent units and render units (physical pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayDensity(f32);

impl DisplayDensity {
    /// Baseline density: one device-independent unit per pixel.
    pub const BASELINE: DisplayDensity = DisplayDensity(1.0);

    pub fn new(scale: f32) -> Result<Self, SurfaceError> {
        if scale.is_finite() && scale > 0.0 {
            Ok(Self(scale))
        } else {
            Err(SurfaceError::InvalidDensity(scale))
        }
    }

    pub fn scale(self) -> f32 {
        self.0
    }

    /// Device-independent units to render units.
    pub fn to_render_units(self, dp: f32) -> f32 {
        dp * self.0
    }

    /// Render units back to device-independent units.
    pub fn to_device_units(self, px: f32) -> f32 {
        px / self.0
    }
}

impl Default for DisplayDensity {
    fn default() -> Self {
        Self::BASELINE
    }
}
