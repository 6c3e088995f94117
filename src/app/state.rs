use crate::{
    error::ConfigError,
    paint::PaintMode,
    surface::SurfaceConfig,
    utils::{color::Color, units::DisplayDensity},
};

/// Startup settings for the app, filled from command-line flags.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LaunchOptions {
    pub config: SurfaceConfig,
    /// When false the window's pixels-per-point is used as the density.
    pub density_override: bool,
}

impl LaunchOptions {
    /// Final surface settings once the window's scale factor is known.
    pub fn resolve(&self, pixels_per_point: f32) -> SurfaceConfig {
        let mut config = self.config;
        if !self.density_override {
            match DisplayDensity::new(pixels_per_point) {
                Ok(density) => config.density = density,
                Err(e) => log::warn!("{e}, keeping density {}", config.density.scale()),
            }
        }
        config
    }
}

pub fn parse_mode(value: &str) -> Result<PaintMode, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "line" | "stroke" => Ok(PaintMode::Line),
        "rect" | "rectangle" => Ok(PaintMode::Rectangle),
        _ => Err(ConfigError::UnknownMode(value.to_string())),
    }
}

fn parse_number(flag: &'static str, value: &str) -> Result<f32, ConfigError> {
    value.parse::<f32>().map_err(|_| ConfigError::InvalidNumber {
        flag,
        value: value.to_string(),
    })
}

/// Parse `--color`, `--stroke-width`, `--mode`, `--touch-slop` and `--density`, each either
/// as `--flag value` or `--flag=value`.
pub fn parse_config_args<I>(args: I) -> Result<LaunchOptions, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = LaunchOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
            None => (arg.clone(), None),
        };
        let flag: &'static str = match flag.as_str() {
            "--color" => "--color",
            "--stroke-width" => "--stroke-width",
            "--mode" => "--mode",
            "--touch-slop" => "--touch-slop",
            "--density" => "--density",
            _ => return Err(ConfigError::UnknownArgument(arg)),
        };
        let value = match inline.or_else(|| args.next()) {
            Some(value) => value,
            None => return Err(ConfigError::MissingValue(flag)),
        };

        let config = &mut options.config;
        match flag {
            "--color" => {
                let color = Color::parse(&value).map_err(|source| ConfigError::InvalidColor {
                    value: value.clone(),
                    source,
                })?;
                config.color = color.opaque();
            }
            "--stroke-width" => config.stroke_width_dp = parse_number(flag, &value)?,
            "--mode" => config.mode = parse_mode(&value)?,
            "--touch-slop" => config.touch_slop_dp = parse_number(flag, &value)?,
            _ => {
                config.density = DisplayDensity::new(parse_number(flag, &value)?)?;
                options.density_override = true;
            }
        }
    }

    Ok(options)
}
