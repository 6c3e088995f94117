//! Error types for surface construction, width changes and command-line configuration.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("stroke width must be a positive finite number, got {0}")]
    InvalidStrokeWidth(f32),
    #[error("display density must be a positive finite number, got {0}")]
    InvalidDensity(f32),
    #[error("touch slop must be a non-negative finite number, got {0}")]
    InvalidTouchSlop(f32),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid number for {flag}: {value:?}")]
    InvalidNumber { flag: &'static str, value: String },
    #[error("unknown paint mode {0:?}, expected `line` or `rect`")]
    UnknownMode(String),
    #[error("invalid color {value:?}: {source}")]
    InvalidColor {
        value: String,
        #[source]
        source: csscolorparser::ParseColorError,
    },
    #[error("unknown argument {0:?}")]
    UnknownArgument(String),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
