pub mod app;
pub mod error;
pub mod gesture;
pub mod paint;
pub mod render;
pub mod session;
pub mod surface;
pub mod tablet;
pub mod ui;
pub mod utils;

pub use app::{LaunchOptions, SketchApp, parse_config_args};
pub use error::{ConfigError, SurfaceError};
pub use paint::{PaintMode, PaintObject};
pub use render::PaintCanvas;
pub use surface::{DrawingSurface, SurfaceConfig};
pub use utils::color::Color;
