pub mod input_handler;
pub mod painter;
pub mod state;

pub use painter::SketchApp;
pub use state::{LaunchOptions, parse_config_args};
