//! Small value types shared by the drawing core and the host.
pub mod color;
pub mod units;
pub mod vector;
