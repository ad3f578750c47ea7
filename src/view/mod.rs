//! View layer - geometry, overlap queries and surface drawing
//!
//! Everything here is pure with respect to the dropdown state: functions read
//! the page or draw onto surfaces, but never touch the registry.

pub mod geometry;
pub mod overlap;
pub mod sparkline;
pub mod surface;

pub use geometry::Rect;
pub use overlap::find_overlapping;
pub use surface::{Color, Surface};
