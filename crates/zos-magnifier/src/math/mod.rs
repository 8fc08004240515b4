//! Core geometry types for the magnifier
//!
//! Integer screen-space rectangles and the pure clamping rules that
//! keep a scaled frame on the physical screen.

mod bounds;
mod geometry;

pub use bounds::{FrameRect, ScreenBounds, WindowGeometry};
pub use geometry::{normalize_coord, reset_coord, scaled_side};
