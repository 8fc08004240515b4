//! Platform services consumed by the engine
//!
//! The windowing binding and time source are external collaborators;
//! the engine only talks to them through these traits.

mod clock;
mod memory;

pub use clock::{ManualClock, MonotonicClock};
pub use memory::MemoryWindowSystem;

use crate::error::WindowSystemError;
use crate::math::WindowGeometry;
use crate::types::WindowId;

/// Windowing system binding
pub trait WindowSystem {
    /// Query the on-screen geometry of a window
    fn geometry(&self, window: WindowId) -> Result<WindowGeometry, WindowSystemError>;

    /// Root (desktop) window
    fn root(&self) -> WindowId;

    /// Resize a window
    fn resize(&mut self, window: WindowId, width: i32, height: i32)
        -> Result<(), WindowSystemError>;
}

/// Monotonic time source with nanosecond resolution
pub trait Clock {
    /// Nanoseconds since an arbitrary fixed origin
    fn now_nsec(&self) -> u64;
}
