//! Screen Magnifier Core for Zero OS
//!
//! This crate provides the viewport/control core of the screen magnifier:
//! - Per-window magnification contexts (scale + frame rectangle)
//! - Frame clamping that keeps a scaled frame on the physical screen
//! - Scale transforms (uniform scaling, critical-scale fallback, centered zoom)
//! - Command handlers (activate, pan, zoom, reset, mode toggles)
//! - A notification surface polled by the label renderer
//!
//! ## Architecture
//!
//! - [`math`]: Screen bounds, window geometry and the clamping utilities
//! - [`context`]: Per-window state and the context registry
//! - [`notification`]: Last-shown label with its creation timestamp
//! - [`platform`]: Windowing and clock traits the engine calls into
//! - [`command`]: Serializable command set routed to the handlers
//! - [`shared`]: Lock-per-command handle for multi-threaded dispatch
//!
//! ## Example
//!
//! ```rust
//! use zos_magnifier::{
//!     MagnifierConfig, MagnifierEngine, ManualClock, MemoryWindowSystem, ScreenBounds,
//!     WindowGeometry,
//! };
//!
//! let mut windows = MemoryWindowSystem::new(1, WindowGeometry::new(0, 0, 1920, 1080));
//! windows.insert(7, WindowGeometry::new(100, 50, 800, 600));
//!
//! let mut engine = MagnifierEngine::new(
//!     MagnifierConfig::default(),
//!     ScreenBounds::new(1920, 1080, 1920, 1080),
//!     windows,
//!     ManualClock::new(0),
//! )
//! .unwrap();
//!
//! engine.activate(7).unwrap();
//! engine.zoom_in_handler();
//! assert_eq!(engine.frame().unwrap().width, 1536);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: Screen bounds, contexts and labels live in one engine object
//! 2. **Injectable Services**: Windowing and time are traits, testable without a display
//! 3. **Graceful Degradation**: Handlers never fail; rejected changes still give feedback

pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod math;
pub mod notification;
pub mod platform;
pub mod shared;

mod engine;
mod types;

// Re-export core types for convenience
pub use command::Command;
pub use config::{MagnifierConfig, MAX_MOVE_STEP};
pub use context::{ContextRegistry, WindowContext};
pub use error::{MagnifierError, MagnifierResult, WindowSystemError};
pub use math::{normalize_coord, reset_coord, scaled_side, FrameRect, ScreenBounds, WindowGeometry};
pub use notification::{Label, NotificationSurface, LABEL_BUFFER_SIZE};
pub use platform::{Clock, ManualClock, MemoryWindowSystem, MonotonicClock, WindowSystem};
pub use shared::SharedMagnifier;
pub use types::WindowId;

pub use engine::{Activation, MagnifierEngine, SCALE_EPS};
