//! Window context module
//!
//! Per-window magnification state and the registry that owns it.

mod registry;
mod window_context;

pub use registry::ContextRegistry;
pub use window_context::WindowContext;
