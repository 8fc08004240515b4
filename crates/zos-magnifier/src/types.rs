//! Core type definitions for the magnifier
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Opaque window identifier
///
/// Matches the windowing system's native handle (an X11 `xcb_window_t`).
/// Stable for as long as the window exists.
pub type WindowId = u32;
