use serde::{Deserialize, Serialize};

use crate::math::{scaled_side, FrameRect};
use crate::types::WindowId;

/// Magnification state for one tracked window
///
/// `frame_width`/`frame_height` are derived from `scale` and the client size;
/// they are only trustworthy right after the engine re-derived them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowContext {
    /// Window this context belongs to
    pub window: WindowId,
    /// Magnification factor (`frame_side = round(client_side / scale)`)
    pub scale: f64,
    /// Left edge of the frame on the screen
    pub frame_left: i32,
    /// Top edge of the frame on the screen
    pub frame_top: i32,
    /// Frame width in screen pixels
    pub frame_width: i32,
    /// Frame height in screen pixels
    pub frame_height: i32,
}

impl WindowContext {
    /// Create a context at the origin with no frame derived yet
    pub fn new(window: WindowId, scale: f64) -> Self {
        Self {
            window,
            scale,
            frame_left: 0,
            frame_top: 0,
            frame_width: 0,
            frame_height: 0,
        }
    }

    /// Derive frame dimensions from `scale` against the client size
    pub fn apply_scale(&mut self, scale: f64, client_width: i32, client_height: i32) {
        self.frame_width = scaled_side(client_width, scale);
        self.frame_height = scaled_side(client_height, scale);
    }

    /// Current frame as a rectangle
    pub fn frame(&self) -> FrameRect {
        FrameRect::new(
            self.frame_left,
            self.frame_top,
            self.frame_width,
            self.frame_height,
        )
    }
}
