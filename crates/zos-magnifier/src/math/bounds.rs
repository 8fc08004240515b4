use serde::{Deserialize, Serialize};

/// Physical screen size and the client viewport that presents the frame
///
/// The client size is what a frame is scaled from:
/// `frame_side = round(client_side / scale)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub screen_width: i32,
    pub screen_height: i32,
    pub client_width: i32,
    pub client_height: i32,
}

impl ScreenBounds {
    /// Create new screen bounds
    pub const fn new(
        screen_width: i32,
        screen_height: i32,
        client_width: i32,
        client_height: i32,
    ) -> Self {
        Self {
            screen_width,
            screen_height,
            client_width,
            client_height,
        }
    }

    /// Lowest scale at which the frame stops exceeding the screen on both axes
    pub fn critical_scale(&self) -> f64 {
        let by_width = f64::from(self.client_width) / f64::from(self.screen_width);
        let by_height = f64::from(self.client_height) / f64::from(self.screen_height);
        by_width.min(by_height)
    }
}

/// Last observed geometry of a window on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowGeometry {
    /// Create a new window geometry
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Frame rectangle handed to the renderer
///
/// `left`/`top` may be negative when the frame is larger than the screen
/// and hangs off both edges equally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl FrameRect {
    /// Create a new frame rectangle
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Get the right edge (exclusive)
    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    /// Get the bottom edge (exclusive)
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// Get the center point in screen pixels
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.left) + f64::from(self.width) * 0.5,
            f64::from(self.top) + f64::from(self.height) * 0.5,
        )
    }
}
