//! In-memory window system for testing.
//!
//! Provides a HashMap-backed window table that records resize calls.

use std::collections::HashMap;

use super::WindowSystem;
use crate::error::WindowSystemError;
use crate::math::WindowGeometry;
use crate::types::WindowId;

/// In-memory window system for testing and headless use.
#[derive(Clone, Debug)]
pub struct MemoryWindowSystem {
    /// Root (desktop) window
    root: WindowId,
    /// Known windows and their geometry
    windows: HashMap<WindowId, WindowGeometry>,
    /// Every resize request, in order
    resizes: Vec<(WindowId, i32, i32)>,
    /// Reject resize requests (for failure tests)
    fail_resize: bool,
}

impl MemoryWindowSystem {
    /// Create a window system containing only the root window.
    pub fn new(root: WindowId, root_geometry: WindowGeometry) -> Self {
        let mut windows = HashMap::new();
        windows.insert(root, root_geometry);
        Self {
            root,
            windows,
            resizes: Vec::new(),
            fail_resize: false,
        }
    }

    /// Add or move a window.
    pub fn insert(&mut self, window: WindowId, geometry: WindowGeometry) {
        self.windows.insert(window, geometry);
    }

    /// Forget a window so geometry queries for it fail.
    pub fn remove(&mut self, window: WindowId) {
        self.windows.remove(&window);
    }

    /// Make subsequent resize requests fail.
    pub fn set_fail_resize(&mut self, fail: bool) {
        self.fail_resize = fail;
    }

    /// Resize requests seen so far.
    pub fn resizes(&self) -> &[(WindowId, i32, i32)] {
        &self.resizes
    }
}

impl WindowSystem for MemoryWindowSystem {
    fn geometry(&self, window: WindowId) -> Result<WindowGeometry, WindowSystemError> {
        self.windows
            .get(&window)
            .copied()
            .ok_or(WindowSystemError::GeometryUnavailable(window))
    }

    fn root(&self) -> WindowId {
        self.root
    }

    fn resize(
        &mut self,
        window: WindowId,
        width: i32,
        height: i32,
    ) -> Result<(), WindowSystemError> {
        if self.fail_resize {
            return Err(WindowSystemError::ResizeFailed {
                window,
                reason: String::from("resize rejected"),
            });
        }
        let geometry = self
            .windows
            .get_mut(&window)
            .ok_or(WindowSystemError::GeometryUnavailable(window))?;
        geometry.width = width;
        geometry.height = height;
        self.resizes.push((window, width, height));
        Ok(())
    }
}
