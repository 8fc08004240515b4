//! Command handlers
//!
//! Entry points bound to user commands. Each acts on the active context,
//! never fails, and does nothing when no window has been activated.

use tracing::{debug, info, warn};

use super::MagnifierEngine;
use crate::platform::{Clock, WindowSystem};

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "On"
    } else {
        "Off"
    }
}

impl<W: WindowSystem, C: Clock> MagnifierEngine<W, C> {
    fn has_active(&self, handler: &'static str) -> bool {
        let active = self.contexts.active().is_some();
        if !active {
            debug!(handler, "ignored, no active context");
        }
        active
    }

    /// Re-center the frame on the active window
    pub fn reset_position_handler(&mut self) {
        if !self.has_active("reset_position") {
            return;
        }
        self.reset_position();
        self.update_frame_params();
        self.show_label("Position reset");
    }

    /// Pan up by one step
    pub fn move_up_handler(&mut self) {
        self.pan(0, -self.config.move_step);
    }

    /// Pan down by one step
    pub fn move_down_handler(&mut self) {
        self.pan(0, self.config.move_step);
    }

    /// Pan left by one step
    pub fn move_left_handler(&mut self) {
        self.pan(-self.config.move_step, 0);
    }

    /// Pan right by one step
    pub fn move_right_handler(&mut self) {
        self.pan(self.config.move_step, 0);
    }

    /// Zoom in one step and show the resulting scale
    pub fn zoom_in_handler(&mut self) {
        if !self.has_active("zoom_in") {
            return;
        }
        self.zoom_in();
        self.show_label_with_scale();
    }

    /// Zoom out one step and show the resulting scale
    pub fn zoom_out_handler(&mut self) {
        if !self.has_active("zoom_out") {
            return;
        }
        self.zoom_out();
        self.show_label_with_scale();
    }

    /// Return to the current mode's default scale
    pub fn reset_scale_handler(&mut self) {
        if !self.has_active("reset_scale") {
            return;
        }
        self.reset_scale();
        self.update_frame_params();
        self.show_label_with_scale();
    }

    /// Flip window tracking mode
    pub fn toggle_window_tracking_handler(&mut self) {
        self.window_tracking_enabled = !self.window_tracking_enabled;
        info!(enabled = self.window_tracking_enabled, "window tracking toggled");
        self.show_label(&format!(
            "Window tracking: {}",
            on_off(self.window_tracking_enabled)
        ));
    }

    /// Flip cursor capturing mode
    pub fn toggle_cursor_capturing_handler(&mut self) {
        self.cursor_capturing_enabled = !self.cursor_capturing_enabled;
        info!(enabled = self.cursor_capturing_enabled, "cursor capturing toggled");
        self.show_label(&format!(
            "Cursor capturing: {}",
            on_off(self.cursor_capturing_enabled)
        ));
    }

    /// Resize the active window to the frame and re-center on it
    pub fn adjust_window_size_handler(&mut self) {
        let Some((window, width, height)) = self
            .contexts
            .active()
            .map(|ctx| (ctx.window, ctx.frame_width, ctx.frame_height))
        else {
            debug!(handler = "adjust_window_size", "ignored, no active context");
            return;
        };

        if let Err(err) = self.window_system.resize(window, width, height) {
            warn!(window, width, height, %err, "window resize failed");
        }
        if let Err(err) = self.activate(window) {
            warn!(window, %err, "reactivation after resize failed");
        }
        self.reset_position();
        self.update_frame_params();
        self.show_label("Window adjusted");
    }
}
