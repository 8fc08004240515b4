//! Scale transforms for the active context

use tracing::debug;

use super::MagnifierEngine;
use crate::math::{normalize_coord, scaled_side};
use crate::platform::{Clock, WindowSystem};

/// Tolerance applied at the scale bounds
///
/// Scale is repeatedly multiplied by an inexact factor; without slack it
/// could stall just short of a bound.
pub const SCALE_EPS: f64 = 1e-6;

impl<W: WindowSystem, C: Clock> MagnifierEngine<W, C> {
    /// Derive frame size for `scale` on the active context
    ///
    /// Does not touch the stored scale.
    pub fn apply_scale(&mut self, scale: f64) {
        let bounds = self.bounds;
        if let Some(ctx) = self.contexts.active_mut() {
            ctx.apply_scale(scale, bounds.client_width, bounds.client_height);
        }
    }

    /// Re-derive the active frame from its scale and clamp it on screen
    ///
    /// If the frame would exceed the screen on both axes the critical scale
    /// is used for the frame size instead, leaving the stored scale as is.
    pub fn update_frame_params(&mut self) {
        let bounds = self.bounds;
        let Some(ctx) = self.contexts.active_mut() else {
            return;
        };

        let scale = ctx.scale;
        ctx.apply_scale(scale, bounds.client_width, bounds.client_height);
        if ctx.frame_width > bounds.screen_width && ctx.frame_height > bounds.screen_height {
            let critical_scale = bounds.critical_scale();
            debug!(scale, critical_scale, "frame exceeds screen, using critical scale");
            ctx.apply_scale(critical_scale, bounds.client_width, bounds.client_height);
        }

        ctx.frame_left = normalize_coord(ctx.frame_left, ctx.frame_width, bounds.screen_width);
        ctx.frame_top = normalize_coord(ctx.frame_top, ctx.frame_height, bounds.screen_height);
    }

    /// Set the active scale to the current mode's default
    pub fn reset_scale(&mut self) {
        let scale = self.default_scale();
        if let Some(ctx) = self.contexts.active_mut() {
            ctx.scale = scale;
        }
    }

    pub(super) fn default_scale(&self) -> f64 {
        if self.window_tracking_enabled {
            self.config.default_windows_scale
        } else {
            self.config.default_desktop_scale
        }
    }

    /// Multiply scale by the zoom factor, keeping the view center
    ///
    /// Returns false (leaving scale untouched) when the result would pass
    /// the maximum scale.
    pub fn zoom_in(&mut self) -> bool {
        let Some(scale) = self.contexts.active().map(|ctx| ctx.scale) else {
            return false;
        };

        let new_scale = scale * self.config.scale_factor;
        if new_scale < self.config.max_scale + SCALE_EPS {
            self.commit_scale(new_scale);
            true
        } else {
            debug!(scale, new_scale, "zoom in rejected at max scale");
            false
        }
    }

    /// Divide scale by the zoom factor, keeping the view center
    ///
    /// Returns false (leaving scale untouched) when the frame already covers
    /// the screen on both axes or the result would pass the minimum scale.
    pub fn zoom_out(&mut self) -> bool {
        let Some(scale) = self.contexts.active().map(|ctx| ctx.scale) else {
            return false;
        };

        let bounds = self.bounds;
        let prev_width = scaled_side(bounds.client_width, scale);
        let prev_height = scaled_side(bounds.client_height, scale);
        if prev_width >= bounds.screen_width && prev_height >= bounds.screen_height {
            debug!(scale, "zoom out rejected, frame already covers screen");
            return false;
        }

        let new_scale = scale / self.config.scale_factor;
        if new_scale > self.config.min_scale - SCALE_EPS {
            self.commit_scale(new_scale);
            true
        } else {
            debug!(scale, new_scale, "zoom out rejected at min scale");
            false
        }
    }

    fn commit_scale(&mut self, new_scale: f64) {
        // Centering reads the old scale, so it must run first
        self.center_zoomed_position(new_scale);
        if let Some(ctx) = self.contexts.active_mut() {
            ctx.scale = new_scale;
        }
        self.update_frame_params();
        debug!(scale = new_scale, "scale changed");
    }
}
