//! Position transforms for the active context

use tracing::trace;

use super::MagnifierEngine;
use crate::math::{reset_coord, scaled_side};
use crate::platform::{Clock, WindowSystem};

impl<W: WindowSystem, C: Clock> MagnifierEngine<W, C> {
    /// Center the active frame on the last observed window geometry
    ///
    /// Result is not clamped; callers follow up with `update_frame_params`.
    pub fn reset_position(&mut self) {
        let geometry = self.geometry;
        if let Some(ctx) = self.contexts.active_mut() {
            ctx.frame_top = reset_coord(ctx.frame_height, geometry.top, geometry.height);
            ctx.frame_left = reset_coord(ctx.frame_width, geometry.left, geometry.width);
        }
    }

    /// Shift the active frame so its center survives a change to `new_scale`
    ///
    /// Must run while the context still holds the old scale.
    pub fn center_zoomed_position(&mut self, new_scale: f64) {
        let bounds = self.bounds;
        if let Some(ctx) = self.contexts.active_mut() {
            let prev_width = scaled_side(bounds.client_width, ctx.scale);
            let prev_height = scaled_side(bounds.client_height, ctx.scale);
            let cur_width = scaled_side(bounds.client_width, new_scale);
            let cur_height = scaled_side(bounds.client_height, new_scale);
            ctx.frame_left += (prev_width - cur_width) / 2;
            ctx.frame_top += (prev_height - cur_height) / 2;
        }
    }

    /// Pan the active frame, then clamp it back on screen
    pub(super) fn pan(&mut self, dx: i32, dy: i32) {
        let Some(ctx) = self.contexts.active_mut() else {
            return;
        };
        ctx.frame_left = ctx.frame_left.saturating_add(dx);
        ctx.frame_top = ctx.frame_top.saturating_add(dy);
        trace!(dx, dy, frame_left = ctx.frame_left, frame_top = ctx.frame_top, "pan");
        self.update_frame_params();
    }
}
