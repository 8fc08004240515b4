//! Magnifier engine coordinating all components
//!
//! The engine owns everything that used to be process-wide state: screen
//! bounds, the last observed window geometry, the context registry, the
//! notification surface and the live mode flags. Handlers mutate only the
//! active context.

mod handlers;
mod position;
mod scale;

pub use scale::SCALE_EPS;

use tracing::{debug, info, warn};

use crate::config::MagnifierConfig;
use crate::context::{ContextRegistry, WindowContext};
use crate::error::MagnifierResult;
use crate::math::{FrameRect, ScreenBounds, WindowGeometry};
use crate::notification::{Label, NotificationSurface};
use crate::platform::{Clock, WindowSystem};
use crate::types::WindowId;

/// Outcome of a successful activation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The window was already active; nothing changed
    AlreadyActive,
    /// A previously seen window became active with its saved scale and position
    Switched,
    /// A new context was created for the window
    Created,
}

/// Magnifier engine
///
/// This is the main entry point for magnifier operations, managing:
/// - Screen and client bounds
/// - Window contexts (one per activated window, one active)
/// - Scale and position transforms of the active frame
/// - The notification label
pub struct MagnifierEngine<W, C> {
    /// Read-only tunables
    config: MagnifierConfig,
    /// Screen and client viewport size
    bounds: ScreenBounds,
    /// Geometry observed during the last activation
    geometry: WindowGeometry,
    /// Per-window contexts
    contexts: ContextRegistry,
    /// Last shown label
    labels: NotificationSurface,
    /// Live window tracking mode
    window_tracking_enabled: bool,
    /// Live cursor capturing mode
    cursor_capturing_enabled: bool,
    /// Windowing binding
    window_system: W,
    /// Monotonic time source for labels
    clock: C,
}

impl<W: WindowSystem, C: Clock> MagnifierEngine<W, C> {
    /// Create an engine with no active context
    ///
    /// The configuration is validated first; an out-of-range value is
    /// reported as [`crate::MagnifierError::InvalidConfig`].
    pub fn new(
        config: MagnifierConfig,
        bounds: ScreenBounds,
        window_system: W,
        clock: C,
    ) -> MagnifierResult<Self> {
        config.validate()?;
        Ok(Self {
            window_tracking_enabled: config.window_tracking_enabled,
            cursor_capturing_enabled: config.cursor_capturing_enabled,
            config,
            bounds,
            geometry: WindowGeometry::default(),
            contexts: ContextRegistry::new(),
            labels: NotificationSurface::new(),
            window_system,
            clock,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &MagnifierConfig {
        &self.config
    }

    /// Get the screen and client bounds
    pub fn screen_bounds(&self) -> ScreenBounds {
        self.bounds
    }

    /// Replace the screen and client bounds and refit the active frame
    pub fn set_screen_bounds(&mut self, bounds: ScreenBounds) {
        debug!(
            screen_width = bounds.screen_width,
            screen_height = bounds.screen_height,
            client_width = bounds.client_width,
            client_height = bounds.client_height,
            "screen bounds changed"
        );
        self.bounds = bounds;
        self.update_frame_params();
    }

    /// Geometry observed during the last activation
    pub fn window_geometry(&self) -> WindowGeometry {
        self.geometry
    }

    /// Get the context registry
    pub fn contexts(&self) -> &ContextRegistry {
        &self.contexts
    }

    /// Get the active context
    pub fn active(&self) -> Option<&WindowContext> {
        self.contexts.active()
    }

    /// Active frame rectangle for the renderer
    pub fn frame(&self) -> Option<FrameRect> {
        self.contexts.active().map(WindowContext::frame)
    }

    /// Current notification label
    pub fn label(&self) -> Option<&Label> {
        self.labels.current()
    }

    /// Check if window tracking is on
    pub fn window_tracking_enabled(&self) -> bool {
        self.window_tracking_enabled
    }

    /// Check if cursor capturing is on
    pub fn cursor_capturing_enabled(&self) -> bool {
        self.cursor_capturing_enabled
    }

    /// Get the windowing binding
    ///
    /// Lets callers inspect what the engine asked of the window system,
    /// e.g. the resize log of a [`crate::MemoryWindowSystem`].
    pub fn window_system(&self) -> &W {
        &self.window_system
    }

    /// Get the windowing binding mutably
    ///
    /// Used to add or remove windows and inject resize failures between
    /// commands.
    pub fn window_system_mut(&mut self) -> &mut W {
        &mut self.window_system
    }

    /// Get the clock
    ///
    /// With a [`crate::ManualClock`] this is how label timestamps are steered.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Make a window's context active, creating it on first sight
    ///
    /// Switching back to a known window keeps its scale and position.
    /// A new context starts at the mode's default scale, centered on the
    /// window and normalized against the screen. If the context cannot be
    /// allocated the previous active context stays active.
    pub fn activate(&mut self, window: WindowId) -> MagnifierResult<Activation> {
        let window = self.refresh_geometry(window);

        if self.contexts.active_window() == Some(window) {
            return Ok(Activation::AlreadyActive);
        }

        if self.contexts.set_active(window) {
            debug!(window, "switched to existing context");
            return Ok(Activation::Switched);
        }

        let context = WindowContext::new(window, self.default_scale());
        if let Err(err) = self.contexts.try_insert(context) {
            warn!(window, %err, "activation aborted");
            return Err(err);
        }

        self.update_frame_params();
        self.reset_position();
        self.update_frame_params();

        if let Some(ctx) = self.contexts.active() {
            info!(
                window,
                scale = ctx.scale,
                frame_left = ctx.frame_left,
                frame_top = ctx.frame_top,
                frame_width = ctx.frame_width,
                frame_height = ctx.frame_height,
                "created window context"
            );
        }
        Ok(Activation::Created)
    }

    /// Re-read geometry for `window`, falling back to the root window
    ///
    /// Returns the window that activation should target.
    fn refresh_geometry(&mut self, window: WindowId) -> WindowId {
        match self.window_system.geometry(window) {
            Ok(geometry) => {
                self.geometry = geometry;
                window
            }
            Err(err) => {
                let root = self.window_system.root();
                warn!(window, root, %err, "geometry unavailable, using root window");
                match self.window_system.geometry(root) {
                    Ok(geometry) => self.geometry = geometry,
                    Err(err) => warn!(root, %err, "root geometry unavailable, keeping last geometry"),
                }
                root
            }
        }
    }

    /// Show a label stamped with the current time
    pub fn show_label(&mut self, text: &str) {
        let now = self.clock.now_nsec();
        self.labels.show(text, now);
    }

    /// Show the active context's scale, e.g. `Scale: 1.3x`
    pub fn show_label_with_scale(&mut self) {
        if let Some(scale) = self.contexts.active().map(|ctx| ctx.scale) {
            self.show_label(&format!("Scale: {:.1}x", scale));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MagnifierError;
    use crate::platform::{ManualClock, MemoryWindowSystem};

    const ROOT: WindowId = 1;

    fn engine() -> MagnifierEngine<MemoryWindowSystem, ManualClock> {
        let mut ws = MemoryWindowSystem::new(ROOT, WindowGeometry::new(0, 0, 1920, 1080));
        ws.insert(10, WindowGeometry::new(100, 50, 800, 600));
        ws.insert(20, WindowGeometry::new(0, 0, 400, 300));
        MagnifierEngine::new(
            MagnifierConfig::default(),
            ScreenBounds::new(1920, 1080, 1920, 1080),
            ws,
            ManualClock::new(1_000),
        )
        .unwrap()
    }

    #[test]
    fn test_new_engine_has_no_active_context() {
        let engine = engine();
        assert!(engine.active().is_none());
        assert!(engine.frame().is_none());
        assert!(engine.label().is_none());
    }

    #[test]
    fn test_activate_creates_context() {
        let mut engine = engine();
        assert_eq!(engine.activate(10).unwrap(), Activation::Created);

        let ctx = engine.active().unwrap();
        assert_eq!(ctx.window, 10);
        assert!((ctx.scale - 1.0).abs() < 1e-9);
        assert_eq!(engine.frame().unwrap(), FrameRect::new(0, 0, 1920, 1080));
        assert_eq!(engine.window_geometry(), WindowGeometry::new(100, 50, 800, 600));
    }

    #[test]
    fn test_activate_twice_is_noop() {
        let mut engine = engine();
        engine.activate(10).unwrap();
        engine.zoom_in_handler();
        let before = engine.active().unwrap().clone();

        assert_eq!(engine.activate(10).unwrap(), Activation::AlreadyActive);
        assert_eq!(engine.active().unwrap(), &before);
        assert_eq!(engine.contexts().len(), 1);
    }

    #[test]
    fn test_switch_back_preserves_state() {
        let mut engine = engine();
        engine.activate(10).unwrap();
        engine.zoom_in_handler();
        engine.zoom_in_handler();
        let saved = engine.active().unwrap().clone();

        assert_eq!(engine.activate(20).unwrap(), Activation::Created);
        assert_eq!(engine.activate(10).unwrap(), Activation::Switched);
        assert_eq!(engine.active().unwrap(), &saved);
    }

    #[test]
    fn test_activate_unknown_window_falls_back_to_root() {
        let mut engine = engine();
        assert_eq!(engine.activate(999).unwrap(), Activation::Created);
        assert_eq!(engine.contexts().active_window(), Some(ROOT));
        assert_eq!(engine.window_geometry(), WindowGeometry::new(0, 0, 1920, 1080));
        assert!(!engine.contexts().contains(999));
    }

    #[test]
    fn test_new_context_uses_tracking_scale() {
        let mut ws = MemoryWindowSystem::new(ROOT, WindowGeometry::new(0, 0, 1920, 1080));
        ws.insert(10, WindowGeometry::new(100, 50, 800, 600));
        let config = MagnifierConfig {
            window_tracking_enabled: true,
            default_windows_scale: 2.0,
            ..Default::default()
        };
        let mut engine = MagnifierEngine::new(
            config,
            ScreenBounds::new(1920, 1080, 1920, 1080),
            ws,
            ManualClock::new(0),
        )
        .unwrap();

        engine.activate(10).unwrap();
        let ctx = engine.active().unwrap();
        assert!((ctx.scale - 2.0).abs() < 1e-9);
        // 960x540 frame centered on the 800x600 window at (100, 50)
        assert_eq!(ctx.frame(), FrameRect::new(20, 50, 960, 540));
    }

    #[test]
    fn test_show_label_with_scale_format() {
        let mut engine = engine();
        engine.show_label_with_scale();
        assert!(engine.label().is_none());

        engine.activate(10).unwrap();
        engine.clock().set(42);
        engine.show_label_with_scale();
        let label = engine.label().unwrap();
        assert_eq!(label.text, "Scale: 1.0x");
        assert_eq!(label.created_at_nsec, 42);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let ws = MemoryWindowSystem::new(ROOT, WindowGeometry::new(0, 0, 1920, 1080));
        let config = MagnifierConfig {
            move_step: i32::MAX,
            ..Default::default()
        };
        let result = MagnifierEngine::new(
            config,
            ScreenBounds::new(1920, 1080, 1920, 1080),
            ws,
            ManualClock::new(0),
        );
        assert!(matches!(
            result,
            Err(MagnifierError::InvalidConfig { field: "move_step", .. })
        ));
    }

    #[test]
    fn test_allocation_failure_keeps_previous_context() {
        let mut engine = engine();
        engine.activate(10).unwrap();
        engine.zoom_in_handler();
        let saved = engine.active().unwrap().clone();

        engine.contexts.fail_next_reserve = true;
        assert_eq!(engine.activate(20), Err(MagnifierError::ContextAllocation));

        assert_eq!(engine.active().unwrap(), &saved);
        assert_eq!(engine.contexts().len(), 1);
        assert!(!engine.contexts().contains(20));

        // The hook fires once; the next activation succeeds
        assert_eq!(engine.activate(20).unwrap(), Activation::Created);
    }
}
