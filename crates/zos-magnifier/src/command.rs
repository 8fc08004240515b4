//! Command set exposed to the input dispatcher
//!
//! Input bindings resolve to a [`Command`]; the engine routes each one to
//! its handler. Commands serialize as `{"command": "zoom-in"}` or
//! `{"command": "activate", "window": 42}`.

use serde::{Deserialize, Serialize};

use crate::engine::{Activation, MagnifierEngine};
use crate::error::MagnifierResult;
use crate::platform::{Clock, WindowSystem};
use crate::types::WindowId;

/// A single user command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", content = "window", rename_all = "kebab-case")]
pub enum Command {
    /// Track a window, creating its context on first sight
    Activate(WindowId),
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ZoomIn,
    ZoomOut,
    ResetPosition,
    ResetScale,
    ToggleWindowTracking,
    ToggleCursorCapturing,
    /// Resize the active window to the frame
    AdjustWindowSize,
}

impl Command {
    /// All commands that take no argument
    pub fn all() -> &'static [Command] {
        &[
            Command::MoveUp,
            Command::MoveDown,
            Command::MoveLeft,
            Command::MoveRight,
            Command::ZoomIn,
            Command::ZoomOut,
            Command::ResetPosition,
            Command::ResetScale,
            Command::ToggleWindowTracking,
            Command::ToggleCursorCapturing,
            Command::AdjustWindowSize,
        ]
    }

    /// Get the string ID for this command
    pub fn id(&self) -> &'static str {
        match self {
            Command::Activate(_) => "activate",
            Command::MoveUp => "move-up",
            Command::MoveDown => "move-down",
            Command::MoveLeft => "move-left",
            Command::MoveRight => "move-right",
            Command::ZoomIn => "zoom-in",
            Command::ZoomOut => "zoom-out",
            Command::ResetPosition => "reset-position",
            Command::ResetScale => "reset-scale",
            Command::ToggleWindowTracking => "toggle-window-tracking",
            Command::ToggleCursorCapturing => "toggle-cursor-capturing",
            Command::AdjustWindowSize => "adjust-window-size",
        }
    }

    /// Parse a zero-argument command from its string ID (e.g. "zoom-in")
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.to_lowercase();
        Self::all().iter().copied().find(|cmd| cmd.id() == id)
    }
}

impl<W: WindowSystem, C: Clock> MagnifierEngine<W, C> {
    /// Route a command to its handler
    ///
    /// Only activation can fail; every other command always succeeds.
    pub fn dispatch(&mut self, command: Command) -> MagnifierResult<Option<Activation>> {
        match command {
            Command::Activate(window) => return self.activate(window).map(Some),
            Command::MoveUp => self.move_up_handler(),
            Command::MoveDown => self.move_down_handler(),
            Command::MoveLeft => self.move_left_handler(),
            Command::MoveRight => self.move_right_handler(),
            Command::ZoomIn => self.zoom_in_handler(),
            Command::ZoomOut => self.zoom_out_handler(),
            Command::ResetPosition => self.reset_position_handler(),
            Command::ResetScale => self.reset_scale_handler(),
            Command::ToggleWindowTracking => self.toggle_window_tracking_handler(),
            Command::ToggleCursorCapturing => self.toggle_cursor_capturing_handler(),
            Command::AdjustWindowSize => self.adjust_window_size_handler(),
        }
        Ok(None)
    }
}
