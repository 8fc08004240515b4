//! Notification surface
//!
//! Holds the most recent on-screen label and when it was shown. There is
//! no queue and no history; the label renderer polls the current label
//! and decides on its own when it has faded out.

use serde::{Deserialize, Serialize};

/// Capacity of the label text buffer, including the terminator slot
pub const LABEL_BUFFER_SIZE: usize = 256;

/// A label shown to the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Text to display
    pub text: String,
    /// Monotonic clock reading when the label was shown (ns)
    pub created_at_nsec: u64,
}

impl Label {
    /// Nanoseconds since the label was shown
    pub fn age_nsec(&self, now_nsec: u64) -> u64 {
        now_nsec.saturating_sub(self.created_at_nsec)
    }
}

/// Last-shown label slot
#[derive(Clone, Debug, Default)]
pub struct NotificationSurface {
    current: Option<Label>,
}

impl NotificationSurface {
    /// Create a surface with no label
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current label
    ///
    /// Text longer than the label buffer is cut at a character boundary.
    pub fn show(&mut self, text: impl Into<String>, now_nsec: u64) {
        let mut text = text.into();
        truncate_to_buffer(&mut text);
        self.current = Some(Label {
            text,
            created_at_nsec: now_nsec,
        });
    }

    /// Current label, if one was ever shown
    pub fn current(&self) -> Option<&Label> {
        self.current.as_ref()
    }

    /// Current label text
    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|label| label.text.as_str())
    }
}

fn truncate_to_buffer(text: &mut String) {
    let max = LABEL_BUFFER_SIZE - 1;
    if text.len() <= max {
        return;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_empty() {
        let surface = NotificationSurface::new();
        assert!(surface.current().is_none());
        assert!(surface.text().is_none());
    }

    #[test]
    fn test_show_overwrites() {
        let mut surface = NotificationSurface::new();
        surface.show("Position reset", 100);
        surface.show("Scale: 2.0x", 250);

        let label = surface.current().unwrap();
        assert_eq!(label.text, "Scale: 2.0x");
        assert_eq!(label.created_at_nsec, 250);
        assert_eq!(label.age_nsec(1_250), 1_000);
        assert_eq!(label.age_nsec(0), 0);
    }

    #[test]
    fn test_long_text_truncated() {
        let mut surface = NotificationSurface::new();
        surface.show("x".repeat(1000), 0);
        assert_eq!(surface.text().unwrap().len(), LABEL_BUFFER_SIZE - 1);
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        let mut surface = NotificationSurface::new();
        // 'é' is two bytes, so 255 bytes would split the last one
        surface.show("é".repeat(200), 0);
        let text = surface.text().unwrap();
        assert_eq!(text.len(), 254);
        assert!(text.chars().all(|c| c == 'é'));
    }
}
