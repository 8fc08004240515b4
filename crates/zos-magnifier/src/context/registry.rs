//! Context registry
//!
//! Append-only store of window contexts with one active entry.
//! Contexts live in a vector arena; a hash index maps window IDs to slots.

use std::collections::HashMap;

use crate::context::WindowContext;
use crate::error::{MagnifierError, MagnifierResult};
use crate::types::WindowId;

/// Registry of every window that has ever been activated
#[derive(Debug, Default)]
pub struct ContextRegistry {
    /// Contexts in insertion order
    contexts: Vec<WindowContext>,
    /// Window ID -> slot in `contexts`
    index: HashMap<WindowId, usize>,
    /// Slot of the active context
    active: Option<usize>,
    /// Make the next reservation report allocation failure
    #[cfg(test)]
    pub(crate) fail_next_reserve: bool,
}

impl ContextRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked windows
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Check if no window has been tracked yet
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Check if a window has a context
    pub fn contains(&self, window: WindowId) -> bool {
        self.index.contains_key(&window)
    }

    /// Get the context for a window
    pub fn get(&self, window: WindowId) -> Option<&WindowContext> {
        self.index.get(&window).map(|&slot| &self.contexts[slot])
    }

    /// Get the active context
    pub fn active(&self) -> Option<&WindowContext> {
        self.active.map(|slot| &self.contexts[slot])
    }

    /// Get the active context mutably
    pub fn active_mut(&mut self) -> Option<&mut WindowContext> {
        self.active.map(|slot| &mut self.contexts[slot])
    }

    /// Window of the active context
    pub fn active_window(&self) -> Option<WindowId> {
        self.active().map(|ctx| ctx.window)
    }

    /// Make an existing context active
    ///
    /// Returns false if the window is unknown; the active context is unchanged.
    pub fn set_active(&mut self, window: WindowId) -> bool {
        match self.index.get(&window) {
            Some(&slot) => {
                self.active = Some(slot);
                true
            }
            None => false,
        }
    }

    /// Insert a new context and make it active
    ///
    /// Capacity is reserved up front so allocation failure leaves the
    /// registry untouched.
    pub fn try_insert(&mut self, context: WindowContext) -> MagnifierResult<&mut WindowContext> {
        debug_assert!(!self.contains(context.window));
        self.reserve_slot()?;

        let slot = self.contexts.len();
        self.index.insert(context.window, slot);
        self.contexts.push(context);
        self.active = Some(slot);

        Ok(&mut self.contexts[slot])
    }

    fn reserve_slot(&mut self) -> MagnifierResult<()> {
        #[cfg(test)]
        {
            if std::mem::take(&mut self.fail_next_reserve) {
                return Err(MagnifierError::ContextAllocation);
            }
        }
        self.contexts
            .try_reserve(1)
            .map_err(|_| MagnifierError::ContextAllocation)?;
        self.index
            .try_reserve(1)
            .map_err(|_| MagnifierError::ContextAllocation)?;
        Ok(())
    }

    /// Iterate contexts, most recently inserted first
    pub fn iter(&self) -> impl Iterator<Item = &WindowContext> {
        self.contexts.iter().rev()
    }
}
