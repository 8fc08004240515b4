//! Shared engine handle for multi-threaded dispatch
//!
//! Input may arrive on more than one thread. Every command runs with the
//! engine lock held from start to finish, so the active context and its
//! fields are always mutated together.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::command::Command;
use crate::engine::{Activation, MagnifierEngine};
use crate::error::MagnifierResult;
use crate::platform::{Clock, WindowSystem};

/// Cloneable, lock-per-command handle to a [`MagnifierEngine`]
pub struct SharedMagnifier<W, C> {
    inner: Arc<Mutex<MagnifierEngine<W, C>>>,
}

impl<W, C> Clone for SharedMagnifier<W, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: WindowSystem, C: Clock> SharedMagnifier<W, C> {
    /// Wrap an engine
    pub fn new(engine: MagnifierEngine<W, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run one command under the lock
    pub fn execute(&self, command: Command) -> MagnifierResult<Option<Activation>> {
        self.lock().dispatch(command)
    }

    /// Read engine state under the lock
    pub fn with<R>(&self, f: impl FnOnce(&MagnifierEngine<W, C>) -> R) -> R {
        f(&*self.lock())
    }

    /// Mutate engine state under the lock
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut MagnifierEngine<W, C>) -> R) -> R {
        f(&mut *self.lock())
    }

    // Engine state is plain data, so a panicked holder leaves nothing half-built
    fn lock(&self) -> MutexGuard<'_, MagnifierEngine<W, C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MagnifierConfig;
    use crate::math::{ScreenBounds, WindowGeometry};
    use crate::platform::{ManualClock, MemoryWindowSystem};
    use std::thread;

    fn shared() -> SharedMagnifier<MemoryWindowSystem, ManualClock> {
        let mut ws = MemoryWindowSystem::new(1, WindowGeometry::new(0, 0, 1920, 1080));
        ws.insert(10, WindowGeometry::new(0, 0, 800, 600));
        ws.insert(20, WindowGeometry::new(500, 300, 800, 600));
        SharedMagnifier::new(MagnifierEngine::new(
            MagnifierConfig::default(),
            ScreenBounds::new(1920, 1080, 1920, 1080),
            ws,
            ManualClock::new(0),
        )
        .unwrap())
    }

    #[test]
    fn test_execute_and_read() {
        let magnifier = shared();
        magnifier.execute(Command::Activate(10)).unwrap();
        magnifier.execute(Command::ZoomIn).unwrap();

        let scale = magnifier.with(|engine| engine.active().map(|ctx| ctx.scale));
        assert!((scale.unwrap() - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_concurrent_commands_keep_frame_on_screen() {
        let magnifier = shared();
        magnifier.execute(Command::Activate(10)).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let magnifier = magnifier.clone();
                thread::spawn(move || {
                    for n in 0..50 {
                        let cmd = match (i + n) % 6 {
                            0 => Command::ZoomIn,
                            1 => Command::MoveRight,
                            2 => Command::MoveDown,
                            3 => Command::Activate(if i % 2 == 0 { 10 } else { 20 }),
                            4 => Command::ZoomOut,
                            _ => Command::MoveLeft,
                        };
                        magnifier.execute(cmd).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        magnifier.with(|engine| {
            let bounds = engine.screen_bounds();
            for ctx in engine.contexts().iter() {
                assert!(ctx.scale <= engine.config().max_scale + crate::SCALE_EPS);
                assert!(ctx.scale >= engine.config().min_scale - crate::SCALE_EPS);
                assert!(ctx.frame_left >= 0);
                assert!(ctx.frame_left + ctx.frame_width <= bounds.screen_width);
                assert!(ctx.frame_top >= 0);
                assert!(ctx.frame_top + ctx.frame_height <= bounds.screen_height);
            }
        });
    }
}
