//! Input state shared across threads
//!
//! For hosts whose event callbacks run on a different thread than the frame
//! update. winit delivers everything on the event-loop thread and does not
//! need this.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::events::RawInputEvent;
use super::state::InputState;

/// Cloneable handle to a mutex-guarded [`InputState`]
#[derive(Debug, Clone, Default)]
pub struct SharedInputState {
    inner: Arc<Mutex<InputState>>,
}

impl SharedInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an event from any thread
    pub fn record(&self, event: RawInputEvent) {
        self.lock().apply(event);
    }

    /// Copies the current state for the frame update
    pub fn snapshot(&self) -> InputState {
        self.lock().clone()
    }

    /// Runs `f` with exclusive access to the state
    pub fn with_state<R>(&self, f: impl FnOnce(&mut InputState) -> R) -> R {
        f(&mut self.lock())
    }

    // A panicking writer leaves plain flags behind, never a broken invariant.
    fn lock(&self) -> MutexGuard<'_, InputState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
