//! Cancellable timers for transient notices.
//!
//! A notice owns at most one pending [`Timeout`]. Scheduling a new one
//! replaces (and thereby cancels) the previous handle, and [`TransientTimer::cancel`]
//! drops it early when the user dismisses the notice by hand.

use gloo_timers::callback::Timeout;
use leptos::*;

#[derive(Clone, Copy)]
pub struct TransientTimer {
    handle: StoredValue<Option<Timeout>>,
}

impl TransientTimer {
    pub fn new() -> Self {
        Self { handle: store_value(None) }
    }

    /// Run `callback` after `millis`, superseding any pending callback.
    pub fn schedule(&self, millis: u32, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(millis, callback);
        self.handle.update_value(|slot| {
            if let Some(previous) = slot.replace(timeout) {
                previous.cancel();
            }
        });
    }

    pub fn cancel(&self) {
        self.handle.update_value(|slot| {
            if let Some(pending) = slot.take() {
                pending.cancel();
            }
        });
    }
}

impl Default for TransientTimer {
    fn default() -> Self {
        Self::new()
    }
}
