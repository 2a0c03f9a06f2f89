//! Leptos Debounce Utilities
//!
//! Delays propagation of a rapidly changing value until it has stayed
//! unchanged for a configured interval. Intermediate values are never queued:
//! only the final settled value is emitted.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Handle for one pushed value. Only the most recent ticket can settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Timer-free debounce state machine.
///
/// The owner arms a timer for every [`Debouncer::push`] and calls
/// [`Debouncer::settle`] with the returned ticket when it fires. Any push in
/// between supersedes the earlier ticket, which restarts the wait.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    settled: T,
    pending: Option<T>,
    latest: u64,
    disposed: bool,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T) -> Self {
        Self {
            settled: initial,
            pending: None,
            latest: 0,
            disposed: false,
        }
    }

    /// Record a new input value and return the ticket that may settle it.
    pub fn push(&mut self, value: T) -> Ticket {
        self.latest += 1;
        self.pending = Some(value);
        Ticket(self.latest)
    }

    /// Settle the pending value if `ticket` is still the latest one.
    ///
    /// Returns `None` for superseded tickets, after [`Debouncer::dispose`], and
    /// when the pending value equals the last settled value.
    pub fn settle(&mut self, ticket: Ticket) -> Option<T> {
        if self.disposed || ticket.0 != self.latest {
            return None;
        }
        let value = self.pending.take()?;
        if value == self.settled {
            return None;
        }
        self.settled = value.clone();
        Some(value)
    }

    /// Stop emitting. Pending values are dropped.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.pending = None;
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

struct DebounceState<T> {
    debouncer: Debouncer<T>,
    timer: Option<Timeout>,
}

impl<T: Clone + PartialEq> DebounceState<T> {
    fn new(initial: T) -> Self {
        Self {
            debouncer: Debouncer::new(initial),
            timer: None,
        }
    }

    /// Drop the pending value and cancel the armed timer.
    fn dispose(&mut self) {
        self.debouncer.dispose();
        self.timer = None;
    }
}

/// Dispose `state` when the current reactive owner is cleaned up.
fn dispose_on_cleanup<T>(state: StoredValue<DebounceState<T>, LocalStorage>)
where
    T: Clone + PartialEq + 'static,
{
    on_cleanup(move || {
        state.try_update_value(|s| s.dispose());
    });
}

/// Debounced mirror of `source`.
///
/// The returned signal updates only after `source` has been unchanged for
/// `delay_ms` milliseconds. The pending timer is dropped (and therefore
/// cancelled) when the owning reactive scope is cleaned up.
pub fn use_debounced<T>(source: impl Into<Signal<T>>, delay_ms: u32) -> ReadSignal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let source = source.into();
    let initial = source.get_untracked();
    let (debounced, set_debounced) = signal(initial.clone());
    let state = StoredValue::new_local(DebounceState::new(initial));

    Effect::new(move |_| {
        let value = source.get();
        state.update_value(|s| {
            let ticket = s.debouncer.push(value);
            // Replacing the handle drops the previous timeout, which clears it.
            s.timer = Some(Timeout::new(delay_ms, move || {
                let settled = state
                    .try_update_value(|s| s.debouncer.settle(ticket))
                    .flatten();
                if let Some(value) = settled {
                    set_debounced.try_set(value);
                }
            }));
        });
    });

    dispose_on_cleanup(state);

    debounced
}
