//! Spin state machines driven by an injected scheduler.
//!
//! Each block session moves `Idle -> Spinning -> Revealing -> Idle` and never owns a
//! timer itself. It asks a [`Scheduler`] to deliver events later and reacts to them in
//! `advance`. The browser host backs the scheduler with real timeouts, tests use
//! [`ManualScheduler`] and step virtual time.

pub mod clock;
pub mod slot_session;
pub mod wheel_session;

use serde::{Deserialize, Serialize};

pub use clock::ManualScheduler;
pub use slot_session::{SlotEvent, SlotSession};
pub use wheel_session::{WheelEvent, WheelSession};

/// How long a revealed result stays up before the session returns to idle
pub const REVEAL_HOLD_MS: u32 = 1500;
/// Pause between auto-spin rounds once the session is idle again
pub const AUTO_SPIN_DELAY_MS: u32 = 1000;

pub type TimerId = u64;

/// Delivers an event back to the session after a delay.
pub trait Scheduler<E> {
    fn schedule(&mut self, delay_ms: u32, event: E) -> TimerId;
    /// Cancelling a timer that already fired is a no-op.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Spinning,
    Revealing,
    /// Torn down, every further event is ignored
    Disposed,
}

/// What `advance` did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Guard rejected the event, state untouched
    Ignored,
    SpinStarted,
    ReelStopped(usize),
    ResultRevealed,
    BackToIdle,
    /// Non-phase change such as a new bet or auto-spin toggle
    Updated,
}

impl Transition {
    pub fn changed(&self) -> bool {
        *self != Transition::Ignored
    }
}

/// Pending timers a session created, so teardown can cancel them.
#[derive(Debug, Default, Clone)]
pub(crate) struct TimerSet {
    ids: Vec<TimerId>,
}

impl TimerSet {
    pub(crate) fn track(&mut self, id: TimerId) {
        self.ids.push(id);
    }

    pub(crate) fn cancel_all<E, S: Scheduler<E> + ?Sized>(&mut self, scheduler: &mut S) {
        for id in self.ids.drain(..) {
            scheduler.cancel(id);
        }
    }

    pub(crate) fn forget(&mut self) {
        self.ids.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }
}
