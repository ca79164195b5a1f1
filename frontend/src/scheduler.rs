use std::collections::HashMap;
use gloo_timers::callback::Timeout;
use shared::session::{Scheduler, TimerId};
use yew::Callback;

/// Browser-backed `Scheduler`. Each event is posted back to the owning component through
/// `deliver` together with its timer id; the component calls [`TimeoutScheduler::fired`]
/// before handing the event to its session.
pub struct TimeoutScheduler<E: 'static> {
    next_id: TimerId,
    pending: HashMap<TimerId, Timeout>,
    deliver: Callback<(TimerId, E)>,
}

impl<E: 'static> TimeoutScheduler<E> {
    pub fn new(deliver: Callback<(TimerId, E)>) -> Self {
        Self {
            next_id: 1,
            pending: HashMap::new(),
            deliver,
        }
    }

    /// Forgets a timer that has gone off. False when it was cancelled in the meantime,
    /// in which case the event should be dropped.
    pub fn fired(&mut self, id: TimerId) -> bool {
        self.pending.remove(&id).is_some()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Dropping a `Timeout` clears it.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }
}

impl<E: 'static> Scheduler<E> for TimeoutScheduler<E> {
    fn schedule(&mut self, delay_ms: u32, event: E) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;

        let deliver = self.deliver.clone();
        let timeout = Timeout::new(delay_ms, move || deliver.emit((id, event)));
        self.pending.insert(id, timeout);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.remove(&id);
    }
}

impl<E: 'static> Drop for TimeoutScheduler<E> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
