use super::{Scheduler, TimerId};

struct Pending<E> {
    id: TimerId,
    due_ms: u64,
    event: E,
}

/// Virtual-time scheduler. Nothing fires until the owner steps the clock.
pub struct ManualScheduler<E> {
    now_ms: u64,
    next_id: TimerId,
    pending: Vec<Pending<E>>,
}

impl<E> Default for ManualScheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ManualScheduler<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            pending: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Due time of the earliest pending event
    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due_ms).min()
    }

    /// Removes the earliest event due at or before `until_ms` and moves the clock to it.
    /// Events due at the same time come out in the order they were scheduled.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<E> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.id))
            .map(|(i, _)| i)?;
        let pending = self.pending.remove(position);
        self.now_ms = self.now_ms.max(pending.due_ms);
        Some(pending.event)
    }

    /// Steps the clock forward by `ms`, handing each due event to `deliver` together with
    /// the scheduler so the receiver can schedule follow-ups inside the same window.
    pub fn run_for<F>(&mut self, ms: u64, mut deliver: F)
    where
        F: FnMut(E, &mut Self),
    {
        let until = self.now_ms + ms;
        while let Some(event) = self.pop_due(until) {
            deliver(event, self);
        }
        self.now_ms = until;
    }
}

impl<E> Scheduler<E> for ManualScheduler<E> {
    fn schedule(&mut self, delay_ms: u32, event: E) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due_ms: self.now_ms + delay_ms as u64,
            event,
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|p| p.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_fire_in_due_order() {
        let mut clock = ManualScheduler::new();
        clock.schedule(300, "late");
        clock.schedule(100, "early");
        clock.schedule(100, "early-second");
        let mut fired = Vec::new();
        clock.run_for(1000, |event, _| fired.push(event));
        assert_eq!(fired, vec!["early", "early-second", "late"]);
        assert_eq!(clock.now_ms(), 1000);
    }

    #[test]
    fn test_cancelled_and_future_events_do_not_fire() {
        let mut clock = ManualScheduler::new();
        let cancelled = clock.schedule(10, 1);
        clock.schedule(500, 2);
        clock.cancel(cancelled);
        let mut fired = Vec::new();
        clock.run_for(100, |event, _| fired.push(event));
        assert!(fired.is_empty());
        assert_eq!(clock.pending_count(), 1);
        assert_eq!(clock.next_due_ms(), Some(500));
    }

    #[test]
    fn test_follow_ups_inside_the_window_fire() {
        let mut clock = ManualScheduler::new();
        clock.schedule(10, 0u32);
        let mut fired = Vec::new();
        clock.run_for(100, |event, clock| {
            fired.push((event, clock.now_ms()));
            if event < 3 {
                clock.schedule(20, event + 1);
            }
        });
        assert_eq!(fired, vec![(0, 10), (1, 30), (2, 50), (3, 70)]);
    }
}
