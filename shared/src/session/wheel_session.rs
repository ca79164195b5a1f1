use crate::blocks::WheelConfig;
use crate::candidate::OutcomeCandidate;
use crate::reveal::{plan_wheel, WheelPlan};
use super::{Phase, Scheduler, TimerSet, Transition, REVEAL_HOLD_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelEvent {
    SpinRequested,
    SpinSettled,
    RevealFinished,
}

/// Interactive state of one wheel of fortune block
pub struct WheelSession {
    config: WheelConfig,
    /// Resting rotation in degrees, only ever grows
    rotation: f64,
    phase: Phase,
    plan: Option<WheelPlan>,
    result: Option<OutcomeCandidate>,
    spins_used: u32,
    timers: TimerSet,
}

impl WheelSession {
    pub fn new(mut config: WheelConfig) -> Self {
        config.revalidate();
        Self {
            config,
            rotation: 0.0,
            phase: Phase::Idle,
            plan: None,
            result: None,
            spins_used: 0,
            timers: TimerSet::default(),
        }
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Rotation the renderer should be animating towards right now
    pub fn display_rotation(&self) -> f64 {
        match (&self.plan, self.phase) {
            (Some(plan), Phase::Spinning) => plan.final_rotation,
            _ => self.rotation,
        }
    }

    pub fn plan(&self) -> Option<&WheelPlan> {
        self.plan.as_ref()
    }

    pub fn result(&self) -> Option<&OutcomeCandidate> {
        self.result.as_ref()
    }

    pub fn spins_used(&self) -> u32 {
        self.spins_used
    }

    pub fn spins_left(&self) -> Option<u32> {
        if self.config.spins_allowed == 0 {
            None
        } else {
            Some(self.config.spins_allowed.saturating_sub(self.spins_used))
        }
    }

    pub fn can_spin(&self) -> bool {
        self.phase == Phase::Idle && self.spins_left() != Some(0)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn advance<S: Scheduler<WheelEvent> + ?Sized>(&mut self, event: WheelEvent, scheduler: &mut S) -> Transition {
        if self.phase == Phase::Disposed {
            return Transition::Ignored;
        }

        match event {
            WheelEvent::SpinRequested => {
                if !self.can_spin() {
                    return Transition::Ignored;
                }
                let plan = plan_wheel(
                    self.config.segments.len(),
                    self.config.winning_index,
                    self.config.full_spins,
                    self.rotation,
                    self.config.spin_duration_ms,
                );
                let id = scheduler.schedule(plan.duration_ms, WheelEvent::SpinSettled);
                self.timers.track(id);
                self.plan = Some(plan);
                self.result = None;
                self.spins_used += 1;
                self.phase = Phase::Spinning;
                Transition::SpinStarted
            }
            WheelEvent::SpinSettled => {
                if self.phase != Phase::Spinning {
                    return Transition::Ignored;
                }
                if let Some(plan) = &self.plan {
                    self.rotation = plan.final_rotation;
                }
                self.result = self.config.winning_segment().cloned();
                if let Some(segment) = &self.result {
                    log::info!("wheel landed on {} ({})", segment.id, segment.label);
                }
                self.phase = Phase::Revealing;
                let id = scheduler.schedule(REVEAL_HOLD_MS, WheelEvent::RevealFinished);
                self.timers.track(id);
                Transition::ResultRevealed
            }
            WheelEvent::RevealFinished => {
                if self.phase != Phase::Revealing {
                    return Transition::Ignored;
                }
                self.phase = Phase::Idle;
                self.timers.forget();
                Transition::BackToIdle
            }
        }
    }

    pub fn dispose<S: Scheduler<WheelEvent> + ?Sized>(&mut self, scheduler: &mut S) {
        self.timers.cancel_all(scheduler);
        self.phase = Phase::Disposed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{segment_under_pointer, target_angle_within_circle};
    use crate::session::ManualScheduler;

    fn unlimited() -> WheelConfig {
        WheelConfig { spins_allowed: 0, ..WheelConfig::default() }
    }

    fn spin_to_rest(wheel: &mut WheelSession, clock: &mut ManualScheduler<WheelEvent>) {
        wheel.advance(WheelEvent::SpinRequested, clock);
        clock.run_for(20_000, |event, clock| {
            wheel.advance(event, clock);
        });
    }

    #[test]
    fn test_wheel_lands_on_designated_segment() {
        let mut config = unlimited();
        config.set_winning_index(5).unwrap();
        let mut wheel = WheelSession::new(config);
        let mut clock = ManualScheduler::new();

        wheel.advance(WheelEvent::SpinRequested, &mut clock);
        assert_eq!(wheel.display_rotation(), 5.0 * 360.0 + 67.5);
        clock.run_for(4000, |event, clock| {
            wheel.advance(event, clock);
        });
        assert_eq!(wheel.phase(), Phase::Revealing);
        assert_eq!(wheel.result().unwrap().id, "segment-6");
        assert_eq!(wheel.rotation() % 360.0, 67.5);
    }

    #[test]
    fn test_repeat_spins_still_land_under_pointer() {
        let mut config = unlimited();
        config.set_winning_index(3).unwrap();
        let mut wheel = WheelSession::new(config);
        let mut clock = ManualScheduler::new();

        spin_to_rest(&mut wheel, &mut clock);
        let first = wheel.rotation();
        spin_to_rest(&mut wheel, &mut clock);
        let second = wheel.rotation();

        assert!(second > first);
        assert_eq!(second % 360.0, target_angle_within_circle(8, 3));
        assert_eq!(segment_under_pointer(second, 8), 3);
    }

    #[test]
    fn test_spin_while_spinning_is_ignored() {
        let mut wheel = WheelSession::new(unlimited());
        let mut clock = ManualScheduler::new();
        wheel.advance(WheelEvent::SpinRequested, &mut clock);
        let target = wheel.display_rotation();
        assert_eq!(wheel.advance(WheelEvent::SpinRequested, &mut clock), Transition::Ignored);
        assert_eq!(wheel.display_rotation(), target);
        assert_eq!(wheel.spins_used(), 1);
        assert_eq!(clock.pending_count(), 1);
    }

    #[test]
    fn test_spin_allowance_is_enforced() {
        let mut wheel = WheelSession::new(WheelConfig::default());
        let mut clock = ManualScheduler::new();
        spin_to_rest(&mut wheel, &mut clock);
        assert_eq!(wheel.spins_left(), Some(0));
        assert_eq!(wheel.advance(WheelEvent::SpinRequested, &mut clock), Transition::Ignored);
    }

    #[test]
    fn test_dispose_mid_spin() {
        let mut wheel = WheelSession::new(unlimited());
        let mut clock = ManualScheduler::new();
        wheel.advance(WheelEvent::SpinRequested, &mut clock);
        wheel.dispose(&mut clock);
        assert_eq!(clock.pending_count(), 0);
        assert_eq!(wheel.advance(WheelEvent::SpinSettled, &mut clock), Transition::Ignored);
        assert_eq!(wheel.rotation(), 0.0);
    }
}
