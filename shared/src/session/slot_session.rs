use rand::Rng;
use crate::blocks::SlotMachineConfig;
use crate::candidate::OutcomeCandidate;
use crate::payout::Payout;
use crate::reveal::RevealPlan;
use crate::rounds::{resolve_spin, SpinRequest, SpinResult};
use super::{Phase, Scheduler, TimerId, TimerSet, Transition, AUTO_SPIN_DELAY_MS, REVEAL_HOLD_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotEvent {
    /// User pressed spin
    SpinRequested,
    ReelStopped(usize),
    /// Last reel stopped and the tail buffer elapsed
    RoundSettled,
    RevealFinished,
    AutoSpinTick,
    /// Play this many rounds back to back
    StartAutoSpin(u32),
    StopAutoSpin,
    SetBet(u64),
}

/// Interactive state of one slot machine block
pub struct SlotSession<R> {
    config: SlotMachineConfig,
    rng: R,
    balance: u64,
    bet: u64,
    phase: Phase,
    current: Option<SpinResult>,
    stopped: Vec<bool>,
    last_payout: Option<Payout>,
    auto_spins_remaining: u32,
    auto_timer: Option<TimerId>,
    timers: TimerSet,
    rounds_played: u32,
}

impl<R: Rng> SlotSession<R> {
    pub fn new(config: SlotMachineConfig, rng: R) -> Self {
        let balance = config.starting_balance;
        let bet = config.default_bet;
        Self {
            config,
            rng,
            balance,
            bet,
            phase: Phase::Idle,
            current: None,
            stopped: Vec::new(),
            last_payout: None,
            auto_spins_remaining: 0,
            auto_timer: None,
            timers: TimerSet::default(),
            rounds_played: 0,
        }
    }

    pub fn config(&self) -> &SlotMachineConfig {
        &self.config
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == Phase::Spinning
    }

    pub fn can_spin(&self) -> bool {
        self.phase == Phase::Idle && self.balance >= self.bet && !self.config.symbols.is_empty()
    }

    pub fn current_round(&self) -> Option<&SpinResult> {
        self.current.as_ref()
    }

    pub fn last_payout(&self) -> Option<&Payout> {
        self.last_payout.as_ref()
    }

    pub fn auto_spins_remaining(&self) -> u32 {
        self.auto_spins_remaining
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// True while reel `reel` is still cycling faces
    pub fn reel_is_spinning(&self, reel: usize) -> bool {
        self.phase == Phase::Spinning && !self.stopped.get(reel).copied().unwrap_or(true)
    }

    /// Face a stopped reel shows: the landed outcome of the current round, or the first
    /// symbol before anything was played.
    pub fn reel_face(&self, reel: usize) -> Option<&OutcomeCandidate> {
        self.current
            .as_ref()
            .and_then(|round| round.final_outcomes.get(reel))
            .or_else(|| self.config.symbols.first())
    }

    pub fn advance<S: Scheduler<SlotEvent> + ?Sized>(&mut self, event: SlotEvent, scheduler: &mut S) -> Transition {
        if self.phase == Phase::Disposed {
            return Transition::Ignored;
        }

        match event {
            SlotEvent::SpinRequested => self.start_spin(scheduler),
            SlotEvent::ReelStopped(reel) => {
                if self.phase != Phase::Spinning || reel >= self.stopped.len() {
                    return Transition::Ignored;
                }
                self.stopped[reel] = true;
                Transition::ReelStopped(reel)
            }
            SlotEvent::RoundSettled => {
                if self.phase != Phase::Spinning {
                    return Transition::Ignored;
                }
                self.stopped.iter_mut().for_each(|s| *s = true);
                let payout = self
                    .current
                    .as_ref()
                    .map(|round| round.payout.clone())
                    .unwrap_or_else(Payout::none);
                self.balance = self.balance.saturating_add(payout.amount);
                if payout.is_win() {
                    log::info!("slot round paid {} ({:?}), balance {}", payout.amount, payout.kind, self.balance);
                }
                self.last_payout = Some(payout);
                self.phase = Phase::Revealing;
                let id = scheduler.schedule(REVEAL_HOLD_MS, SlotEvent::RevealFinished);
                self.timers.track(id);
                Transition::ResultRevealed
            }
            SlotEvent::RevealFinished => {
                if self.phase != Phase::Revealing {
                    return Transition::Ignored;
                }
                self.phase = Phase::Idle;
                self.timers.forget();
                self.queue_auto_spin(scheduler);
                Transition::BackToIdle
            }
            SlotEvent::AutoSpinTick => {
                self.auto_timer = None;
                if self.phase != Phase::Idle || self.auto_spins_remaining == 0 {
                    return Transition::Ignored;
                }
                if self.balance < self.bet {
                    log::debug!("auto-spin stopped, balance {} below bet {}", self.balance, self.bet);
                    self.auto_spins_remaining = 0;
                    return Transition::Updated;
                }
                self.auto_spins_remaining -= 1;
                self.start_spin(scheduler)
            }
            SlotEvent::StartAutoSpin(rounds) => {
                if rounds == 0 {
                    return Transition::Ignored;
                }
                self.auto_spins_remaining = rounds;
                if self.phase != Phase::Idle {
                    // Picked up when the current round returns to idle
                    return Transition::Updated;
                }
                self.auto_spins_remaining -= 1;
                match self.start_spin(scheduler) {
                    Transition::Ignored => {
                        self.auto_spins_remaining = 0;
                        Transition::Ignored
                    }
                    started => started,
                }
            }
            SlotEvent::StopAutoSpin => {
                if self.auto_spins_remaining == 0 && self.auto_timer.is_none() {
                    return Transition::Ignored;
                }
                self.auto_spins_remaining = 0;
                if let Some(id) = self.auto_timer.take() {
                    scheduler.cancel(id);
                }
                Transition::Updated
            }
            SlotEvent::SetBet(bet) => {
                if self.phase != Phase::Idle || !self.config.allows_bet(bet) {
                    return Transition::Ignored;
                }
                self.bet = bet;
                Transition::Updated
            }
        }
    }

    /// Cancels every pending timer. Events that still arrive afterwards are ignored.
    pub fn dispose<S: Scheduler<SlotEvent> + ?Sized>(&mut self, scheduler: &mut S) {
        self.timers.cancel_all(scheduler);
        if let Some(id) = self.auto_timer.take() {
            scheduler.cancel(id);
        }
        self.auto_spins_remaining = 0;
        self.phase = Phase::Disposed;
    }

    fn start_spin<S: Scheduler<SlotEvent> + ?Sized>(&mut self, scheduler: &mut S) -> Transition {
        // Busy or under-funded spins are silently dropped
        if !self.can_spin() {
            return Transition::Ignored;
        }

        self.balance -= self.bet;
        let request = SpinRequest::for_slot(&self.config, self.bet);
        let round = resolve_spin(&self.config.symbols, &request, &mut self.rng);

        if let RevealPlan::Reels(schedule) = &round.plan {
            for timing in &schedule.reels {
                let id = scheduler.schedule(timing.stop_at_ms, SlotEvent::ReelStopped(timing.reel));
                self.timers.track(id);
            }
            let id = scheduler.schedule(schedule.settle_at_ms, SlotEvent::RoundSettled);
            self.timers.track(id);
        }

        self.stopped = vec![false; self.config.reel_count];
        self.current = Some(round);
        self.last_payout = None;
        self.phase = Phase::Spinning;
        self.rounds_played += 1;
        Transition::SpinStarted
    }

    fn queue_auto_spin<S: Scheduler<SlotEvent> + ?Sized>(&mut self, scheduler: &mut S) {
        if self.auto_spins_remaining == 0 {
            return;
        }
        if self.balance < self.bet {
            log::debug!("auto-spin ended with {} rounds left, out of credits", self.auto_spins_remaining);
            self.auto_spins_remaining = 0;
            return;
        }
        let id = scheduler.schedule(AUTO_SPIN_DELAY_MS, SlotEvent::AutoSpinTick);
        self.auto_timer = Some(id);
        self.timers.track(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::PayoutValue;
    use crate::session::ManualScheduler;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(config: SlotMachineConfig) -> SlotSession<StdRng> {
        SlotSession::new(config, StdRng::seed_from_u64(21))
    }

    fn worthless_config(balance: u64) -> SlotMachineConfig {
        let symbols = ["a", "b", "c"]
            .iter()
            .map(|id| OutcomeCandidate::new(id, id, PayoutValue::Credits(0.0), 1.0))
            .collect();
        SlotMachineConfig {
            symbols,
            starting_balance: balance,
            win_chance: 0.0,
            ..SlotMachineConfig::default()
        }
    }

    #[test]
    fn test_round_walks_through_every_phase() {
        let mut slot = session(SlotMachineConfig::default());
        let mut clock = ManualScheduler::new();

        assert_eq!(slot.advance(SlotEvent::SpinRequested, &mut clock), Transition::SpinStarted);
        assert_eq!(slot.balance(), 990);
        assert!(slot.reel_is_spinning(0));

        let mut seen = Vec::new();
        clock.run_for(2000, |event, clock| seen.push(slot.advance(event, clock)));
        assert_eq!(seen, vec![Transition::ReelStopped(0)]);
        assert!(!slot.reel_is_spinning(0));
        assert!(slot.reel_is_spinning(1));

        clock.run_for(800, |event, clock| seen.push(slot.advance(event, clock)));
        assert_eq!(slot.phase(), Phase::Revealing);
        let payout = slot.last_payout().cloned().unwrap();
        assert_eq!(slot.balance(), 990 + payout.amount);

        clock.run_for(REVEAL_HOLD_MS as u64, |event, clock| {
            slot.advance(event, clock);
        });
        assert_eq!(slot.phase(), Phase::Idle);
        assert_eq!(clock.pending_count(), 0);
    }

    #[test]
    fn test_second_spin_while_spinning_is_ignored() {
        let mut slot = session(SlotMachineConfig::default());
        let mut clock = ManualScheduler::new();
        slot.advance(SlotEvent::SpinRequested, &mut clock);
        let round = slot.current_round().cloned();
        let pending = clock.pending_count();

        assert_eq!(slot.advance(SlotEvent::SpinRequested, &mut clock), Transition::Ignored);
        assert_eq!(slot.balance(), 990);
        assert_eq!(slot.current_round().cloned(), round);
        assert_eq!(clock.pending_count(), pending);
        assert_eq!(slot.rounds_played(), 1);
    }

    #[test]
    fn test_underfunded_spin_is_ignored() {
        let mut slot = session(worthless_config(5));
        let mut clock = ManualScheduler::new();
        assert_eq!(slot.advance(SlotEvent::SpinRequested, &mut clock), Transition::Ignored);
        assert_eq!(slot.balance(), 5);
        assert_eq!(clock.pending_count(), 0);
    }

    #[test]
    fn test_auto_spin_stops_when_credits_run_out() {
        let mut slot = session(worthless_config(30));
        let mut clock = ManualScheduler::new();
        slot.advance(SlotEvent::StartAutoSpin(10), &mut clock);
        clock.run_for(60_000, |event, clock| {
            slot.advance(event, clock);
        });
        assert_eq!(slot.rounds_played(), 3);
        assert_eq!(slot.balance(), 0);
        assert_eq!(slot.auto_spins_remaining(), 0);
        assert_eq!(clock.pending_count(), 0);
    }

    #[test]
    fn test_auto_spin_stops_when_counter_hits_zero() {
        let mut slot = session(worthless_config(1000));
        let mut clock = ManualScheduler::new();
        slot.advance(SlotEvent::StartAutoSpin(4), &mut clock);
        clock.run_for(120_000, |event, clock| {
            slot.advance(event, clock);
        });
        assert_eq!(slot.rounds_played(), 4);
        assert_eq!(slot.balance(), 960);
        assert_eq!(clock.pending_count(), 0);
    }

    #[test]
    fn test_user_can_cancel_auto_spin() {
        let mut slot = session(worthless_config(1000));
        let mut clock = ManualScheduler::new();
        slot.advance(SlotEvent::StartAutoSpin(10), &mut clock);
        // First round plus reveal hold, leaving the next tick queued
        clock.run_for(2800 + REVEAL_HOLD_MS as u64, |event, clock| {
            slot.advance(event, clock);
        });
        assert_eq!(slot.phase(), Phase::Idle);
        assert_eq!(slot.advance(SlotEvent::StopAutoSpin, &mut clock), Transition::Updated);
        clock.run_for(60_000, |event, clock| {
            slot.advance(event, clock);
        });
        assert_eq!(slot.rounds_played(), 1);
        assert_eq!(clock.pending_count(), 0);
    }

    #[test]
    fn test_dispose_cancels_pending_reveal() {
        let mut slot = session(SlotMachineConfig::default());
        let mut clock = ManualScheduler::new();
        slot.advance(SlotEvent::SpinRequested, &mut clock);
        clock.run_for(100, |event, clock| {
            slot.advance(event, clock);
        });
        slot.dispose(&mut clock);
        assert_eq!(clock.pending_count(), 0);
        assert_eq!(slot.phase(), Phase::Disposed);
        assert_eq!(slot.advance(SlotEvent::RoundSettled, &mut clock), Transition::Ignored);
        assert_eq!(slot.balance(), 990);
    }

    #[test]
    fn test_bet_changes_only_while_idle() {
        let mut slot = session(SlotMachineConfig::default());
        let mut clock = ManualScheduler::new();
        assert_eq!(slot.advance(SlotEvent::SetBet(25), &mut clock), Transition::Updated);
        assert_eq!(slot.advance(SlotEvent::SetBet(7), &mut clock), Transition::Ignored);
        slot.advance(SlotEvent::SpinRequested, &mut clock);
        assert_eq!(slot.balance(), 975);
        assert_eq!(slot.advance(SlotEvent::SetBet(1), &mut clock), Transition::Ignored);
        assert_eq!(slot.bet(), 25);
    }

    #[test]
    fn test_forced_win_chance_pays_jackpot() {
        let config = SlotMachineConfig { win_chance: 100.0, ..SlotMachineConfig::default() };
        let mut slot = session(config);
        let mut clock = ManualScheduler::new();
        slot.advance(SlotEvent::SpinRequested, &mut clock);
        clock.run_for(5000, |event, clock| {
            slot.advance(event, clock);
        });
        let payout = slot.last_payout().unwrap();
        assert_eq!(payout.kind, crate::payout::WinKind::Jackpot);
        let face = slot.reel_face(0).unwrap().clone();
        assert_eq!(payout.amount, (face.payout.credits() * 10.0) as u64);
    }
}
