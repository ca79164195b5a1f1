use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::blocks::{SlotMachineConfig, WheelConfig};
use crate::candidate::OutcomeCandidate;
use crate::payout::{evaluate, Payout, WinKind};
use crate::probability::{draw_reels, resolve_index, OutcomeMode};
use crate::reveal::{plan_reels, plan_wheel, RevealPlan};

/// Built from block configuration the moment a spin is triggered.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum SpinRequest {
    Reels {
        reel_count: usize,
        spin_duration_ms: u32,
        stagger_ms: u32,
        win_chance: f64,
        bet: u64,
    },
    Wheel {
        winning_index: usize,
        full_spins: u32,
        spin_duration_ms: u32,
        current_rotation: f64,
    },
}

impl SpinRequest {
    pub fn for_slot(config: &SlotMachineConfig, bet: u64) -> Self {
        SpinRequest::Reels {
            reel_count: config.reel_count,
            spin_duration_ms: config.spin_duration_ms,
            stagger_ms: config.stagger_ms,
            win_chance: config.win_chance,
            bet,
        }
    }

    pub fn for_wheel(config: &WheelConfig, current_rotation: f64) -> Self {
        SpinRequest::Wheel {
            winning_index: config.winning_index,
            full_spins: config.full_spins,
            spin_duration_ms: config.spin_duration_ms,
            current_rotation,
        }
    }

    pub fn mode(&self) -> OutcomeMode {
        match self {
            SpinRequest::Reels { .. } => OutcomeMode::RandomWeighted,
            SpinRequest::Wheel { winning_index, .. } => OutcomeMode::ForcedIndex(*winning_index),
        }
    }
}

/// Outcome of a round, computed immediately and revealed once `plan` has played out.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResult {
    /// Candidate index landing on each reel, or the single winning segment
    pub indices: Vec<usize>,
    pub final_outcomes: Vec<OutcomeCandidate>,
    pub payout: Payout,
    pub plan: RevealPlan,
}

impl SpinResult {
    pub fn duration_ms(&self) -> u32 {
        self.plan.total_duration_ms()
    }
}

/// Runs the probability engine and the reveal planner for one round.
///
/// `candidates` should be non-empty; an empty list yields an empty, non-paying result.
pub fn resolve_spin<R: Rng + ?Sized>(candidates: &[OutcomeCandidate], request: &SpinRequest, rng: &mut R) -> SpinResult {
    match request {
        SpinRequest::Reels { reel_count, spin_duration_ms, stagger_ms, win_chance, bet } => {
            let plan = RevealPlan::Reels(plan_reels(*reel_count, *spin_duration_ms, *stagger_ms));
            if candidates.is_empty() {
                return SpinResult { indices: Vec::new(), final_outcomes: Vec::new(), payout: Payout::none(), plan };
            }
            let indices = draw_reels(candidates, *reel_count, *win_chance, rng);
            let final_outcomes: Vec<OutcomeCandidate> = indices.iter().map(|i| candidates[*i].clone()).collect();
            let payout = evaluate(&final_outcomes, *bet);
            SpinResult { indices, final_outcomes, payout, plan }
        }
        SpinRequest::Wheel { full_spins, spin_duration_ms, current_rotation, .. } => {
            let index = resolve_index(candidates, request.mode(), rng);
            let plan = RevealPlan::Wheel(plan_wheel(
                candidates.len(),
                index,
                *full_spins,
                *current_rotation,
                *spin_duration_ms,
            ));
            match candidates.get(index) {
                Some(segment) => SpinResult {
                    indices: vec![index],
                    final_outcomes: vec![segment.clone()],
                    payout: Payout {
                        kind: WinKind::Prize,
                        amount: segment.payout.credits().max(0.0).floor() as u64,
                        paying_reel: Some(0),
                    },
                    plan,
                },
                None => SpinResult { indices: Vec::new(), final_outcomes: Vec::new(), payout: Payout::none(), plan },
            }
        }
    }
}
