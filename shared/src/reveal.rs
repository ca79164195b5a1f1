//! Reveal planning for slot reels and the prize wheel.
//!
//! Everything here is a pure function of configuration and an already chosen outcome.
//! Plans carry offsets in milliseconds; running timers is left to the renderer. The
//! `*_js` builders emit the script-side twin of each formula with the numbers baked in
//! by this module, so the static export and the interactive renderer share one source.

use serde::{Deserialize, Serialize};

/// Gap between consecutive reel stops
pub const DEFAULT_REEL_STAGGER_MS: u32 = 300;
/// Pause after the last reel stops before the result is evaluated
pub const RESULT_TAIL_MS: u32 = 200;
/// Face cycling interval of the first reel while spinning
pub const FACE_CYCLE_BASE_MS: u32 = 50;
/// Extra cycling interval per reel so reels visibly desynchronize
pub const FACE_CYCLE_STEP_MS: u32 = 20;
/// Full rotations the wheel makes before landing
pub const DEFAULT_FULL_SPINS: u32 = 5;

/// CSS timing function matching [`ease_out`] (easeOutQuart)
pub const EASE_OUT_CSS: &str = "cubic-bezier(0.25, 1, 0.5, 1)";

/// Timing of a single reel within a spin.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ReelTiming {
    pub reel: usize,
    pub cycle_interval_ms: u32,
    pub stop_at_ms: u32,
}

/// Stop schedule for every reel plus the moment the round is evaluated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReelSchedule {
    pub reels: Vec<ReelTiming>,
    pub settle_at_ms: u32,
}

impl ReelSchedule {
    pub fn total_duration_ms(&self) -> u32 {
        self.settle_at_ms
    }
}

pub fn reel_stop_at_ms(reel: usize, base_spin_ms: u32, stagger_ms: u32) -> u32 {
    base_spin_ms.saturating_add((reel as u32).saturating_mul(stagger_ms))
}

pub fn face_cycle_interval_ms(reel: usize) -> u32 {
    FACE_CYCLE_BASE_MS + reel as u32 * FACE_CYCLE_STEP_MS
}

pub fn plan_reels(reel_count: usize, base_spin_ms: u32, stagger_ms: u32) -> ReelSchedule {
    let reels: Vec<ReelTiming> = (0..reel_count)
        .map(|reel| ReelTiming {
            reel,
            cycle_interval_ms: face_cycle_interval_ms(reel),
            stop_at_ms: reel_stop_at_ms(reel, base_spin_ms, stagger_ms),
        })
        .collect();

    let last_stop = reels.last().map(|r| r.stop_at_ms).unwrap_or(base_spin_ms);
    ReelSchedule {
        reels,
        settle_at_ms: last_stop.saturating_add(RESULT_TAIL_MS),
    }
}

/// Everything a renderer needs to animate the wheel onto its winning segment.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct WheelPlan {
    pub segment_count: usize,
    pub winning_index: usize,
    pub full_spins: u32,
    pub segment_angle: f64,
    pub target_angle: f64,
    pub start_rotation: f64,
    pub final_rotation: f64,
    pub duration_ms: u32,
}

/// Width of one segment in degrees. A wheel with no segments is drawn as one segment.
pub fn segment_angle(segment_count: usize) -> f64 {
    360.0 / segment_count.max(1) as f64
}

/// Resting angle (mod 360) that leaves the center of `winning_index` under the pointer at 0°.
pub fn target_angle_within_circle(segment_count: usize, winning_index: usize) -> f64 {
    let angle = segment_angle(segment_count);
    360.0 - (winning_index as f64 * angle + angle / 2.0)
}

/// Absolute clockwise rotation to animate to, starting from `current_rotation`.
///
/// `current_rotation % 360` is subtracted so repeated spins land correctly from any
/// previous resting angle. The wheel only ever turns forward, so `current_rotation`
/// is never negative and `%` matches the script's remainder operator.
pub fn final_rotation(current_rotation: f64, full_spins: u32, segment_count: usize, winning_index: usize) -> f64 {
    current_rotation + full_spins as f64 * 360.0 + target_angle_within_circle(segment_count, winning_index)
        - (current_rotation % 360.0)
}

pub fn plan_wheel(
    segment_count: usize,
    winning_index: usize,
    full_spins: u32,
    current_rotation: f64,
    duration_ms: u32,
) -> WheelPlan {
    WheelPlan {
        segment_count,
        winning_index,
        full_spins,
        segment_angle: segment_angle(segment_count),
        target_angle: target_angle_within_circle(segment_count, winning_index),
        start_rotation: current_rotation,
        final_rotation: final_rotation(current_rotation, full_spins, segment_count, winning_index),
        duration_ms,
    }
}

/// Segment sitting under the pointer when the wheel rests at `rotation`.
pub fn segment_under_pointer(rotation: f64, segment_count: usize) -> usize {
    let angle = segment_angle(segment_count);
    let wheel_angle = (360.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0);
    ((wheel_angle / angle).floor() as usize).min(segment_count.max(1) - 1)
}

/// Modified ease-out: 1 - (1-t)^4
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Rotation shown `elapsed_ms` into the plan.
pub fn rotation_at(plan: &WheelPlan, elapsed_ms: u32) -> f64 {
    if plan.duration_ms == 0 {
        return plan.final_rotation;
    }
    let progress = elapsed_ms as f64 / plan.duration_ms as f64;
    plan.start_rotation + (plan.final_rotation - plan.start_rotation) * ease_out(progress)
}

/// Plan handed to whichever renderer replays a round.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevealPlan {
    Reels(ReelSchedule),
    Wheel(WheelPlan),
}

impl RevealPlan {
    pub fn total_duration_ms(&self) -> u32 {
        match self {
            RevealPlan::Reels(schedule) => schedule.total_duration_ms(),
            RevealPlan::Wheel(plan) => plan.duration_ms,
        }
    }
}

/// Script twin of [`plan_reels`] with the configured timings filled in.
pub fn reel_timing_js(base_spin_ms: u32, stagger_ms: u32) -> String {
    format!(
        "var REEL_SPIN_MS = {base};\n\
         var REEL_STAGGER_MS = {stagger};\n\
         var RESULT_TAIL_MS = {tail};\n\
         var FACE_CYCLE_BASE_MS = {cycle_base};\n\
         var FACE_CYCLE_STEP_MS = {cycle_step};\n\
         function reelStopAt(i) {{ return REEL_SPIN_MS + i * REEL_STAGGER_MS; }}\n\
         function faceCycleMs(i) {{ return FACE_CYCLE_BASE_MS + i * FACE_CYCLE_STEP_MS; }}\n\
         function settleAt(reelCount) {{ return reelStopAt(Math.max(reelCount, 1) - 1) + RESULT_TAIL_MS; }}",
        base = base_spin_ms,
        stagger = stagger_ms,
        tail = RESULT_TAIL_MS,
        cycle_base = FACE_CYCLE_BASE_MS,
        cycle_step = FACE_CYCLE_STEP_MS,
    )
}

/// Script twin of [`final_rotation`]. Segment and target angles are computed here and
/// printed with `f64`'s shortest round-trip formatting, which the browser parses back to
/// the same double.
pub fn wheel_rotation_js(segment_count: usize, winning_index: usize, full_spins: u32) -> String {
    format!(
        "var SEGMENT_ANGLE = {angle};\n\
         var TARGET_ANGLE = {target};\n\
         var FULL_SPINS = {spins};\n\
         function finalRotation(current) {{ return current + FULL_SPINS * 360 + TARGET_ANGLE - (current % 360); }}",
        angle = segment_angle(segment_count),
        target = target_angle_within_circle(segment_count, winning_index),
        spins = full_spins,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_lands_segment_five_of_eight() {
        let rotation = final_rotation(0.0, 5, 8, 5);
        assert_eq!(rotation % 360.0, 67.5);
        assert_eq!(rotation, 5.0 * 360.0 + 67.5);
        assert_eq!(segment_under_pointer(rotation, 8), 5);
    }

    #[test]
    fn test_repeat_spins_compose_from_any_rest() {
        let first = final_rotation(0.0, 5, 8, 5);
        let second = final_rotation(first, 5, 8, 2);
        assert_eq!(segment_under_pointer(second, 8), 2);
        assert_eq!(second % 360.0, target_angle_within_circle(8, 2));

        // Odd resting angle that no spin produced
        let third = final_rotation(1234.25, 6, 8, 7);
        assert_eq!(segment_under_pointer(third, 8), 7);
        assert!(third > 1234.25 + 6.0 * 360.0 - 360.0);
    }

    #[test]
    fn test_every_segment_is_reachable_for_odd_counts() {
        for count in [3usize, 5, 7, 12] {
            let mut rest = 0.0;
            for winner in 0..count {
                rest = final_rotation(rest, 4, count, winner);
                assert_eq!(segment_under_pointer(rest, count), winner, "count {} winner {}", count, winner);
            }
        }
    }

    #[test]
    fn test_zero_segments_degrade_to_one() {
        assert_eq!(segment_angle(0), 360.0);
        assert_eq!(target_angle_within_circle(0, 0), 180.0);
        assert_eq!(segment_under_pointer(final_rotation(0.0, 5, 0, 0), 0), 0);
    }

    #[test]
    fn test_reel_schedule_staggers_stops_and_cycles() {
        let schedule = plan_reels(3, 2000, DEFAULT_REEL_STAGGER_MS);
        let stops: Vec<u32> = schedule.reels.iter().map(|r| r.stop_at_ms).collect();
        let cycles: Vec<u32> = schedule.reels.iter().map(|r| r.cycle_interval_ms).collect();
        assert_eq!(stops, vec![2000, 2300, 2600]);
        assert_eq!(cycles, vec![50, 70, 90]);
        assert_eq!(schedule.settle_at_ms, 2800);
    }

    #[test]
    fn test_rotation_at_eases_to_final() {
        let plan = plan_wheel(8, 5, 5, 0.0, 4000);
        assert_eq!(rotation_at(&plan, 0), 0.0);
        assert_eq!(rotation_at(&plan, 4000), plan.final_rotation);
        assert!(rotation_at(&plan, 1000) > plan.final_rotation / 4.0);
    }

    #[test]
    fn test_scripts_carry_the_rust_numbers() {
        let js = wheel_rotation_js(8, 5, 5);
        assert!(js.contains("var SEGMENT_ANGLE = 45;"));
        assert!(js.contains("var TARGET_ANGLE = 67.5;"));
        assert!(js.contains("var FULL_SPINS = 5;"));
        assert!(js.contains("current + FULL_SPINS * 360 + TARGET_ANGLE - (current % 360)"));

        let js = reel_timing_js(1800, 300);
        assert!(js.contains("var REEL_SPIN_MS = 1800;"));
        assert!(js.contains("var REEL_STAGGER_MS = 300;"));
        assert!(js.contains("var RESULT_TAIL_MS = 200;"));
        assert!(js.contains("FACE_CYCLE_BASE_MS + i * FACE_CYCLE_STEP_MS"));
    }
}
