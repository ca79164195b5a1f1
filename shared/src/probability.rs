use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::candidate::OutcomeCandidate;

/// How the outcome of a round is decided.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "mode", content = "index", rename_all = "kebab-case")]
pub enum OutcomeMode {
    RandomWeighted,
    ForcedIndex(usize),
}

/// Picks an index into `candidates` with probability proportional to its weight.
///
/// Precondition: `candidates` is not empty. Config validation keeps that true, so an
/// empty slice here is a caller bug and returns index 0.
///
/// Zero-weight candidates are skipped while any positive weight exists. When every weight
/// is zero the pick is uniform. If floating point leaves the draw unconsumed after the last
/// candidate, the first candidate is returned.
pub fn choose_weighted_index<R: Rng + ?Sized>(candidates: &[OutcomeCandidate], rng: &mut R) -> usize {
    if candidates.len() <= 1 {
        return 0;
    }

    let total_weight: f64 = candidates.iter().map(|c| usable_weight(c.weight)).sum();
    if total_weight <= 0.0 {
        return rng.gen_range(0..candidates.len());
    }

    let draw = rng.gen::<f64>() * total_weight;
    pick_for_draw(candidates, draw)
}

/// Walks the candidates subtracting weights from `draw` until it reaches zero.
/// Split out so the fallback can be exercised with a draw past the total.
pub fn pick_for_draw(candidates: &[OutcomeCandidate], draw: f64) -> usize {
    let mut remaining = draw;
    for (index, candidate) in candidates.iter().enumerate() {
        let weight = usable_weight(candidate.weight);
        if weight <= 0.0 {
            continue;
        }
        remaining -= weight;
        if remaining <= 0.0 {
            return index;
        }
    }
    0
}

pub fn choose_weighted<'a, R: Rng + ?Sized>(candidates: &'a [OutcomeCandidate], rng: &mut R) -> &'a OutcomeCandidate {
    &candidates[choose_weighted_index(candidates, rng)]
}

/// Rolls the coarse win gate: `win_chance` is a percentage between 0 and 100.
pub fn roll_win_chance<R: Rng + ?Sized>(win_chance: f64, rng: &mut R) -> bool {
    if win_chance <= 0.0 {
        return false;
    }
    if win_chance >= 100.0 {
        return true;
    }
    rng.gen::<f64>() * 100.0 < win_chance
}

/// Indices landing on each reel for one slot round.
///
/// The win gate is rolled first. On success every reel shows the same weighted pick,
/// otherwise each reel draws on its own and may still match by chance.
pub fn draw_reels<R: Rng + ?Sized>(
    symbols: &[OutcomeCandidate],
    reel_count: usize,
    win_chance: f64,
    rng: &mut R,
) -> Vec<usize> {
    if roll_win_chance(win_chance, rng) {
        let index = choose_weighted_index(symbols, rng);
        log::debug!("win gate passed, forcing symbol {} on {} reels", index, reel_count);
        vec![index; reel_count]
    } else {
        (0..reel_count)
            .map(|_| choose_weighted_index(symbols, rng))
            .collect()
    }
}

/// Resolves an [`OutcomeMode`] to a single index, clamping forced indices into range.
pub fn resolve_index<R: Rng + ?Sized>(candidates: &[OutcomeCandidate], mode: OutcomeMode, rng: &mut R) -> usize {
    match mode {
        OutcomeMode::RandomWeighted => choose_weighted_index(candidates, rng),
        OutcomeMode::ForcedIndex(index) => crate::candidate::clamp_index(index, candidates.len()),
    }
}

fn usable_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

/// Script-side twin of [`choose_weighted_index`] and [`roll_win_chance`], embedded by the
/// static slot export. Expects `symbols` to be an array of `{ weight: number }`.
pub const WEIGHTED_PICK_JS: &str = r#"function pickWeighted(symbols) {
  if (symbols.length <= 1) { return 0; }
  var total = 0;
  for (var i = 0; i < symbols.length; i++) { if (symbols[i].weight > 0) { total += symbols[i].weight; } }
  if (total <= 0) { return Math.floor(Math.random() * symbols.length); }
  var r = Math.random() * total;
  for (var j = 0; j < symbols.length; j++) {
    if (!(symbols[j].weight > 0)) { continue; }
    r -= symbols[j].weight;
    if (r <= 0) { return j; }
  }
  return 0;
}
function rollWinChance(chance) {
  if (chance <= 0) { return false; }
  if (chance >= 100) { return true; }
  return Math.random() * 100 < chance;
}
function drawReels(symbols, reelCount, chance) {
  var out = [];
  if (rollWinChance(chance)) {
    var forced = pickWeighted(symbols);
    for (var a = 0; a < reelCount; a++) { out.push(forced); }
  } else {
    for (var b = 0; b < reelCount; b++) { out.push(pickWeighted(symbols)); }
  }
  return out;
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::PayoutValue;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn candidate(id: &str, weight: f64) -> OutcomeCandidate {
        OutcomeCandidate::new(id, id, PayoutValue::Credits(1.0), weight)
    }

    #[test]
    fn test_weighted_selection_converges() {
        let candidates = vec![candidate("a", 90.0), candidate("b", 10.0)];
        let mut rng = StdRng::seed_from_u64(7);
        let draws = 100_000;
        let hits = (0..draws)
            .filter(|_| choose_weighted_index(&candidates, &mut rng) == 0)
            .count();
        let frequency = hits as f64 / draws as f64;
        assert!((frequency - 0.9).abs() < 0.02, "frequency was {}", frequency);
    }

    #[test]
    fn test_single_candidate_is_always_chosen() {
        let candidates = vec![candidate("only", 3.0)];
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(choose_weighted(&candidates, &mut rng).id, "only");
        }
    }

    #[test]
    fn test_equal_weights_are_roughly_uniform() {
        let candidates = vec![candidate("a", 1.0), candidate("b", 1.0), candidate("c", 1.0), candidate("d", 1.0)];
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0usize; 4];
        for _ in 0..40_000 {
            counts[choose_weighted_index(&candidates, &mut rng)] += 1;
        }
        for count in counts {
            assert!((count as f64 / 40_000.0 - 0.25).abs() < 0.02);
        }
    }

    #[test]
    fn test_zero_weight_is_unreachable_next_to_positive_weights() {
        let candidates = vec![candidate("zero", 0.0), candidate("a", 1.0), candidate("b", 2.0)];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10_000 {
            assert_ne!(choose_weighted_index(&candidates, &mut rng), 0);
        }
        // A draw of exactly zero must not land on the zero-weight entry either
        assert_eq!(pick_for_draw(&candidates, 0.0), 1);
    }

    #[test]
    fn test_all_zero_weights_are_each_selectable() {
        let candidates = vec![candidate("a", 0.0), candidate("b", 0.0), candidate("c", 0.0)];
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; 3];
        for _ in 0..1_000 {
            seen[choose_weighted_index(&candidates, &mut rng)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_exhausted_draw_falls_back_to_first() {
        let candidates = vec![candidate("a", 1.0), candidate("b", 1.0)];
        assert_eq!(pick_for_draw(&candidates, 2.0 + 1e-9), 0);
        assert_eq!(pick_for_draw(&candidates, 1.5), 1);
    }

    #[test]
    fn test_win_chance_extremes() {
        let symbols = vec![candidate("a", 1.0), candidate("b", 1.0), candidate("c", 1.0)];
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let reels = draw_reels(&symbols, 3, 100.0, &mut rng);
            assert!(reels.iter().all(|r| *r == reels[0]));
        }
        assert!(!roll_win_chance(0.0, &mut rng));
        assert!(roll_win_chance(100.0, &mut rng));
    }

    #[test]
    fn test_forced_index_is_clamped() {
        let symbols = vec![candidate("a", 1.0), candidate("b", 1.0)];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(resolve_index(&symbols, OutcomeMode::ForcedIndex(1), &mut rng), 1);
        assert_eq!(resolve_index(&symbols, OutcomeMode::ForcedIndex(9), &mut rng), 1);
    }
}
