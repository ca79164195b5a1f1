use serde::{Deserialize, Serialize};
use crate::candidate::OutcomeCandidate;

/// Payout multiplier applied to a pair
pub const PAIR_PAYOUT_FACTOR: f64 = 0.5;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WinKind {
    Jackpot,
    Pair,
    /// Wheel segment prize, always awarded
    Prize,
    NoWin,
}

/// Result of evaluating the reels of one slot round
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Payout {
    pub kind: WinKind,
    pub amount: u64,
    /// Index into the reel sequence of the outcome that paid
    pub paying_reel: Option<usize>,
}

impl Payout {
    pub fn none() -> Self {
        Self { kind: WinKind::NoWin, amount: 0, paying_reel: None }
    }

    pub fn is_win(&self) -> bool {
        self.kind != WinKind::NoWin
    }
}

/// Evaluates the final reel outcomes for `bet`.
///
/// 1. Every reel identical: jackpot paying `value * bet`.
/// 2. Otherwise the first outcome, in order of first appearance, that shows up at least
///    twice pays `floor(value * bet * 0.5)`. Later pairs are ignored even if they would pay
///    more.
/// 3. Otherwise nothing.
pub fn evaluate(outcomes: &[OutcomeCandidate], bet: u64) -> Payout {
    let first = match outcomes.first() {
        Some(first) => first,
        None => return Payout::none(),
    };

    if outcomes.iter().all(|o| o.same_outcome(first)) {
        return Payout {
            kind: WinKind::Jackpot,
            amount: credit_amount(first.payout.credits() * bet as f64),
            paying_reel: Some(0),
        };
    }

    // Occurrence counts kept in first-appearance order
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for (reel, outcome) in outcomes.iter().enumerate() {
        match counts.iter_mut().find(|(seen, _)| outcomes[*seen].same_outcome(outcome)) {
            Some((_, count)) => *count += 1,
            None => counts.push((reel, 1)),
        }
    }

    match counts.iter().find(|(_, count)| *count >= 2) {
        Some((reel, _)) => Payout {
            kind: WinKind::Pair,
            amount: credit_amount(outcomes[*reel].payout.credits() * bet as f64 * PAIR_PAYOUT_FACTOR),
            paying_reel: Some(*reel),
        },
        None => Payout::none(),
    }
}

fn credit_amount(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u64
    } else {
        0
    }
}

/// Script twin of [`evaluate`]. Reel entries are indices into `symbols`, each symbol
/// carrying `{ id: string, payout: number }`. The embedding script defines
/// `PAIR_PAYOUT_FACTOR`.
pub const EVALUATE_JS: &str = r#"function evaluateReels(symbols, reels, bet) {
  if (reels.length === 0) { return { kind: 'no_win', amount: 0 }; }
  var firstId = symbols[reels[0]].id;
  var allSame = true;
  for (var i = 1; i < reels.length; i++) { if (symbols[reels[i]].id !== firstId) { allSame = false; } }
  if (allSame) { return { kind: 'jackpot', amount: Math.max(0, Math.floor(symbols[reels[0]].payout * bet)) }; }
  var order = [];
  var counts = {};
  for (var j = 0; j < reels.length; j++) {
    var id = symbols[reels[j]].id;
    if (!Object.prototype.hasOwnProperty.call(counts, id)) { counts[id] = 0; order.push(j); }
    counts[id] += 1;
  }
  for (var k = 0; k < order.length; k++) {
    var sym = symbols[reels[order[k]]];
    if (counts[sym.id] >= 2) { return { kind: 'pair', amount: Math.max(0, Math.floor(sym.payout * bet * PAIR_PAYOUT_FACTOR)) }; }
  }
  return { kind: 'no_win', amount: 0 };
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::PayoutValue;

    fn symbol(id: &str, value: f64) -> OutcomeCandidate {
        OutcomeCandidate::new(id, id, PayoutValue::Credits(value), 1.0)
    }

    #[test]
    fn test_jackpot_pays_value_times_bet() {
        let a = symbol("a", 100.0);
        let payout = evaluate(&[a.clone(), a.clone(), a], 10);
        assert_eq!(payout.kind, WinKind::Jackpot);
        assert_eq!(payout.amount, 1000);
    }

    #[test]
    fn test_pair_pays_half_floored() {
        let a = symbol("a", 20.0);
        let b = symbol("b", 5.0);
        let payout = evaluate(&[a.clone(), a, b], 10);
        assert_eq!(payout.kind, WinKind::Pair);
        assert_eq!(payout.amount, 100);

        let odd = symbol("odd", 3.0);
        let payout = evaluate(&[odd.clone(), symbol("x", 1.0), odd], 3);
        assert_eq!(payout.amount, 4); // floor(4.5)
    }

    #[test]
    fn test_single_reel_is_a_jackpot() {
        let payout = evaluate(&[symbol("a", 100.0)], 10);
        assert_eq!(payout.kind, WinKind::Jackpot);
        assert_eq!(payout.amount, 1000);
        assert_eq!(payout.paying_reel, Some(0));
        assert!(EVALUATE_JS.contains("var allSame = true;"));
    }

    #[test]
    fn test_all_distinct_pays_nothing() {
        let payout = evaluate(&[symbol("a", 1.0), symbol("b", 2.0), symbol("c", 3.0)], 10);
        assert_eq!(payout, Payout::none());
    }

    #[test]
    fn test_first_pair_by_appearance_wins_tie() {
        // Five reels with two pairs: the low-value pair appears first and is the one paid
        let low = symbol("low", 2.0);
        let high = symbol("high", 50.0);
        let reels = [low.clone(), high.clone(), low, high, symbol("x", 1.0)];
        let payout = evaluate(&reels, 10);
        assert_eq!(payout.paying_reel, Some(0));
        assert_eq!(payout.amount, 10);
    }

    #[test]
    fn test_prize_symbols_pay_no_credits() {
        let prize = OutcomeCandidate::new("p", "Prize", PayoutValue::Prize("Mug".into()), 1.0);
        let payout = evaluate(&[prize.clone(), prize.clone(), prize], 10);
        assert_eq!(payout.kind, WinKind::Jackpot);
        assert_eq!(payout.amount, 0);
    }

    #[test]
    fn test_empty_reels() {
        assert_eq!(evaluate(&[], 10), Payout::none());
    }
}
