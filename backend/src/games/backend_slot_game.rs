use axum::{routing::post, Json, Router};
use rand::rngs::OsRng;
use shared::rounds::{resolve_spin, SpinRequest};
use shared::ConfigError;
use crate::error::Error;
use crate::models::{SlotRound, SlotSpinRequest};
use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new().route("/slot", post(spin_slot))
}

/// Plays one slot round server side. A balance that cannot cover the bet is not an
/// error: the round is simply not played and the balance comes back unchanged.
async fn spin_slot(Json(request): Json<SlotSpinRequest>) -> Result<Json<SlotRound>, Error> {
    let config = request.config;
    config.check()?;

    let bet = request.bet.unwrap_or(config.default_bet);
    if !config.allows_bet(bet) {
        return Err(ConfigError::UnknownBet(bet).into());
    }

    let balance = request.balance.unwrap_or(config.starting_balance);
    if balance < bet {
        tracing::debug!("slot spin skipped, balance {} below bet {}", balance, bet);
        return Ok(Json(SlotRound { accepted: false, balance, result: None }));
    }

    let spin = SpinRequest::for_slot(&config, bet);
    let mut rng = OsRng;
    let result = resolve_spin(&config.symbols, &spin, &mut rng);
    let balance = balance - bet + result.payout.amount;

    if result.payout.is_win() {
        tracing::info!("🎰 SLOT SPIN: {:?} paid {} on bet {}", result.payout.kind, result.payout.amount, bet);
    }
    Ok(Json(SlotRound { accepted: true, balance, result: Some(result) }))
}
