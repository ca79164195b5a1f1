use axum::{routing::post, Json, Router};
use rand::rngs::OsRng;
use shared::rounds::{resolve_spin, SpinRequest, SpinResult};
use crate::error::Error;
use crate::models::WheelSpinRequest;
use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new().route("/wheel", post(spin_wheel))
}

/// Plans a wheel round. The landing segment is the configured winner; only the
/// rotation depends on where the wheel currently rests.
async fn spin_wheel(Json(request): Json<WheelSpinRequest>) -> Result<Json<SpinResult>, Error> {
    if !request.current_rotation.is_finite() || request.current_rotation < 0.0 {
        return Err(Error::BadRequest("current_rotation must be a non-negative number of degrees".to_string()));
    }
    let mut config = request.config;
    config.revalidate();
    config.check()?;

    let spin = SpinRequest::for_wheel(&config, request.current_rotation);
    let mut rng = OsRng;
    let result = resolve_spin(&config.segments, &spin, &mut rng);

    if let Some(segment) = result.final_outcomes.first() {
        tracing::info!("🎡 WHEEL SPIN: landing on segment {} ({})", segment.id, segment.label);
    }
    Ok(Json(result))
}
