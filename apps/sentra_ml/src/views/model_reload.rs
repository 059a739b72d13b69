use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, warn};

use crate::pipeline::Pipeline;
use crate::serializers::model_reload::{ApiError, ReloadOut};
use crate::AppState;

/// `POST /model/reload` — re-reads the artifact from the configured path
/// and swaps it in. A failed load keeps the previously loaded model in
/// service.
pub async fn reload(
    State(state): State<AppState>,
) -> Result<Json<ReloadOut>, (StatusCode, Json<ApiError>)> {
    let pipeline = Pipeline::load(&state.cfg.model_path).map_err(|e| {
        warn!(error = %e, "model reload failed; previous model kept");
        internal(e)
    })?;
    let mut slot = state.model.write().map_err(internal)?;
    *slot = Some(pipeline);
    info!(path = %state.cfg.model_path.display(), "model reloaded");
    Ok(Json(ReloadOut { ok: true }))
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError { error: e.to_string() }),
    )
}
