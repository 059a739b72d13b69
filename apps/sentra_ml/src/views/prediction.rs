use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::error::PredictError;
use crate::serializers::prediction::{PredictionIn, PredictionOut};
use crate::AppState;

/// `POST /prediction` — one text in, one label out.
///
/// The body is taken as raw bytes and decoded by hand so that a malformed
/// or non-UTF-8 body, a missing `text` field and a wrong-typed `text` all
/// land in the same error path as a missing artifact or a model failure.
/// Callers get the same opaque 405 with an empty JSON body for every one of
/// them; the reason is only logged.
pub async fn predict(State(state): State<AppState>, body: Bytes) -> Response {
    match run(&state, &body) {
        Ok(label) => (StatusCode::OK, Json(PredictionOut { label })).into_response(),
        Err(err) => {
            warn!(error = %err, "prediction failed");
            (StatusCode::METHOD_NOT_ALLOWED, Json(json!({}))).into_response()
        }
    }
}

fn run(state: &AppState, body: &[u8]) -> Result<Value, PredictError> {
    let req: PredictionIn =
        serde_json::from_slice(body).map_err(|e| PredictError::Input(e.to_string()))?;
    let guard = state.model.read().map_err(|_| PredictError::Unavailable)?;
    let pipeline = guard.as_ref().ok_or(PredictError::Unavailable)?;
    pipeline.predict(&req.text)
}
