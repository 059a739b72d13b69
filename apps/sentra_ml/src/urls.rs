use axum::{routing::post, Router};
use crate::views::{model_reload::reload, prediction::predict};
use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/prediction", post(predict))
        .route("/model/reload", post(reload))
        .with_state(state)
}
