use axum::{routing::get, Router};
use crate::views::sentra_health::health;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
}
