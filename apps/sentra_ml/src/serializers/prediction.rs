use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The endpoint recognizes exactly one field; `text` must be a string for
/// the vectorizer to accept it.
#[derive(Debug, Deserialize)]
pub struct PredictionIn {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct PredictionOut {
    pub label: Value,
}
