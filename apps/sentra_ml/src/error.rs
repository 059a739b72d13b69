use thiserror::Error;

/// Everything that can go wrong between receiving a request body and
/// producing a label. Callers of the HTTP endpoint never see these; the
/// prediction view collapses them all to one opaque status.
#[derive(Debug, Error)]
pub enum PredictError {
    /// No artifact is loaded (startup load failed and no reload succeeded).
    #[error("no model artifact is loaded")]
    Unavailable,

    /// The artifact file could not be read or deserialized, or its stages
    /// disagree on dimensions.
    #[error("artifact load failed: {0}")]
    Artifact(String),

    /// The request body was not valid JSON with a string `text` field.
    #[error("request decoding failed: {0}")]
    Input(String),

    /// A feature column fell outside the model's dimensions at runtime.
    #[error("feature column {0} outside model dimensions")]
    Shape(usize),
}
