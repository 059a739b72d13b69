use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReloadOut {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}
