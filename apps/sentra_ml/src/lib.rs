pub mod error;
pub mod pipeline;
pub mod serializers;
pub mod urls;
pub mod views;

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use crate::pipeline::Pipeline;

#[derive(Clone)]
pub struct ModelCfg {
    /// Artifact location (default `./model.json`). Override with MODEL_PATH.
    pub model_path: PathBuf,
}

impl ModelCfg {
    pub fn from_env() -> Self {
        let model_path = std::env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./model.json"));
        Self { model_path }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<RwLock<Option<Pipeline>>>,
    pub cfg: ModelCfg,
}

impl AppState {
    /// Loads the artifact once at startup. A failed load leaves the slot
    /// empty instead of aborting: predictions answer 405 until a reload
    /// succeeds, and the server stays up either way.
    pub fn init(cfg: ModelCfg) -> Self {
        let model = match Pipeline::load(&cfg.model_path) {
            Ok(p) => {
                info!(path = %cfg.model_path.display(), "model artifact loaded");
                Some(p)
            }
            Err(e) => {
                warn!(error = %e, "model artifact not loaded at startup");
                None
            }
        };
        Self { model: Arc::new(RwLock::new(model)), cfg }
    }
}
