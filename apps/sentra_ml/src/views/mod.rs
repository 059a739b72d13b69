pub mod model_reload;
pub mod prediction;
