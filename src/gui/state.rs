use crate::core::db::builtin_catalog;
use crate::models::Routine;
use crate::recommend::RecommendationPipeline;

#[derive(Debug)]
pub struct AppState {
    pub catalog: Vec<Routine>,
    pub engine: RecommendationPipeline,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: builtin_catalog(),
            engine: RecommendationPipeline::new(),
        }
    }
}
