pub mod core;
pub mod faq;
pub mod form;
pub mod models;
pub mod pipeline;
pub mod recommend;

pub use models::{EvaluatedProfile, Recommendation, Routine, UserInput};
pub use pipeline::{
    MetadataValue, Pipeline, PipelineContext, PipelineData, PipelineExecutor, PipelineStep,
    WorkItem,
};
pub use recommend::RecommendationPipeline;

#[cfg(feature = "gui")]
pub mod gui;
