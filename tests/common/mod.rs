mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from rutania for tests
pub use rutania::core::db::{
    CatalogDb, NewRoutine, RecommendationRepository, RoutineFilter, RoutineRepository,
    RoutineUpdate, SeedReport, builtin_catalog, builtin_routines, load_builtin_routines,
};
pub use rutania::faq::{FaqAccordion, FaqItem, default_faq};
pub use rutania::form::{Field, RecommendationForm, ValidationError};
pub use rutania::models::{
    BmiClass, EvaluatedProfile, Goal, Intensity, Level, PlanEntry, Recommendation, Routine,
    UserInput,
};
pub use rutania::pipeline::{
    MetadataValue, Pipeline, PipelineContext, PipelineData, PipelineExecutor, PipelineStep,
    WorkItem,
};
pub use rutania::recommend::{RecommendationPipeline, rules, scoring, steps};
