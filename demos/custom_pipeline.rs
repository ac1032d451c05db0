//! Assemble a recommendation pipeline with a custom filtering step.
//!
//! Run with: cargo run --example custom_pipeline

use anyhow::Result;

use rutania::core::db::builtin_catalog;
use rutania::models::{Goal, UserInput};
use rutania::pipeline::{Pipeline, PipelineContext, PipelineData, PipelineStep};
use rutania::recommend::rules;
use rutania::recommend::steps::{CompatibilityScoreStep, SCORE_KEY, SafetyFilterStep};

/// Keeps only routines whose sessions fit into a lunch break.
struct ShortSessionStep {
    max_minutes: u32,
}

impl PipelineStep for ShortSessionStep {
    fn process(
        &self,
        data: Vec<PipelineData>,
        _context: &PipelineContext,
    ) -> Result<Vec<PipelineData>> {
        Ok(data
            .into_iter()
            .filter(|item| item.routine.duration_minutes <= self.max_minutes)
            .collect())
    }

    fn name(&self) -> &str {
        "Short Session Filter"
    }
}

fn main() -> Result<()> {
    let input = UserInput {
        age: 42,
        weight_kg: 78.0,
        height_m: 1.80,
        available_days: 3,
        goal: Goal::Mantenimiento,
    };
    let profile = rules::evaluate(&input);

    let pipeline = Pipeline::new(profile)
        .with_verbose(true)
        .add_step_boxed(Box::new(SafetyFilterStep))
        .add_step_boxed(Box::new(ShortSessionStep { max_minutes: 40 }))
        .add_step_boxed(Box::new(CompatibilityScoreStep));

    let results = pipeline.run_with_executor(builtin_catalog())?;

    println!("\n{} rutinas candidatas:", results.len());
    for item in &results {
        println!(
            "  {} → compatibilidad {:.1}",
            item.routine.name,
            item.get_float(SCORE_KEY).unwrap_or(0.0)
        );
    }

    Ok(())
}
