pub mod rules;
pub mod scoring;
pub mod steps;

use anyhow::Result;
use tracing::warn;

use crate::models::{Recommendation, Routine, UserInput};
use crate::pipeline::Pipeline;
use steps::{CompatibilityScoreStep, SafetyFilterStep, SCORE_KEY};

/// Main recommendation orchestrator.
///
/// Evaluates the profile, runs the candidate routines through the safety and
/// scoring steps, ranks the survivors and assembles the final result with
/// explanation, alternatives and calorie estimate.
#[derive(Debug, Clone)]
pub struct RecommendationPipeline {
    pub alternatives_limit: usize,
    pub verbose: bool,
}

impl RecommendationPipeline {
    pub fn new() -> Self {
        Self {
            alternatives_limit: 3,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_alternatives_limit(mut self, limit: usize) -> Self {
        self.alternatives_limit = limit;
        self
    }

    /// Produce a recommendation for `input` from the given catalog.
    pub fn recommend(&self, input: &UserInput, routines: Vec<Routine>) -> Result<Recommendation> {
        let active: Vec<Routine> = routines.into_iter().filter(|r| r.active).collect();
        if active.is_empty() {
            warn!("recommendation requested against an empty catalog");
            anyhow::bail!(
                "No hay rutinas disponibles en el sistema. Por favor, contacta al administrador."
            );
        }

        let profile = rules::evaluate(input);

        if self.verbose {
            println!(
                "Perfil evaluado: IMC {:.1} ({}), nivel {}, objetivo {}, intensidad {}",
                profile.bmi, profile.bmi_class.label(), profile.level, profile.goal,
                profile.intensity
            );
        }

        let pipeline = Pipeline::new(profile.clone())
            .with_verbose(self.verbose)
            .add_step_boxed(Box::new(SafetyFilterStep))
            .add_step_boxed(Box::new(CompatibilityScoreStep));

        let results = pipeline.run_with_executor(active)?;
        if results.is_empty() {
            anyhow::bail!(
                "No se encontraron rutinas seguras para tu perfil. Por favor, actualiza tu perfil médico."
            );
        }

        let scored: Vec<(Routine, f64)> = results
            .into_iter()
            .map(|item| {
                let score = item.get_float(SCORE_KEY).unwrap_or(0.0);
                (item.routine, score)
            })
            .collect();
        let ranked = scoring::rank(scored);

        let Some((routine, score)) = ranked.first().cloned() else {
            anyhow::bail!("No se encontraron rutinas compatibles");
        };

        let safety = rules::routine_safety(&routine, &profile);
        let explanation = rules::explain(&routine, &profile);
        let alternatives = scoring::alternatives(&ranked, routine.id, self.alternatives_limit);
        let estimated_calories = scoring::estimated_calories(
            routine.duration_minutes,
            routine.intensity,
            profile.input.weight_kg,
        );

        Ok(Recommendation {
            routine,
            score,
            safety,
            explanation,
            alternatives,
            estimated_calories,
            profile,
        })
    }
}

impl Default for RecommendationPipeline {
    fn default() -> Self {
        Self::new()
    }
}
