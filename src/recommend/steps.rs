use anyhow::Result;

use crate::models::{Goal, Level};
use crate::pipeline::{MetadataValue, PipelineContext, PipelineData, PipelineStep};
use crate::recommend::{rules, scoring};

/// Metadata key under which `CompatibilityScoreStep` stores its result.
pub const SCORE_KEY: &str = "score";

/// Drop candidates the safety rules reject for this profile
pub struct SafetyFilterStep;

impl PipelineStep for SafetyFilterStep {
    fn process(
        &self,
        data: Vec<PipelineData>,
        context: &PipelineContext,
    ) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();
        for item in data {
            let verdict = rules::routine_safety(&item.routine, &context.profile);
            if verdict.safe {
                result.push(item);
            } else if context.verbose {
                println!("  Dropped {}: {}", item.routine.name, verdict.reason);
            }
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Safety Filter"
    }
}

/// Annotate each candidate with its compatibility score
pub struct CompatibilityScoreStep;

impl PipelineStep for CompatibilityScoreStep {
    fn process(
        &self,
        data: Vec<PipelineData>,
        context: &PipelineContext,
    ) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();
        for item in data {
            let score = scoring::compatibility(&item.routine, &context.profile);
            result.push(item.with_metadata(SCORE_KEY, MetadataValue::Float(score)));
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Compatibility Score"
    }
}

/// Keep only candidates of a given level
pub struct LevelFilterStep {
    pub level: Level,
}

impl PipelineStep for LevelFilterStep {
    fn process(
        &self,
        data: Vec<PipelineData>,
        _context: &PipelineContext,
    ) -> Result<Vec<PipelineData>> {
        Ok(data
            .into_iter()
            .filter(|item| item.routine.level == self.level)
            .collect())
    }

    fn name(&self) -> &str {
        "Level Filter"
    }
}

/// Keep only candidates with a given goal
pub struct GoalFilterStep {
    pub goal: Goal,
}

impl PipelineStep for GoalFilterStep {
    fn process(
        &self,
        data: Vec<PipelineData>,
        _context: &PipelineContext,
    ) -> Result<Vec<PipelineData>> {
        Ok(data
            .into_iter()
            .filter(|item| item.routine.goal == self.goal)
            .collect())
    }

    fn name(&self) -> &str {
        "Goal Filter"
    }
}

/// Keep only candidates that fit within the available days
pub struct DaysFilterStep {
    pub max_days: u8,
}

impl PipelineStep for DaysFilterStep {
    fn process(
        &self,
        data: Vec<PipelineData>,
        _context: &PipelineContext,
    ) -> Result<Vec<PipelineData>> {
        Ok(data
            .into_iter()
            .filter(|item| item.routine.days_per_week <= self.max_days)
            .collect())
    }

    fn name(&self) -> &str {
        "Days Filter"
    }
}
