mod history;
mod model;
mod routine;
mod seed;
mod state;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use crate::models::{BmiClass, Goal, Intensity, Level, Recommendation, Routine};
use state::CatalogState;

pub use history::{RecommendationRepository, StoredRecommendation};
pub use routine::{NewRoutine, RoutineFilter, RoutineRepository, RoutineUpdate};
pub use seed::{SeedReport, builtin_catalog, builtin_routines, load_builtin_routines};

/// Handle to a routine catalog stored in a single SQLite file.
#[derive(Debug, Clone)]
pub struct CatalogDb {
    state: Arc<CatalogState>,
}

impl CatalogDb {
    pub async fn new<P: AsRef<Path>>(catalog_file: P) -> anyhow::Result<Self> {
        Ok(Self {
            state: Arc::new(CatalogState::new(catalog_file).await?),
        })
    }

    /// Flush the WAL and close the pool. Required before reopening the same
    /// file from another handle in tests.
    pub async fn close(&self) -> anyhow::Result<()> {
        self.state.close().await
    }
}

const ROUTINE_COLUMNS: &str = "id, name, description, level, goal, days_per_week, \
     duration_minutes, intensity, exercises, weekly_plan, estimated_calories, active";

fn routine_from_row(row: &SqliteRow) -> anyhow::Result<Routine> {
    let level: String = row.try_get("level")?;
    let goal: String = row.try_get("goal")?;
    let intensity: String = row.try_get("intensity")?;
    let exercises: String = row.try_get("exercises")?;
    let weekly_plan: String = row.try_get("weekly_plan")?;
    let days_per_week: i64 = row.try_get("days_per_week")?;
    let duration_minutes: i64 = row.try_get("duration_minutes")?;
    let estimated_calories: i64 = row.try_get("estimated_calories")?;
    let active: i64 = row.try_get("active")?;

    Ok(Routine {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        level: Level::try_from(level.as_str())?,
        goal: Goal::try_from(goal.as_str())?,
        days_per_week: days_per_week
            .try_into()
            .expect("days_per_week bounded by database constraint"),
        duration_minutes: u32::try_from(duration_minutes)
            .context("duration_minutes out of range")?,
        intensity: Intensity::try_from(intensity.as_str())?,
        exercises: model::exercises_from_json(&exercises)?,
        weekly_plan: model::plan_from_json(&weekly_plan)?,
        estimated_calories: u32::try_from(estimated_calories)
            .context("estimated_calories out of range")?,
        active: active != 0,
    })
}

impl RoutineRepository for CatalogDb {
    async fn get_routines(&self, filter: &RoutineFilter) -> anyhow::Result<Vec<Routine>> {
        let mut sql = format!("SELECT {ROUTINE_COLUMNS} FROM routine WHERE 1 = 1");
        if !filter.include_inactive {
            sql.push_str(" AND active = 1");
        }
        if filter.level.is_some() {
            sql.push_str(" AND level = ?");
        }
        if filter.goal.is_some() {
            sql.push_str(" AND goal = ?");
        }
        sql.push_str(" ORDER BY id ASC");

        let mut query = sqlx::query(&sql);
        if let Some(level) = filter.level {
            query = query.bind(level.as_str());
        }
        if let Some(goal) = filter.goal {
            query = query.bind(goal.as_str());
        }

        query
            .fetch_all(self.state.pool())
            .await?
            .iter()
            .map(routine_from_row)
            .collect()
    }

    async fn get_routine_by_id(&self, id: i64) -> anyhow::Result<Option<Routine>> {
        let sql = format!("SELECT {ROUTINE_COLUMNS} FROM routine WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.state.pool())
            .await?;
        row.as_ref().map(routine_from_row).transpose()
    }

    async fn get_routine_by_name(&self, name: &str) -> anyhow::Result<Option<Routine>> {
        let sql = format!("SELECT {ROUTINE_COLUMNS} FROM routine WHERE name = ?");
        let row = sqlx::query(&sql)
            .bind(name)
            .fetch_optional(self.state.pool())
            .await?;
        row.as_ref().map(routine_from_row).transpose()
    }

    async fn add_routine(&self, routine: &NewRoutine) -> anyhow::Result<Routine> {
        let exercises = model::exercises_to_json(&routine.exercises)?;
        let weekly_plan = model::plan_to_json(&routine.weekly_plan)?;
        let sql = format!(
            "INSERT INTO routine \
             (name, description, level, goal, days_per_week, duration_minutes, \
              intensity, exercises, weekly_plan, estimated_calories, active) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 1) \
             RETURNING {ROUTINE_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&routine.name)
            .bind(&routine.description)
            .bind(routine.level.as_str())
            .bind(routine.goal.as_str())
            .bind(i64::from(routine.days_per_week))
            .bind(i64::from(routine.duration_minutes))
            .bind(routine.intensity.as_str())
            .bind(&exercises)
            .bind(&weekly_plan)
            .bind(i64::from(routine.estimated_calories))
            .fetch_one(self.state.pool())
            .await?;
        routine_from_row(&row)
    }

    async fn update_routine(
        &self,
        routine: &Routine,
        update: &RoutineUpdate,
    ) -> anyhow::Result<Routine> {
        let exercises = match &update.exercises {
            Some(list) => Some(model::exercises_to_json(list)?),
            None => None,
        };
        let weekly_plan = match &update.weekly_plan {
            Some(plan) => Some(model::plan_to_json(plan)?),
            None => None,
        };
        let sql = format!(
            "UPDATE routine SET \
                name = COALESCE(?, name), \
                description = COALESCE(?, description), \
                level = COALESCE(?, level), \
                goal = COALESCE(?, goal), \
                days_per_week = COALESCE(?, days_per_week), \
                duration_minutes = COALESCE(?, duration_minutes), \
                intensity = COALESCE(?, intensity), \
                exercises = COALESCE(?, exercises), \
                weekly_plan = COALESCE(?, weekly_plan), \
                estimated_calories = COALESCE(?, estimated_calories), \
                active = COALESCE(?, active) \
             WHERE id = ? \
             RETURNING {ROUTINE_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(update.name.as_deref())
            .bind(update.description.as_deref())
            .bind(update.level.map(|v| v.as_str()))
            .bind(update.goal.map(|v| v.as_str()))
            .bind(update.days_per_week.map(i64::from))
            .bind(update.duration_minutes.map(i64::from))
            .bind(update.intensity.map(|v| v.as_str()))
            .bind(exercises)
            .bind(weekly_plan)
            .bind(update.estimated_calories.map(i64::from))
            .bind(update.active.map(i64::from))
            .bind(routine.id)
            .fetch_one(self.state.pool())
            .await?;
        routine_from_row(&row)
    }

    async fn delete_routine(&self, routine: Routine) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM routine WHERE id = ?")
            .bind(routine.id)
            .execute(self.state.pool())
            .await?;
        Ok(())
    }
}

impl RecommendationRepository for CatalogDb {
    async fn record_recommendation(
        &self,
        recommendation: &Recommendation,
    ) -> anyhow::Result<StoredRecommendation> {
        let profile = &recommendation.profile;
        let input = &profile.input;
        let precautions = profile.precautions.join("\n");
        let created_at = OffsetDateTime::now_utc();
        let created_at_str = created_at.format(&Rfc3339)?;

        let row = sqlx::query(
            "INSERT INTO recommendation \
             (routine_id, score, safe, safety_reason, explanation, precautions, \
              age, weight_kg, height_m, available_days, goal, bmi, bmi_class, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id",
        )
        .bind(recommendation.routine.id)
        .bind(recommendation.score)
        .bind(i64::from(recommendation.safety.safe))
        .bind(&recommendation.safety.reason)
        .bind(&recommendation.explanation)
        .bind(&precautions)
        .bind(i64::from(input.age))
        .bind(input.weight_kg)
        .bind(input.height_m)
        .bind(i64::from(input.available_days))
        .bind(input.goal.as_str())
        .bind(profile.bmi)
        .bind(profile.bmi_class.as_str())
        .bind(&created_at_str)
        .fetch_one(self.state.pool())
        .await?;

        let id: i64 = row.try_get("id")?;
        debug!(id, routine = %recommendation.routine.name, "recommendation recorded");

        Ok(StoredRecommendation {
            id,
            routine_id: recommendation.routine.id,
            score: recommendation.score,
            safe: recommendation.safety.safe,
            safety_reason: recommendation.safety.reason.clone(),
            explanation: recommendation.explanation.clone(),
            precautions,
            age: input.age,
            weight_kg: input.weight_kg,
            height_m: input.height_m,
            available_days: input.available_days,
            goal: input.goal,
            bmi: profile.bmi,
            bmi_class: profile.bmi_class,
            created_at,
        })
    }

    async fn recent_recommendations(&self, limit: u32) -> anyhow::Result<Vec<StoredRecommendation>> {
        sqlx::query(
            "SELECT id, routine_id, score, safe, safety_reason, explanation, precautions, \
                    age, weight_kg, height_m, available_days, goal, bmi, bmi_class, created_at \
             FROM recommendation ORDER BY id DESC LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(self.state.pool())
        .await?
        .iter()
        .map(stored_recommendation_from_row)
        .collect()
    }
}

fn stored_recommendation_from_row(row: &SqliteRow) -> anyhow::Result<StoredRecommendation> {
    let safe: i64 = row.try_get("safe")?;
    let age: i64 = row.try_get("age")?;
    let available_days: i64 = row.try_get("available_days")?;
    let goal: String = row.try_get("goal")?;
    let bmi_class: String = row.try_get("bmi_class")?;
    let created_at: String = row.try_get("created_at")?;

    Ok(StoredRecommendation {
        id: row.try_get("id")?,
        routine_id: row.try_get("routine_id")?,
        score: row.try_get("score")?,
        safe: safe != 0,
        safety_reason: row.try_get("safety_reason")?,
        explanation: row.try_get("explanation")?,
        precautions: row.try_get("precautions")?,
        age: u32::try_from(age).context("age out of range")?,
        weight_kg: row.try_get("weight_kg")?,
        height_m: row.try_get("height_m")?,
        available_days: u8::try_from(available_days).context("available_days out of range")?,
        goal: Goal::try_from(goal.as_str())?,
        bmi: row.try_get("bmi")?,
        bmi_class: BmiClass::try_from(bmi_class.as_str())?,
        created_at: OffsetDateTime::parse(&created_at, &Rfc3339)?,
    })
}
