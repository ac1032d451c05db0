use std::future::Future;

use crate::models::{Goal, Intensity, Level, PlanEntry, Routine};

#[derive(Debug, Clone)]
pub struct NewRoutine {
    pub name: String,
    pub description: String,
    pub level: Level,
    pub goal: Goal,
    pub days_per_week: u8,
    pub duration_minutes: u32,
    pub intensity: Intensity,
    pub exercises: Vec<String>,
    pub weekly_plan: Vec<PlanEntry>,
    pub estimated_calories: u32,
}

#[derive(Debug, Clone, Default)]
pub struct RoutineUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub level: Option<Level>,
    pub goal: Option<Goal>,
    pub days_per_week: Option<u8>,
    pub duration_minutes: Option<u32>,
    pub intensity: Option<Intensity>,
    pub exercises: Option<Vec<String>>,
    pub weekly_plan: Option<Vec<PlanEntry>>,
    pub estimated_calories: Option<u32>,
    pub active: Option<bool>,
}

/// Filters for catalog listings. The default lists active routines only.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutineFilter {
    pub level: Option<Level>,
    pub goal: Option<Goal>,
    pub include_inactive: bool,
}

pub trait RoutineRepository {
    fn get_routines(
        &self,
        filter: &RoutineFilter,
    ) -> impl Future<Output = anyhow::Result<Vec<Routine>>>;
    fn get_routine_by_id(&self, id: i64) -> impl Future<Output = anyhow::Result<Option<Routine>>>;
    fn get_routine_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = anyhow::Result<Option<Routine>>>;
    fn add_routine(&self, routine: &NewRoutine) -> impl Future<Output = anyhow::Result<Routine>>;
    fn update_routine(
        &self,
        routine: &Routine,
        update: &RoutineUpdate,
    ) -> impl Future<Output = anyhow::Result<Routine>>;
    fn delete_routine(&self, routine: Routine) -> impl Future<Output = anyhow::Result<()>>;
}
