use rutania::core::db::{CatalogDb, NewRoutine};
use rutania::form::RecommendationForm;
use rutania::models::{EvaluatedProfile, Goal, Intensity, Level, PlanEntry, Routine, UserInput};
use rutania::recommend::rules;

/// Creates a CatalogDb backed by a temporary SQLite file.
/// Returns both the catalog and the temp directory (which must be kept alive).
pub async fn create_test_catalog() -> (CatalogDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("test.rutania");
    let catalog = CatalogDb::new(&path)
        .await
        .expect("Failed to create test catalog");
    (catalog, dir)
}

/// Creates an in-memory Routine with the given shape and placeholder content.
pub fn make_routine(
    id: i64,
    name: &str,
    level: Level,
    goal: Goal,
    days_per_week: u8,
    duration_minutes: u32,
    intensity: Intensity,
) -> Routine {
    Routine {
        id,
        name: name.to_string(),
        description: format!("Rutina de prueba: {}", name),
        level,
        goal,
        days_per_week,
        duration_minutes,
        intensity,
        exercises: vec!["Ejercicio A (10 min)".to_string(), "Ejercicio B (10 min)".to_string()],
        weekly_plan: vec![
            PlanEntry::new("Lunes", "Sesión A"),
            PlanEntry::new("Miércoles", "Sesión B"),
        ],
        estimated_calories: 200,
        active: true,
    }
}

/// Creates a NewRoutine for catalog insertion tests.
pub fn make_new_routine(
    name: &str,
    level: Level,
    goal: Goal,
    days_per_week: u8,
    duration_minutes: u32,
    intensity: Intensity,
) -> NewRoutine {
    NewRoutine {
        name: name.to_string(),
        description: format!("Rutina de prueba: {}", name),
        level,
        goal,
        days_per_week,
        duration_minutes,
        intensity,
        exercises: vec!["Ejercicio A (10 min)".to_string(), "Ejercicio B (10 min)".to_string()],
        weekly_plan: vec![
            PlanEntry::new("Lunes", "Sesión A"),
            PlanEntry::new("Miércoles", "Sesión B"),
        ],
        estimated_calories: 200,
    }
}

pub fn make_input(age: u32, weight_kg: f64, height_m: f64, available_days: u8, goal: Goal) -> UserInput {
    UserInput {
        age,
        weight_kg,
        height_m,
        available_days,
        goal,
    }
}

/// Evaluated profile for a routine/profile pair test.
pub fn make_profile(
    age: u32,
    weight_kg: f64,
    height_m: f64,
    available_days: u8,
    goal: Goal,
) -> EvaluatedProfile {
    rules::evaluate(&make_input(age, weight_kg, height_m, available_days, goal))
}

/// A form snapshot that passes every check.
pub fn valid_form() -> RecommendationForm {
    RecommendationForm {
        edad: "30".to_string(),
        peso: "70".to_string(),
        altura: "1.75".to_string(),
        dias_disponibles: "4".to_string(),
        objetivo: "mantenimiento".to_string(),
    }
}
