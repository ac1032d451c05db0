//! End-to-end recommendation tests over the built-in catalog, plus the
//! recorded-recommendation flow against a persistent catalog.

mod common;

use common::*;

#[test]
fn test_reference_profile_gets_functional_training() -> anyhow::Result<()> {
    // 30 years, 70 kg, 1.75 m, 4 days, mantenimiento:
    // intermedio / mantenimiento / media after evaluation
    let input = make_input(30, 70.0, 1.75, 4, Goal::Mantenimiento);

    let recommendation = RecommendationPipeline::new().recommend(&input, builtin_catalog())?;

    // "Entrenamiento Funcional" matches on every axis
    assert_eq!(recommendation.routine.name, "Entrenamiento Funcional");
    assert_eq!(recommendation.score, 100.0);
    assert!(recommendation.safety.safe);
    assert_eq!(recommendation.safety.reason, "Rutina segura y adecuada");
    assert!(recommendation.profile.precautions.is_empty());

    // media at 45 min for 70 kg
    assert_eq!(recommendation.estimated_calories, 330);

    Ok(())
}

#[test]
fn test_alternatives_are_ranked_and_exclude_the_chosen_routine() -> anyhow::Result<()> {
    let input = make_input(30, 70.0, 1.75, 4, Goal::Mantenimiento);

    let recommendation = RecommendationPipeline::new().recommend(&input, builtin_catalog())?;

    assert_eq!(recommendation.alternatives.len(), 3);
    assert!(
        recommendation
            .alternatives
            .iter()
            .all(|(r, _)| r.id != recommendation.routine.id)
    );

    let names: Vec<&str> = recommendation
        .alternatives
        .iter()
        .map(|(r, _)| r.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Tonificación Femenina",
            "Cardio Moderado",
            "Pérdida de Peso Intensiva"
        ]
    );

    // Scores are non-increasing
    let scores: Vec<f64> = recommendation.alternatives.iter().map(|(_, s)| *s).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));

    Ok(())
}

#[test]
fn test_alternatives_limit_is_configurable() -> anyhow::Result<()> {
    let input = make_input(30, 70.0, 1.75, 4, Goal::Mantenimiento);

    let recommendation = RecommendationPipeline::new()
        .with_alternatives_limit(1)
        .recommend(&input, builtin_catalog())?;

    assert_eq!(recommendation.alternatives.len(), 1);
    Ok(())
}

#[test]
fn test_elderly_profile_gets_safe_low_intensity_routine() -> anyhow::Result<()> {
    // 65 years, 80 kg, 1.70 m: sobrepeso, principiante, intensidad baja
    let input = make_input(65, 80.0, 1.70, 3, Goal::Mantenimiento);

    let recommendation = RecommendationPipeline::new().recommend(&input, builtin_catalog())?;

    assert_eq!(recommendation.profile.bmi_class, BmiClass::Sobrepeso);
    assert_eq!(recommendation.profile.level, Level::Principiante);
    assert_eq!(recommendation.profile.intensity, Intensity::Baja);

    // High intensity routines were filtered out before ranking
    assert_eq!(recommendation.routine.name, "Cardio Suave");
    assert_ne!(recommendation.routine.intensity, Intensity::Alta);
    assert!(
        recommendation
            .alternatives
            .iter()
            .all(|(r, _)| r.intensity != Intensity::Alta)
    );

    assert!(recommendation.safety.safe);
    assert_eq!(
        recommendation.profile.precautions,
        vec!["Edad avanzada: se recomienda intensidad baja"]
    );
    assert!(
        recommendation
            .explanation
            .contains("✓ Intensidad baja recomendada por tu edad")
    );

    Ok(())
}

#[test]
fn test_empty_catalog_reports_no_routines_available() {
    let input = make_input(30, 70.0, 1.75, 4, Goal::Mantenimiento);

    let error = RecommendationPipeline::new()
        .recommend(&input, vec![])
        .expect_err("empty catalog should fail");

    assert_eq!(
        error.to_string(),
        "No hay rutinas disponibles en el sistema. Por favor, contacta al administrador."
    );
}

#[test]
fn test_inactive_routines_do_not_count() {
    let input = make_input(30, 70.0, 1.75, 4, Goal::Mantenimiento);

    let mut routine = make_routine(1, "Retirada", Level::Intermedio, Goal::Mantenimiento, 4, 45, Intensity::Media);
    routine.active = false;

    let error = RecommendationPipeline::new()
        .recommend(&input, vec![routine])
        .expect_err("catalog with only inactive routines should fail");

    assert_eq!(
        error.to_string(),
        "No hay rutinas disponibles en el sistema. Por favor, contacta al administrador."
    );
}

#[test]
fn test_no_safe_routines_reports_safety_error() {
    // Single high intensity routine for a 65-year-old
    let input = make_input(65, 70.0, 1.75, 5, Goal::Peso);
    let catalog = vec![make_routine(1, "HIIT Extremo", Level::Principiante, Goal::Peso, 5, 45, Intensity::Alta)];

    let error = RecommendationPipeline::new()
        .recommend(&input, catalog)
        .expect_err("unsafe-only catalog should fail");

    assert_eq!(
        error.to_string(),
        "No se encontraron rutinas seguras para tu perfil. Por favor, actualiza tu perfil médico."
    );
}

#[test]
fn test_validated_form_flows_into_recommendation() -> anyhow::Result<()> {
    // The §8 happy path: a fully valid submission produces no error and the
    // native flow proceeds into the engine.
    let input = valid_form().validate().expect("form should validate");

    let recommendation = RecommendationPipeline::new().recommend(&input, builtin_catalog())?;
    assert!(recommendation.score > 0.0);

    Ok(())
}

#[tokio::test]
async fn test_recommendation_is_recorded_in_catalog() -> anyhow::Result<()> {
    // 1. Seed a persistent catalog
    let (catalog, _temp_dir) = create_test_catalog().await;
    load_builtin_routines(&catalog, false).await?;
    let routines = catalog.get_routines(&RoutineFilter::default()).await?;

    // 2. Produce and record a recommendation
    let input = make_input(30, 70.0, 1.75, 4, Goal::Mantenimiento);
    let recommendation = RecommendationPipeline::new().recommend(&input, routines)?;
    let stored = catalog.record_recommendation(&recommendation).await?;

    assert!(stored.id > 0);
    assert_eq!(stored.routine_id, recommendation.routine.id);
    assert_eq!(stored.score, recommendation.score);
    assert!(stored.safe);
    assert_eq!(stored.age, 30);
    assert_eq!(stored.goal, Goal::Mantenimiento);

    // 3. It shows up in the recent history with the same snapshot
    let recent = catalog.recent_recommendations(5).await?;
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].id, stored.id);
    assert_eq!(recent[0].routine_id, stored.routine_id);
    assert_eq!(recent[0].bmi_class, recommendation.profile.bmi_class);
    assert_eq!(recent[0].explanation, recommendation.explanation);

    Ok(())
}

#[tokio::test]
async fn test_recent_recommendations_are_newest_first() -> anyhow::Result<()> {
    let (catalog, _temp_dir) = create_test_catalog().await;
    load_builtin_routines(&catalog, false).await?;
    let routines = catalog.get_routines(&RoutineFilter::default()).await?;

    let engine = RecommendationPipeline::new();
    let first = engine.recommend(&make_input(30, 70.0, 1.75, 4, Goal::Mantenimiento), routines.clone())?;
    let second = engine.recommend(&make_input(65, 80.0, 1.70, 3, Goal::Mantenimiento), routines)?;

    let first_stored = catalog.record_recommendation(&first).await?;
    let second_stored = catalog.record_recommendation(&second).await?;

    let recent = catalog.recent_recommendations(5).await?;
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, second_stored.id);
    assert_eq!(recent[1].id, first_stored.id);

    // The limit caps the listing
    let limited = catalog.recent_recommendations(1).await?;
    assert_eq!(limited.len(), 1);

    Ok(())
}
