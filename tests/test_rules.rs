//! Tests for the rule engine: BMI classification, level/goal/intensity
//! inference, safety verdicts, precautions and explanations.

mod common;

use common::*;

#[test]
fn test_bmi_classification_bands() {
    assert_eq!(rules::classify_bmi(17.0), BmiClass::BajoPeso);
    assert_eq!(rules::classify_bmi(18.49), BmiClass::BajoPeso);
    assert_eq!(rules::classify_bmi(18.5), BmiClass::Normal);
    assert_eq!(rules::classify_bmi(24.9), BmiClass::Normal);
    assert_eq!(rules::classify_bmi(25.0), BmiClass::Sobrepeso);
    assert_eq!(rules::classify_bmi(29.9), BmiClass::Sobrepeso);
    assert_eq!(rules::classify_bmi(30.0), BmiClass::Obesidad);
    assert_eq!(rules::classify_bmi(42.0), BmiClass::Obesidad);
}

#[test]
fn test_bmi_value_from_input() {
    let input = make_input(30, 70.0, 1.75, 4, Goal::Mantenimiento);
    let bmi = input.bmi();
    assert!((bmi - 22.857).abs() < 0.001, "unexpected BMI {}", bmi);
}

#[test]
fn test_user_level_rules() {
    // Age over 50 forces principiante
    assert_eq!(rules::user_level(55, 5, BmiClass::Normal), Level::Principiante);
    // Fewer than 3 days forces principiante
    assert_eq!(rules::user_level(25, 2, BmiClass::Normal), Level::Principiante);
    // Obesity forces principiante
    assert_eq!(rules::user_level(25, 5, BmiClass::Obesidad), Level::Principiante);
    // Young, available and in band: avanzado
    assert_eq!(rules::user_level(25, 5, BmiClass::Normal), Level::Avanzado);
    assert_eq!(rules::user_level(25, 5, BmiClass::Sobrepeso), Level::Avanzado);
    // Everything else: intermedio
    assert_eq!(rules::user_level(35, 4, BmiClass::Normal), Level::Intermedio);
    assert_eq!(rules::user_level(35, 5, BmiClass::Normal), Level::Intermedio);
}

#[test]
fn test_recommended_goal_overrides() {
    // Overweight and obese profiles are steered to weight loss
    assert_eq!(
        rules::recommended_goal(Goal::Musculacion, BmiClass::Sobrepeso),
        Goal::Peso
    );
    assert_eq!(
        rules::recommended_goal(Goal::Mantenimiento, BmiClass::Obesidad),
        Goal::Peso
    );
    // Underweight profiles are steered to muscle gain
    assert_eq!(
        rules::recommended_goal(Goal::Peso, BmiClass::BajoPeso),
        Goal::Musculacion
    );
    // Normal band keeps the user's own goal
    assert_eq!(
        rules::recommended_goal(Goal::Mantenimiento, BmiClass::Normal),
        Goal::Mantenimiento
    );
}

#[test]
fn test_safe_intensity_rules() {
    assert_eq!(
        rules::safe_intensity(55, BmiClass::Normal, Level::Intermedio),
        Intensity::Baja
    );
    assert_eq!(
        rules::safe_intensity(30, BmiClass::Obesidad, Level::Principiante),
        Intensity::Baja
    );
    assert_eq!(
        rules::safe_intensity(30, BmiClass::Normal, Level::Principiante),
        Intensity::Baja
    );
    assert_eq!(
        rules::safe_intensity(30, BmiClass::Normal, Level::Avanzado),
        Intensity::Alta
    );
    // Advanced but over 40 drops to media
    assert_eq!(
        rules::safe_intensity(45, BmiClass::Normal, Level::Avanzado),
        Intensity::Media
    );
    assert_eq!(
        rules::safe_intensity(35, BmiClass::Normal, Level::Intermedio),
        Intensity::Media
    );
}

#[test]
fn test_precaution_lines() {
    assert!(rules::precautions(30, 22.0).is_empty());

    let elderly = rules::precautions(65, 22.0);
    assert_eq!(elderly, vec!["Edad avanzada: se recomienda intensidad baja"]);

    let obese = rules::precautions(30, 31.0);
    assert_eq!(obese, vec!["Obesidad: comenzar con rutinas de baja intensidad"]);

    let underweight = rules::precautions(30, 17.0);
    assert_eq!(
        underweight,
        vec!["Bajo peso: consultar médico antes de entrenar intensamente"]
    );

    // An elderly obese profile collects both lines, in rule order
    let both = rules::precautions(65, 31.0);
    assert_eq!(both.len(), 2);
    assert!(both[0].starts_with("Edad avanzada"));
    assert!(both[1].starts_with("Obesidad"));
}

#[test]
fn test_routine_safety_high_intensity_for_elderly() {
    // 65-year-old normal-BMI profile against a high intensity routine
    let profile = make_profile(65, 70.0, 1.75, 3, Goal::Mantenimiento);
    let routine = make_routine(1, "HIIT", Level::Principiante, Goal::Peso, 3, 30, Intensity::Alta);

    let verdict = rules::routine_safety(&routine, &profile);
    assert!(!verdict.safe);
    assert_eq!(verdict.reason, "Intensidad muy alta para tu edad");
}

#[test]
fn test_routine_safety_too_many_days_for_obese_profile() {
    // BMI 34.6: obesidad
    let profile = make_profile(30, 100.0, 1.70, 7, Goal::Peso);
    assert_eq!(profile.bmi_class, BmiClass::Obesidad);

    let routine = make_routine(1, "Full Week", Level::Principiante, Goal::Peso, 6, 30, Intensity::Baja);

    let verdict = rules::routine_safety(&routine, &profile);
    assert!(!verdict.safe);
    assert_eq!(verdict.reason, "Demasiados días de entrenamiento para comenzar");
}

#[test]
fn test_routine_safety_advanced_routine_for_beginner() {
    // 55-year-old: inferred level principiante
    let profile = make_profile(55, 70.0, 1.75, 4, Goal::Mantenimiento);
    assert_eq!(profile.level, Level::Principiante);

    let routine = make_routine(1, "Pro Split", Level::Avanzado, Goal::Musculacion, 4, 60, Intensity::Media);

    let verdict = rules::routine_safety(&routine, &profile);
    assert!(!verdict.safe);
    assert_eq!(verdict.reason, "Rutina demasiado avanzada para tu nivel actual");
}

#[test]
fn test_routine_safety_accepts_adequate_routine() {
    let profile = make_profile(30, 70.0, 1.75, 4, Goal::Mantenimiento);
    let routine = make_routine(1, "Equilibrada", Level::Intermedio, Goal::Mantenimiento, 4, 45, Intensity::Media);

    let verdict = rules::routine_safety(&routine, &profile);
    assert!(verdict.safe);
    assert_eq!(verdict.reason, "Rutina segura y adecuada");
}

#[test]
fn test_explanation_lists_matching_rules() {
    let profile = make_profile(30, 70.0, 1.75, 4, Goal::Mantenimiento);
    assert_eq!(profile.level, Level::Intermedio);

    let routine = make_routine(1, "Equilibrada", Level::Intermedio, Goal::Mantenimiento, 4, 45, Intensity::Media);
    let explanation = rules::explain(&routine, &profile);

    assert!(explanation.contains("✓ Nivel intermedio adecuado para tu experiencia"));
    assert!(explanation.contains("✓ Alineada con tu objetivo de mantenimiento"));
    assert!(explanation.contains("✓ Compatible con tu disponibilidad de 4 días"));
}

#[test]
fn test_explanation_low_intensity_for_elderly() {
    let profile = make_profile(65, 70.0, 1.75, 3, Goal::Mantenimiento);
    let routine = make_routine(1, "Cardio Suave", Level::Principiante, Goal::Mantenimiento, 3, 30, Intensity::Baja);

    let explanation = rules::explain(&routine, &profile);
    assert!(explanation.contains("✓ Intensidad baja recomendada por tu edad"));
}

#[test]
fn test_explanation_falls_back_when_nothing_matches() {
    let profile = make_profile(30, 70.0, 1.75, 4, Goal::Mantenimiento);
    // Mismatched on every axis and over the available days
    let routine = make_routine(1, "Otra", Level::Avanzado, Goal::Peso, 6, 60, Intensity::Alta);

    let explanation = rules::explain(&routine, &profile);
    assert_eq!(explanation, "Rutina compatible con tu perfil");
}

#[test]
fn test_evaluate_assembles_full_profile() {
    let input = make_input(65, 95.0, 1.70, 3, Goal::Mantenimiento);
    let profile = rules::evaluate(&input);

    // BMI 32.9: obesidad, which cascades through every rule
    assert_eq!(profile.bmi_class, BmiClass::Obesidad);
    assert_eq!(profile.level, Level::Principiante);
    assert_eq!(profile.goal, Goal::Peso);
    assert_eq!(profile.intensity, Intensity::Baja);
    assert_eq!(profile.precautions.len(), 2);
}
