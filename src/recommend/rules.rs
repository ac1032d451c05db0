//! Rule engine: level, goal and intensity inference plus safety checks.
//!
//! These are pure functions over the validated profile. The inferred values
//! feed the compatibility scorer; the safety check and precautions gate what
//! the catalog is allowed to offer.

use crate::models::{
    BmiClass, EvaluatedProfile, Goal, Intensity, Level, Routine, SafetyVerdict, UserInput,
};

/// Classify a BMI value into its band.
pub fn classify_bmi(bmi: f64) -> BmiClass {
    if bmi < 18.5 {
        BmiClass::BajoPeso
    } else if bmi < 25.0 {
        BmiClass::Normal
    } else if bmi < 30.0 {
        BmiClass::Sobrepeso
    } else {
        BmiClass::Obesidad
    }
}

/// Infer the user's training level from age, availability and BMI class.
pub fn user_level(age: u32, available_days: u8, bmi_class: BmiClass) -> Level {
    if age > 50 || available_days < 3 || bmi_class == BmiClass::Obesidad {
        Level::Principiante
    } else if available_days >= 5
        && age < 30
        && matches!(bmi_class, BmiClass::Normal | BmiClass::Sobrepeso)
    {
        Level::Avanzado
    } else {
        Level::Intermedio
    }
}

/// The goal the engine recommends. A BMI outside the normal band overrides
/// the user's own choice.
pub fn recommended_goal(user_goal: Goal, bmi_class: BmiClass) -> Goal {
    match bmi_class {
        BmiClass::Obesidad | BmiClass::Sobrepeso => Goal::Peso,
        BmiClass::BajoPeso => Goal::Musculacion,
        BmiClass::Normal => user_goal,
    }
}

/// Highest intensity considered safe for this profile.
pub fn safe_intensity(age: u32, bmi_class: BmiClass, level: Level) -> Intensity {
    if age > 50 || bmi_class == BmiClass::Obesidad || level == Level::Principiante {
        Intensity::Baja
    } else if level == Level::Avanzado && age < 40 {
        Intensity::Alta
    } else {
        Intensity::Media
    }
}

/// Precaution lines attached to the evaluation.
pub fn precautions(age: u32, bmi: f64) -> Vec<String> {
    let mut out = Vec::new();
    if age > 60 {
        out.push("Edad avanzada: se recomienda intensidad baja".to_string());
    }
    if bmi > 30.0 {
        out.push("Obesidad: comenzar con rutinas de baja intensidad".to_string());
    }
    if bmi < 18.5 {
        out.push("Bajo peso: consultar médico antes de entrenar intensamente".to_string());
    }
    out
}

/// Run the full evaluation over a validated profile.
pub fn evaluate(input: &UserInput) -> EvaluatedProfile {
    let bmi = input.bmi();
    let bmi_class = classify_bmi(bmi);
    let level = user_level(input.age, input.available_days, bmi_class);
    let goal = recommended_goal(input.goal, bmi_class);
    let intensity = safe_intensity(input.age, bmi_class, level);

    EvaluatedProfile {
        input: *input,
        bmi,
        bmi_class,
        level,
        goal,
        intensity,
        precautions: precautions(input.age, bmi),
    }
}

/// Decide whether a routine is safe for the profile. The first violated rule
/// sets the reason.
pub fn routine_safety(routine: &Routine, profile: &EvaluatedProfile) -> SafetyVerdict {
    if profile.input.age > 60 && routine.intensity == Intensity::Alta {
        return SafetyVerdict {
            safe: false,
            reason: "Intensidad muy alta para tu edad".to_string(),
        };
    }
    if profile.bmi_class == BmiClass::Obesidad && routine.days_per_week > 5 {
        return SafetyVerdict {
            safe: false,
            reason: "Demasiados días de entrenamiento para comenzar".to_string(),
        };
    }
    if profile.level == Level::Principiante && routine.level == Level::Avanzado {
        return SafetyVerdict {
            safe: false,
            reason: "Rutina demasiado avanzada para tu nivel actual".to_string(),
        };
    }

    SafetyVerdict {
        safe: true,
        reason: "Rutina segura y adecuada".to_string(),
    }
}

/// Explanation of why a routine fits the profile, one "✓" line per matching
/// rule.
pub fn explain(routine: &Routine, profile: &EvaluatedProfile) -> String {
    let mut lines = Vec::new();

    if routine.level == profile.level {
        lines.push(format!(
            "✓ Nivel {} adecuado para tu experiencia",
            routine.level
        ));
    }
    if routine.goal == profile.goal {
        lines.push(format!("✓ Alineada con tu objetivo de {}", routine.goal));
    }
    if routine.days_per_week <= profile.input.available_days {
        lines.push(format!(
            "✓ Compatible con tu disponibilidad de {} días",
            profile.input.available_days
        ));
    }
    if profile.input.age > 50 && routine.intensity == Intensity::Baja {
        lines.push("✓ Intensidad baja recomendada por tu edad".to_string());
    }
    if matches!(profile.bmi_class, BmiClass::Sobrepeso | BmiClass::Obesidad)
        && routine.goal == Goal::Peso
    {
        lines.push("✓ Enfocada en pérdida de peso según tu IMC".to_string());
    }

    if lines.is_empty() {
        "Rutina compatible con tu perfil".to_string()
    } else {
        lines.join("\n")
    }
}
