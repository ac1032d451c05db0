//! Built-in routine catalog and catalog seeding.

use tracing::info;

use crate::core::db::routine::{NewRoutine, RoutineRepository, RoutineUpdate};
use crate::core::db::CatalogDb;
use crate::models::{Goal, Intensity, Level, PlanEntry, Routine};

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
}

/// Seed-time calorie estimate for an average 70 kg user, per hour of
/// training at the routine's intensity.
fn seed_calories(duration_minutes: u32, intensity: Intensity) -> u32 {
    let per_hour_factor = match intensity {
        Intensity::Alta => 10.0,
        Intensity::Media => 7.0,
        Intensity::Baja => 5.0,
    };
    ((f64::from(duration_minutes) / 60.0) * 70.0 * per_hour_factor) as u32
}

fn routine(
    name: &str,
    description: &str,
    level: Level,
    goal: Goal,
    days_per_week: u8,
    duration_minutes: u32,
    intensity: Intensity,
    exercises: &[&str],
    weekly_plan: &[(&str, &str)],
) -> NewRoutine {
    NewRoutine {
        name: name.to_string(),
        description: description.to_string(),
        level,
        goal,
        days_per_week,
        duration_minutes,
        intensity,
        exercises: exercises.iter().map(|e| e.to_string()).collect(),
        weekly_plan: weekly_plan
            .iter()
            .map(|(day, activity)| PlanEntry::new(*day, *activity))
            .collect(),
        estimated_calories: seed_calories(duration_minutes, intensity),
    }
}

/// The built-in routines shipped with the tool.
pub fn builtin_routines() -> Vec<NewRoutine> {
    vec![
        routine(
            "Cardio Suave",
            "Rutina de bajo impacto ideal para principiantes o personas mayores. \
             Enfocada en mejorar la salud cardiovascular sin estrés excesivo en \
             las articulaciones.",
            Level::Principiante,
            Goal::Mantenimiento,
            3,
            30,
            Intensity::Baja,
            &[
                "Caminata rápida (15 min)",
                "Bicicleta estática (10 min)",
                "Estiramientos (5 min)",
            ],
            &[
                ("Lunes", "Caminata 30 min"),
                ("Miércoles", "Bicicleta estática 30 min"),
                ("Viernes", "Caminata + estiramientos 30 min"),
            ],
        ),
        routine(
            "Pérdida de Peso Intensiva",
            "Programa de alta intensidad combinando cardio y entrenamiento de \
             fuerza para maximizar la quema de calorías y acelerar la pérdida \
             de peso.",
            Level::Intermedio,
            Goal::Peso,
            5,
            45,
            Intensity::Alta,
            &[
                "HIIT (20 min)",
                "Burpees (5 min)",
                "Saltos de cuerda (10 min)",
                "Plancha (5 min)",
                "Estiramientos (5 min)",
            ],
            &[
                ("Lunes", "HIIT + Burpees"),
                ("Martes", "Saltos de cuerda + Plancha"),
                ("Miércoles", "HIIT completo"),
                ("Jueves", "Descanso activo (caminata)"),
                ("Viernes", "HIIT + Saltos"),
                ("Sábado", "Circuito completo"),
                ("Domingo", "Descanso"),
            ],
        ),
        routine(
            "Musculación Avanzada",
            "Rutina de entrenamiento de resistencia diseñada para desarrollo \
             muscular avanzado con división de grupos musculares.",
            Level::Avanzado,
            Goal::Musculacion,
            5,
            60,
            Intensity::Alta,
            &[
                "Press de banca (4 series x 8-10 reps)",
                "Sentadillas (4 series x 8-10 reps)",
                "Peso muerto (4 series x 6-8 reps)",
                "Dominadas (4 series x max reps)",
                "Press militar (3 series x 10 reps)",
            ],
            &[
                ("Lunes", "Pecho y tríceps"),
                ("Martes", "Espalda y bíceps"),
                ("Miércoles", "Piernas"),
                ("Jueves", "Descanso"),
                ("Viernes", "Hombros y abdomen"),
                ("Sábado", "Brazos completo"),
                ("Domingo", "Descanso"),
            ],
        ),
        routine(
            "Tonificación Femenina",
            "Programa de tonificación muscular con enfoque en glúteos, piernas \
             y core. Combina pesas ligeras con ejercicios funcionales.",
            Level::Intermedio,
            Goal::Musculacion,
            4,
            40,
            Intensity::Media,
            &[
                "Sentadillas sumo (3 series x 15 reps)",
                "Peso muerto rumano (3 series x 12 reps)",
                "Hip thrust (3 series x 15 reps)",
                "Plancha lateral (3 series x 30 seg)",
                "Curl de bíceps (3 series x 12 reps)",
            ],
            &[
                ("Lunes", "Glúteos y piernas"),
                ("Martes", "Core y brazos"),
                ("Jueves", "Piernas completo"),
                ("Sábado", "Cuerpo completo"),
            ],
        ),
        routine(
            "Cardio Moderado",
            "Entrenamiento cardiovascular de intensidad moderada perfecto para \
             mejorar la resistencia y quemar calorías de forma sostenible.",
            Level::Intermedio,
            Goal::Peso,
            4,
            40,
            Intensity::Media,
            &[
                "Correr (20 min)",
                "Ciclismo (15 min)",
                "Remo (5 min)",
                "Estiramientos dinámicos (5 min)",
            ],
            &[
                ("Lunes", "Correr 40 min"),
                ("Miércoles", "Ciclismo 40 min"),
                ("Viernes", "Correr + Remo"),
                ("Domingo", "Ciclismo suave"),
            ],
        ),
        routine(
            "Fitness General",
            "Programa equilibrado que combina cardio, fuerza y flexibilidad \
             para mantener una buena condición física general.",
            Level::Principiante,
            Goal::Mantenimiento,
            3,
            35,
            Intensity::Baja,
            &[
                "Caminata (15 min)",
                "Ejercicios con peso corporal (15 min)",
                "Yoga o estiramientos (10 min)",
            ],
            &[
                ("Lunes", "Cardio + Flexibilidad"),
                ("Miércoles", "Fuerza corporal"),
                ("Viernes", "Combinación completa"),
            ],
        ),
        routine(
            "Entrenamiento Funcional",
            "Rutina de movimientos funcionales que mejoran la fuerza, \
             equilibrio y coordinación para actividades diarias.",
            Level::Intermedio,
            Goal::Mantenimiento,
            4,
            45,
            Intensity::Media,
            &[
                "Kettlebell swings (3 series x 15 reps)",
                "Box jumps (3 series x 10 reps)",
                "Turkish get-ups (2 series x 5 reps)",
                "Farmer walks (3 series x 30 seg)",
                "Battle ropes (3 series x 30 seg)",
            ],
            &[
                ("Lunes", "Fuerza funcional"),
                ("Martes", "Cardio funcional"),
                ("Jueves", "Potencia y explosividad"),
                ("Sábado", "Circuito completo"),
            ],
        ),
        routine(
            "CrossFit para Principiantes",
            "Introducción al entrenamiento de alta intensidad con movimientos \
             funcionales variados. Versión adaptada para principiantes.",
            Level::Principiante,
            Goal::Musculacion,
            3,
            30,
            Intensity::Media,
            &[
                "Air squats (3 series x 15 reps)",
                "Push-ups modificados (3 series x 10 reps)",
                "Sit-ups (3 series x 15 reps)",
                "Jumping jacks (3 series x 20 reps)",
                "Mountain climbers (3 series x 10 reps)",
            ],
            &[
                ("Lunes", "WOD básico A"),
                ("Miércoles", "WOD básico B"),
                ("Viernes", "WOD básico C"),
            ],
        ),
        routine(
            "Yoga y Movilidad",
            "Programa centrado en flexibilidad, movilidad articular y \
             fortalecimiento del core mediante posturas de yoga.",
            Level::Principiante,
            Goal::Mantenimiento,
            3,
            40,
            Intensity::Baja,
            &[
                "Saludo al sol (5 repeticiones)",
                "Posturas de equilibrio (10 min)",
                "Estiramientos profundos (15 min)",
                "Respiración y meditación (10 min)",
            ],
            &[
                ("Lunes", "Yoga matutino"),
                ("Miércoles", "Movilidad y equilibrio"),
                ("Viernes", "Yoga restaurativo"),
            ],
        ),
        routine(
            "Definición Muscular",
            "Programa avanzado que combina entrenamiento de resistencia con \
             cardio para reducir grasa corporal manteniendo masa muscular.",
            Level::Avanzado,
            Goal::Peso,
            6,
            50,
            Intensity::Alta,
            &[
                "Superseries de pesas (25 min)",
                "Cardio HIIT (15 min)",
                "Core intensivo (10 min)",
                "Estiramientos (5 min)",
            ],
            &[
                ("Lunes", "Pecho + HIIT"),
                ("Martes", "Espalda + HIIT"),
                ("Miércoles", "Piernas + Core"),
                ("Jueves", "Hombros + HIIT"),
                ("Viernes", "Brazos + Core"),
                ("Sábado", "Full body + Cardio"),
                ("Domingo", "Descanso activo"),
            ],
        ),
    ]
}

/// The built-in routines materialized as an in-memory catalog, for running
/// without a catalog file.
pub fn builtin_catalog() -> Vec<Routine> {
    builtin_routines()
        .into_iter()
        .enumerate()
        .map(|(idx, r)| Routine {
            id: idx as i64 + 1,
            name: r.name,
            description: r.description,
            level: r.level,
            goal: r.goal,
            days_per_week: r.days_per_week,
            duration_minutes: r.duration_minutes,
            intensity: r.intensity,
            exercises: r.exercises,
            weekly_plan: r.weekly_plan,
            estimated_calories: r.estimated_calories,
            active: true,
        })
        .collect()
}

/// Load the built-in routines into a catalog. Existing routines (matched by
/// name) are skipped, or refreshed when `update_existing` is set.
pub async fn load_builtin_routines(
    db: &CatalogDb,
    update_existing: bool,
) -> anyhow::Result<SeedReport> {
    let mut report = SeedReport::default();

    for new_routine in builtin_routines() {
        match db.get_routine_by_name(&new_routine.name).await? {
            None => {
                db.add_routine(&new_routine).await?;
                report.created += 1;
            }
            Some(existing) if update_existing => {
                let update = RoutineUpdate {
                    description: Some(new_routine.description),
                    level: Some(new_routine.level),
                    goal: Some(new_routine.goal),
                    days_per_week: Some(new_routine.days_per_week),
                    duration_minutes: Some(new_routine.duration_minutes),
                    intensity: Some(new_routine.intensity),
                    exercises: Some(new_routine.exercises),
                    weekly_plan: Some(new_routine.weekly_plan),
                    estimated_calories: Some(new_routine.estimated_calories),
                    active: Some(true),
                    ..RoutineUpdate::default()
                };
                db.update_routine(&existing, &update).await?;
                report.updated += 1;
            }
            Some(_) => {
                report.skipped += 1;
            }
        }
    }

    info!(
        created = report.created,
        updated = report.updated,
        skipped = report.skipped,
        "catalog seeded"
    );

    Ok(report)
}
