use clap::Parser;
use std::path::PathBuf;

use rutania::core::db::{
    self, CatalogDb, RecommendationRepository, RoutineFilter, RoutineRepository,
};
use rutania::faq::default_faq;
use rutania::form::RecommendationForm;
use rutania::models::{Goal, Level, Recommendation, Routine};
use rutania::recommend::{RecommendationPipeline, scoring};
use tracing::warn;

#[derive(Parser)]
#[command(name = "rutania")]
#[command(about = "Recomendador de rutinas deportivas basado en reglas")]
struct Cli {
    /// Edad en años
    #[arg(long, value_name = "AÑOS")]
    edad: Option<String>,

    /// Peso en kilogramos
    #[arg(long, value_name = "KG")]
    peso: Option<String>,

    /// Altura en metros
    #[arg(long, value_name = "METROS")]
    altura: Option<String>,

    /// Días disponibles para entrenar por semana
    #[arg(long, value_name = "DIAS")]
    dias_disponibles: Option<String>,

    /// Objetivo: peso, musculacion o mantenimiento
    #[arg(long, value_name = "OBJETIVO")]
    objetivo: Option<String>,

    /// Catálogo SQLite persistente (por defecto se usa el catálogo integrado)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Lista el catálogo en lugar de recomendar
    #[arg(long)]
    list: bool,

    /// Filtro de nivel para --list
    #[arg(long, value_name = "NIVEL")]
    nivel: Option<String>,

    /// Filtro de días máximos para --list
    #[arg(long, value_name = "DIAS")]
    dias_max: Option<u8>,

    /// Muestra las preguntas frecuentes
    #[arg(long)]
    faq: bool,

    /// Carga las rutinas integradas en el catálogo y termina
    #[arg(long)]
    cargar_rutinas: bool,

    /// Actualiza rutinas existentes al cargar
    #[arg(long)]
    actualizar: bool,

    /// Número máximo de rutinas alternativas
    #[arg(long, default_value_t = 3)]
    alternativas: usize,

    /// Salida detallada
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    if args.faq {
        print_faq();
        return Ok(());
    }

    let catalog = match &args.catalog {
        Some(path) => Some(CatalogDb::new(path).await?),
        None => None,
    };

    if args.cargar_rutinas {
        let Some(catalog) = &catalog else {
            anyhow::bail!("--cargar-rutinas requiere --catalog");
        };
        println!("Cargando rutinas en la base de datos...");
        let report = db::load_builtin_routines(catalog, args.actualizar).await?;
        println!(
            "✓ Proceso completado: {} rutinas creadas, {} actualizadas",
            report.created, report.updated
        );
        let total = catalog.get_routines(&RoutineFilter::default()).await?.len();
        println!("Total de rutinas activas: {}", total);
        return Ok(());
    }

    let routines = load_routines(catalog.as_ref()).await?;

    if args.list {
        return list_routines(routines, &args);
    }

    // Raw snapshot of the field values; the validator owns all checks.
    let form = RecommendationForm {
        edad: args.edad.clone().unwrap_or_default(),
        peso: args.peso.clone().unwrap_or_default(),
        altura: args.altura.clone().unwrap_or_default(),
        dias_disponibles: args.dias_disponibles.clone().unwrap_or_default(),
        objetivo: args.objetivo.clone().unwrap_or_default(),
    };
    let input = match form.validate() {
        Ok(input) => input,
        Err(err) => {
            println!("{}", err.message());
            std::process::exit(1);
        }
    };

    let engine = RecommendationPipeline::new()
        .with_verbose(args.verbose)
        .with_alternatives_limit(args.alternativas);
    let recommendation = engine.recommend(&input, routines)?;

    print_recommendation(&recommendation);

    if let Some(catalog) = &catalog {
        let stored = catalog.record_recommendation(&recommendation).await?;
        if args.verbose {
            println!("\nRecomendación registrada con id {}", stored.id);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "rutania=debug" } else { "rutania=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Active routines from the persistent catalog, or the built-in set.
/// An empty catalog is seeded automatically, like the original loader.
async fn load_routines(catalog: Option<&CatalogDb>) -> anyhow::Result<Vec<Routine>> {
    let Some(catalog) = catalog else {
        return Ok(db::builtin_catalog());
    };

    let mut routines = catalog.get_routines(&RoutineFilter::default()).await?;
    if routines.is_empty() {
        warn!("catálogo sin rutinas, cargando rutinas integradas");
        db::load_builtin_routines(catalog, false).await?;
        routines = catalog.get_routines(&RoutineFilter::default()).await?;
    }
    Ok(routines)
}

fn list_routines(mut routines: Vec<Routine>, args: &Cli) -> anyhow::Result<()> {
    if let Some(nivel) = &args.nivel {
        let level = Level::try_from(nivel.as_str())?;
        routines = scoring::filter_by_level(routines, level);
    }
    if let Some(objetivo) = &args.objetivo {
        let goal = Goal::try_from(objetivo.as_str())?;
        routines = scoring::filter_by_goal(routines, goal);
    }
    if let Some(max_days) = args.dias_max {
        routines = scoring::filter_by_max_days(routines, max_days);
    }

    println!("=== Catálogo de Rutinas ===");
    for routine in &routines {
        println!(
            "  {}. {} [{} / {}] {} días, {} min, intensidad {}",
            routine.id,
            routine.name,
            routine.level,
            routine.goal,
            routine.days_per_week,
            routine.duration_minutes,
            routine.intensity
        );
    }

    let stats = scoring::catalog_stats(&routines);
    println!(
        "\nTotal: {} rutinas | Duración promedio: {:.1} min | Días promedio: {:.1}",
        stats.total, stats.avg_duration_minutes, stats.avg_days_per_week
    );
    Ok(())
}

fn print_faq() {
    println!("=== Preguntas Frecuentes ===");
    for item in default_faq() {
        println!("\n{}", item.question);
        println!("  {}", item.answer);
    }
}

fn print_recommendation(recommendation: &Recommendation) {
    let routine = &recommendation.routine;
    let profile = &recommendation.profile;

    println!("\n=== Recomendación de Rutina ===");
    println!(
        "Rutina recomendada: {} (compatibilidad: {:.1})",
        routine.name, recommendation.score
    );
    println!(
        "Nivel: {} | Objetivo: {} | Intensidad: {}",
        routine.level, routine.goal, routine.intensity
    );
    println!(
        "Duración: {} min, {} días por semana",
        routine.duration_minutes, routine.days_per_week
    );
    println!(
        "Calorías estimadas por sesión: {}",
        recommendation.estimated_calories
    );

    println!("\nIMC: {:.1} ({})", profile.bmi, profile.bmi_class.label());
    println!("Seguridad: {}", recommendation.safety.reason);

    println!("\nExplicación:");
    println!("{}", recommendation.explanation);

    if !profile.precautions.is_empty() {
        println!("\nPrecauciones:");
        for precaution in &profile.precautions {
            println!("  ⚠ {}", precaution);
        }
    }

    if !recommendation.alternatives.is_empty() {
        println!("\n=== Rutinas Alternativas ===");
        for (i, (routine, score)) in recommendation.alternatives.iter().enumerate() {
            println!(
                "  {}. {} (compatibilidad: {:.1})",
                i + 1,
                routine.name,
                score
            );
        }
    }
}
