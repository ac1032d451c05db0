//! Create and seed a catalog file, then list its contents.
//!
//! Run with: cargo run --example seed_catalog -- rutinas.db

use std::path::PathBuf;

use anyhow::Result;

use rutania::core::db::{CatalogDb, RoutineFilter, RoutineRepository, load_builtin_routines};

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("rutinas.db"));

    let catalog = CatalogDb::new(&path).await?;
    let report = load_builtin_routines(&catalog, false).await?;
    println!(
        "Rutinas creadas: {}, actualizadas: {}, existentes: {}",
        report.created, report.updated, report.skipped
    );

    for routine in catalog.get_routines(&RoutineFilter::default()).await? {
        println!(
            "  {}. {} [{} / {}] {} días",
            routine.id, routine.name, routine.level, routine.goal, routine.days_per_week
        );
    }

    catalog.close().await?;
    Ok(())
}
