//! Compatibility scoring and catalog helpers. All functions are pure.

use std::cmp::Ordering;

use crate::models::{CatalogStats, EvaluatedProfile, Goal, Intensity, Level, Routine};

/// Compatibility between a routine and an evaluated profile, 0–100.
///
/// Level match is worth 40, goal match 30, availability 20 (reduced by 5 per
/// missing day, floored at 0), intensity match 10.
pub fn compatibility(routine: &Routine, profile: &EvaluatedProfile) -> f64 {
    let mut score: i64 = 0;

    if routine.level == profile.level {
        score += 40;
    }

    if routine.goal == profile.goal {
        score += 30;
    }

    if routine.days_per_week <= profile.input.available_days {
        score += 20;
    } else {
        let excess = i64::from(routine.days_per_week) - i64::from(profile.input.available_days);
        score += (20 - excess * 5).max(0);
    }

    if routine.intensity == profile.intensity {
        score += 10;
    }

    score.min(100) as f64
}

/// Score every routine against the profile.
pub fn score_all(routines: Vec<Routine>, profile: &EvaluatedProfile) -> Vec<(Routine, f64)> {
    routines
        .into_iter()
        .map(|r| {
            let score = compatibility(&r, profile);
            (r, score)
        })
        .collect()
}

/// Sort scored routines from best to worst. The sort is stable, so catalog
/// order breaks ties.
pub fn rank(mut scored: Vec<(Routine, f64)>) -> Vec<(Routine, f64)> {
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored
}

/// Best routine for the profile, if the catalog is non-empty.
pub fn best(routines: Vec<Routine>, profile: &EvaluatedProfile) -> Option<(Routine, f64)> {
    rank(score_all(routines, profile)).into_iter().next()
}

/// Up to `limit` alternatives from an already ranked list, excluding the
/// chosen routine.
pub fn alternatives(
    ranked: &[(Routine, f64)],
    exclude_id: i64,
    limit: usize,
) -> Vec<(Routine, f64)> {
    ranked
        .iter()
        .filter(|(r, _)| r.id != exclude_id)
        .take(limit)
        .cloned()
        .collect()
}

/// Estimated calories burned over a session for a user of `weight_kg`.
pub fn estimated_calories(duration_minutes: u32, intensity: Intensity, weight_kg: f64) -> u32 {
    let per_minute = (intensity.calorie_factor() * 3.5 * weight_kg) / 200.0;
    (per_minute * f64::from(duration_minutes)) as u32
}

pub fn filter_by_level(routines: Vec<Routine>, level: Level) -> Vec<Routine> {
    routines.into_iter().filter(|r| r.level == level).collect()
}

pub fn filter_by_goal(routines: Vec<Routine>, goal: Goal) -> Vec<Routine> {
    routines.into_iter().filter(|r| r.goal == goal).collect()
}

pub fn filter_by_max_days(routines: Vec<Routine>, max_days: u8) -> Vec<Routine> {
    routines
        .into_iter()
        .filter(|r| r.days_per_week <= max_days)
        .collect()
}

/// Aggregate figures for a catalog listing, averages rounded to one decimal.
pub fn catalog_stats(routines: &[Routine]) -> CatalogStats {
    if routines.is_empty() {
        return CatalogStats {
            total: 0,
            avg_duration_minutes: 0.0,
            avg_days_per_week: 0.0,
        };
    }

    let total = routines.len();
    let duration_sum: f64 = routines.iter().map(|r| f64::from(r.duration_minutes)).sum();
    let days_sum: f64 = routines.iter().map(|r| f64::from(r.days_per_week)).sum();

    CatalogStats {
        total,
        avg_duration_minutes: round1(duration_sum / total as f64),
        avg_days_per_week: round1(days_sum / total as f64),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
