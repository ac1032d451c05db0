//! Codecs for the JSON-encoded catalog columns.

use crate::models::PlanEntry;

pub(super) fn exercises_to_json(exercises: &[String]) -> anyhow::Result<String> {
    Ok(serde_json::to_string(exercises)?)
}

pub(super) fn exercises_from_json(raw: &str) -> anyhow::Result<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}

pub(super) fn plan_to_json(plan: &[PlanEntry]) -> anyhow::Result<String> {
    Ok(serde_json::to_string(plan)?)
}

pub(super) fn plan_from_json(raw: &str) -> anyhow::Result<Vec<PlanEntry>> {
    Ok(serde_json::from_str(raw)?)
}
