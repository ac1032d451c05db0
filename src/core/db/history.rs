use std::future::Future;

use time::OffsetDateTime;

use crate::models::{BmiClass, Goal, Recommendation};

/// A recommendation as persisted in the catalog, including the profile
/// snapshot it was produced for.
#[derive(Debug, Clone)]
pub struct StoredRecommendation {
    pub id: i64,
    pub routine_id: i64,
    pub score: f64,
    pub safe: bool,
    pub safety_reason: String,
    pub explanation: String,
    pub precautions: String,
    pub age: u32,
    pub weight_kg: f64,
    pub height_m: f64,
    pub available_days: u8,
    pub goal: Goal,
    pub bmi: f64,
    pub bmi_class: BmiClass,
    pub created_at: OffsetDateTime,
}

pub trait RecommendationRepository {
    fn record_recommendation(
        &self,
        recommendation: &Recommendation,
    ) -> impl Future<Output = anyhow::Result<StoredRecommendation>>;
    fn recent_recommendations(
        &self,
        limit: u32,
    ) -> impl Future<Output = anyhow::Result<Vec<StoredRecommendation>>>;
}
