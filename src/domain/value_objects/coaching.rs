//! Aggregate usage statistics consumed by the coach operation

use serde::{Deserialize, Serialize};

/// Usage statistics summarizing a user's recent output.
///
/// Assembled from the thread and analytics repositories; the coach prompt
/// interpolates these values verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingStats {
    pub thread_count: u64,
    /// (likes + replies + retweets) / impressions * 100, 0 when no impressions
    pub avg_engagement_rate: f64,
    /// Most recent thread topics, newest first
    pub recent_topics: Vec<String>,
}

/// Aggregate analytics totals across all of a user's threads
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_impressions: u64,
    pub total_likes: u64,
    pub total_replies: u64,
    pub total_retweets: u64,
    pub total_profile_clicks: u64,
    pub engagement_rate: f64,
}

impl AnalyticsSummary {
    /// Engagement rate over raw totals; guards the zero-impressions case
    pub fn compute_engagement_rate(
        impressions: u64,
        likes: u64,
        replies: u64,
        retweets: u64,
    ) -> f64 {
        if impressions == 0 {
            return 0.0;
        }
        (likes + replies + retweets) as f64 / impressions as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_rate() {
        let rate = AnalyticsSummary::compute_engagement_rate(1000, 30, 10, 10);
        assert!((rate - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_engagement_rate_no_impressions() {
        assert_eq!(AnalyticsSummary::compute_engagement_rate(0, 5, 5, 5), 0.0);
    }
}
