use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::MatchingSettings;

/// Request to rank candidates for a user
///
/// Threshold and limit are optional on the wire; absent values resolve
/// against the configured [`MatchingSettings`] so wire defaults and
/// configuration cannot diverge.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    /// Minimum overall score (0-100) a candidate must reach to be returned
    #[validate(range(max = 100))]
    #[serde(default)]
    #[serde(alias = "min_threshold", rename = "minThreshold")]
    pub min_threshold: Option<u8>,
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: u32,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

fn default_page() -> u32 {
    1
}

impl RankRequest {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            min_threshold: None,
            page: default_page(),
            limit: None,
        }
    }

    /// Threshold to rank with: the request's own, or the configured default
    pub fn threshold_or(&self, matching: &MatchingSettings) -> u8 {
        self.min_threshold.unwrap_or(matching.min_threshold)
    }

    /// Page size to use: the request's own (or the configured default),
    /// capped at the configured maximum
    pub fn limit_or(&self, matching: &MatchingSettings) -> u16 {
        self.limit
            .unwrap_or(matching.default_limit)
            .min(matching.max_limit)
    }
}
