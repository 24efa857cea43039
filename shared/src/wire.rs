use serde::{Deserialize, Serialize};

use crate::method::MatchMethod;

/// Path of the single comparison endpoint.
pub const COMPARE_PATH: &str = "/api/compare";

/// Prefix under which the gateway serves image files by name.
pub const IMAGES_PATH: &str = "/images";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub source_a_id: String,
    pub source_b_id: String,
    pub threshold: f64,
    pub method: MatchMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResponse {
    pub source_a_count: u32,
    pub source_b_count: u32,
    pub total_comparisons: u32,
    pub threshold: f64,
    pub match_count: u32,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

impl ComparisonResponse {
    pub fn counts_agree(&self) -> bool {
        self.matches.len() == self.match_count as usize
    }
}

/// One matched pair as the engine reports it.
///
/// Every field is optional: which ones are present depends on the method, and
/// a record missing a field it should carry must still render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    #[serde(default, alias = "hashDistance", skip_serializing_if = "Option::is_none")]
    pub hash_distance: Option<i64>,
    #[serde(default, alias = "inlierCount", skip_serializing_if = "Option::is_none")]
    pub inlier_count: Option<u64>,
    #[serde(default, alias = "totalMatches", skip_serializing_if = "Option::is_none")]
    pub total_matches: Option<u64>,
    #[serde(default, alias = "inlierRatio", skip_serializing_if = "Option::is_none")]
    pub inlier_ratio: Option<f64>,
    #[serde(
        default,
        alias = "modelName",
        alias = "clip_model",
        skip_serializing_if = "Option::is_none"
    )]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, alias = "passedThreshold", skip_serializing_if = "Option::is_none")]
    pub passed_threshold: Option<bool>,
}

/// Body of every non-success response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
