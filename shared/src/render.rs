//! Turns a comparison response into view data.
//!
//! Everything here is pure: the same response and method always produce the
//! same summary and cards. Records missing fields degrade to placeholders and
//! a warning in the log; rendering never fails.

use derive_more::Display;

use crate::evidence::MatchEvidence;
use crate::method::MatchMethod;
use crate::wire::{ComparisonResponse, IMAGES_PATH, MatchRecord};

pub const NO_MATCHES_GUIDANCE: &str = "No matching images found. Try lowering the threshold.";
pub const NOT_AVAILABLE: &str = "N/A";
pub const EMPTY_REASON: &str = "-";
pub const MISSING_IMAGE_LABEL: &str = "no image selected";

/// A ratio in `[0, 1]` shown as a percentage with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
#[display(fmt = "{:.2}%", _0)]
pub struct Percent(f64);

impl Percent {
    pub fn from_ratio(ratio: f64) -> Self {
        Percent(ratio * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResults {
    pub summary: SummaryView,
    pub body: ResultsBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub method_name: &'static str,
    pub source_a_count: u32,
    pub source_b_count: u32,
    pub total_comparisons: u32,
    pub threshold_text: String,
    pub match_count: u32,
}

impl SummaryView {
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Matching method", self.method_name.to_string()),
            ("Source A images", self.source_a_count.to_string()),
            ("Source B images", self.source_b_count.to_string()),
            ("Total comparisons", self.total_comparisons.to_string()),
            ("Similarity threshold", self.threshold_text.clone()),
            ("Matched pairs", self.match_count.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsBody {
    Empty(&'static str),
    Cards(Vec<MatchCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    /// 1-based position in the response.
    pub index: usize,
    pub headline: String,
    pub left: ImageCell,
    pub right: ImageCell,
    pub detail: CardDetail,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardDetail {
    Similarity {
        similarity_text: String,
        detail: Option<String>,
    },
    Judgment {
        decision_label: &'static str,
        score_text: String,
        reason_lines: Vec<String>,
        below_threshold: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageCell {
    Present { name: String, url: String },
    Missing { label: &'static str },
}

impl ImageCell {
    fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => ImageCell::Present {
                name: name.to_string(),
                url: format!("{}/{}", IMAGES_PATH, urlencoding::encode(name)),
            },
            None => ImageCell::Missing {
                label: MISSING_IMAGE_LABEL,
            },
        }
    }
}

pub fn render(response: &ComparisonResponse, method: MatchMethod) -> RenderedResults {
    if !response.counts_agree() {
        log::warn!(
            "match_count {} disagrees with {} match records",
            response.match_count,
            response.matches.len()
        );
    }

    let summary = SummaryView {
        method_name: method.display_name(),
        source_a_count: response.source_a_count,
        source_b_count: response.source_b_count,
        total_comparisons: response.total_comparisons,
        threshold_text: format!("{:.2}", response.threshold),
        match_count: response.match_count,
    };

    let body = if response.matches.is_empty() {
        ResultsBody::Empty(NO_MATCHES_GUIDANCE)
    } else {
        ResultsBody::Cards(
            response
                .matches
                .iter()
                .enumerate()
                .map(|(i, record)| render_card(i + 1, record, method))
                .collect(),
        )
    };

    RenderedResults { summary, body }
}

fn render_card(index: usize, record: &MatchRecord, method: MatchMethod) -> MatchCard {
    let left = ImageCell::from_name(record.image1.as_deref());
    let right = ImageCell::from_name(record.image2.as_deref());
    let evidence = MatchEvidence::interpret(record, method);

    if !matches!(evidence, MatchEvidence::Judgment { .. })
        && (record.image1.is_none() || record.image2.is_none())
    {
        log::warn!("match #{} for {} is missing an image reference", index, method);
    }

    let detail = match evidence {
        MatchEvidence::Judgment {
            decision,
            score,
            reason,
            passed_threshold,
        } => CardDetail::Judgment {
            decision_label: decision.label(),
            score_text: percent_or_na(score),
            reason_lines: reason_lines(reason.as_deref()),
            below_threshold: passed_threshold == Some(false),
        },
        ref other => CardDetail::Similarity {
            similarity_text: percent_or_na(record.similarity),
            detail: similarity_suffix(other),
        },
    };

    let headline = match &detail {
        CardDetail::Similarity {
            similarity_text,
            detail: Some(suffix),
        } => format!("#{} - similarity: {} ({})", index, similarity_text, suffix),
        CardDetail::Similarity {
            similarity_text, ..
        } => format!("#{} - similarity: {}", index, similarity_text),
        CardDetail::Judgment {
            decision_label,
            score_text,
            ..
        } => format!("#{} - {} (score: {})", index, decision_label, score_text),
    };

    MatchCard {
        index,
        headline,
        left,
        right,
        detail,
    }
}

fn similarity_suffix(evidence: &MatchEvidence) -> Option<String> {
    match evidence {
        MatchEvidence::Hash { distance } => match distance {
            Some(d) => Some(format!("hash distance: {}", d)),
            None => {
                log::warn!("hash match without hash_distance");
                None
            }
        },
        MatchEvidence::Geometric { inliers, total, .. } => match (inliers, total) {
            (Some(inliers), Some(total)) => {
                let pct = evidence
                    .inlier_ratio()
                    .map(|r| format!("{:.1}%", r * 100.0))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string());
                Some(format!("inliers: {}/{} ({})", inliers, total, pct))
            }
            _ => {
                log::warn!("feature match without inlier counts");
                None
            }
        },
        MatchEvidence::Embedding { model } => model.as_ref().map(|m| format!("model: {}", m)),
        MatchEvidence::Judgment { .. } => None,
    }
}

fn percent_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => Percent::from_ratio(v).to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn reason_lines(reason: Option<&str>) -> Vec<String> {
    match reason.map(str::trim).filter(|r| !r.is_empty()) {
        Some(reason) => reason.lines().map(str::to_string).collect(),
        None => vec![EMPTY_REASON.to_string()],
    }
}
