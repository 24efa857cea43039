use crate::method::{MatchMethod, MethodFamily};
use crate::wire::MatchRecord;

/// Verdict vocabulary of the AI judgment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Same,
    Different,
    Uncertain,
}

impl Decision {
    /// Anything outside the vocabulary, including no value, is `Uncertain`.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("same") => Decision::Same,
            Some("different") => Decision::Different,
            _ => Decision::Uncertain,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Decision::Same => "match",
            Decision::Different => "no match",
            Decision::Uncertain => "undetermined",
        }
    }
}

/// A record read under the method that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchEvidence {
    Hash {
        distance: Option<i64>,
    },
    Geometric {
        inliers: Option<u64>,
        total: Option<u64>,
        ratio: Option<f64>,
    },
    Embedding {
        model: Option<String>,
    },
    Judgment {
        decision: Decision,
        score: Option<f64>,
        reason: Option<String>,
        passed_threshold: Option<bool>,
    },
}

impl MatchEvidence {
    pub fn interpret(record: &MatchRecord, method: MatchMethod) -> Self {
        if let Some(tag) = record.method.as_deref() {
            if tag != method.wire_name() {
                log::warn!(
                    "record tagged {:?} rendered as {}; trusting the request method",
                    tag,
                    method
                );
            }
        }

        match method.family() {
            MethodFamily::Hash => MatchEvidence::Hash {
                distance: record.hash_distance,
            },
            MethodFamily::Geometric => MatchEvidence::Geometric {
                inliers: record.inlier_count,
                total: record.total_matches,
                ratio: record.inlier_ratio,
            },
            MethodFamily::Embedding => MatchEvidence::Embedding {
                model: record
                    .model_name
                    .clone()
                    .filter(|name| !name.trim().is_empty()),
            },
            MethodFamily::Judgment => MatchEvidence::Judgment {
                decision: Decision::from_wire(record.decision.as_deref()),
                score: record.similarity,
                reason: record.reason.clone(),
                passed_threshold: record.passed_threshold,
            },
        }
    }

    /// Inlier share for geometric evidence, preferring the engine's own ratio.
    pub fn inlier_ratio(&self) -> Option<f64> {
        match *self {
            MatchEvidence::Geometric {
                ratio: Some(ratio), ..
            } => Some(ratio),
            MatchEvidence::Geometric {
                inliers: Some(inliers),
                total: Some(total),
                ..
            } if total > 0 => Some(inliers as f64 / total as f64),
            _ => None,
        }
    }
}
