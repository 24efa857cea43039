use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The matching strategies the comparison engine understands.
///
/// The wire identifier (`average-hash`, ...) is shared by serde and strum so
/// the value sent in a request and the value parsed from a `<select>` agree.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MatchMethod {
    #[default]
    AverageHash,
    PerceptualHash,
    FeatureGeometric,
    EmbeddingSimilarity,
    AiJudgment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodFamily {
    Hash,
    Geometric,
    Embedding,
    Judgment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodHint {
    pub summary: &'static str,
    pub advantages: &'static str,
    pub drawbacks: &'static str,
}

impl MatchMethod {
    pub fn wire_name(self) -> &'static str {
        self.into()
    }

    pub fn family(self) -> MethodFamily {
        match self {
            MatchMethod::AverageHash | MatchMethod::PerceptualHash => MethodFamily::Hash,
            MatchMethod::FeatureGeometric => MethodFamily::Geometric,
            MatchMethod::EmbeddingSimilarity => MethodFamily::Embedding,
            MatchMethod::AiJudgment => MethodFamily::Judgment,
        }
    }

    pub fn default_threshold(self) -> f64 {
        match self {
            MatchMethod::AverageHash => 0.90,
            MatchMethod::PerceptualHash => 0.85,
            MatchMethod::FeatureGeometric => 0.04,
            MatchMethod::EmbeddingSimilarity => 0.30,
            MatchMethod::AiJudgment => 0.50,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            MatchMethod::AverageHash => "Average hash (aHash)",
            MatchMethod::PerceptualHash => "Perceptual hash (pHash)",
            MatchMethod::FeatureGeometric => "Feature matching (ORB + RANSAC)",
            MatchMethod::EmbeddingSimilarity => "Embedding similarity (CLIP ViT-B/32)",
            MatchMethod::AiJudgment => "AI judgment (Gemini)",
        }
    }

    /// How the engine reads the threshold for this method. Display only.
    pub fn threshold_semantics(self) -> &'static str {
        match self.family() {
            MethodFamily::Hash => "minimum similarity derived from hash distance",
            MethodFamily::Geometric => "minimum inlier-weighted similarity",
            MethodFamily::Embedding => "minimum cosine similarity",
            MethodFamily::Judgment => "minimum model score",
        }
    }

    pub fn hint(self) -> MethodHint {
        match self {
            MatchMethod::AverageHash => MethodHint {
                summary: "Shrinks each photo to a tiny grayscale grid and compares the bit patterns.",
                advantages: "Very fast; reliable for exact copies and resized duplicates.",
                drawbacks: "Misses crops, recolouring and photos of the same room from another angle.",
            },
            MatchMethod::PerceptualHash => MethodHint {
                summary: "Hashes the low-frequency DCT structure of each photo.",
                advantages: "Fast and more tolerant of compression, brightness and small edits than aHash.",
                drawbacks: "Still a near-duplicate detector; different shots of one scene rarely match.",
            },
            MatchMethod::FeatureGeometric => MethodHint {
                summary: "Finds ORB keypoints and verifies them with a RANSAC homography.",
                advantages: "Survives crops, rotation and partial overlap.",
                drawbacks: "Slow on large sets; scores are small numbers, so thresholds sit near 0.04.",
            },
            MatchMethod::EmbeddingSimilarity => MethodHint {
                summary: "Compares CLIP image embeddings by cosine similarity.",
                advantages: "Captures semantic content, so different shots of the same room can match.",
                drawbacks: "Needs a model on the server; similar-looking rooms of other hotels can match too.",
            },
            MatchMethod::AiJudgment => MethodHint {
                summary: "Asks a multimodal model whether paired photos show the same hotel.",
                advantages: "Returns a decision and a written reason instead of a bare score.",
                drawbacks: "Only the first few photos of each source are paired; slow and may be unavailable.",
            },
        }
    }
}
