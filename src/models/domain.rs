use serde::{Deserialize, Serialize};
use validator::Validate;

/// Skill-bearing participant (mentee or mentor) for matching purposes.
///
/// The id is caller-assigned and opaque. Skills are free-form tags; they may
/// be empty and may contain duplicates, which collapse under set semantics
/// during scoring.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillProfile {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A ranked match, produced fresh on every call. Score is in [0.0, 1.0];
/// ordering in the containing list is descending by score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "mentorId")]
    pub mentor_id: String,
    pub score: f64,
}

/// Free-text document (e.g. a mentor bio) for text-based matching
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Document {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub text: String,
}
