use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Document, SkillProfile};

/// Request to rank mentors against a mentee by skill overlap
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankMatchesRequest {
    #[validate(nested)]
    pub mentee: SkillProfile,
    #[serde(default)]
    #[validate(nested)]
    pub mentors: Vec<SkillProfile>,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

/// Request to rank free-text documents (mentor bios) against a reference text
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TextMatchRequest {
    #[validate(length(min = 1))]
    pub reference: String,
    #[serde(default)]
    #[validate(nested)]
    pub documents: Vec<Document>,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    20
}
