// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Document, MatchResult, SkillProfile};
pub use requests::{RankMatchesRequest, TextMatchRequest};
pub use responses::{ErrorResponse, HealthResponse, RankMatchesResponse};
