//! Mentor Algo - Skill-based mentor matching service for the MentorLink platform
//!
//! This library provides the core matching algorithms used to pair mentees
//! with mentors: Intersection-over-Union ranking over declared skill tags,
//! and a bag-of-words cosine-similarity pipeline for free-text bios.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{build_vocabulary, cosine_similarity, jaccard_similarity, rank, vectorize, TextMatchError, Tokenizer};
pub use models::{Document, MatchResult, RankMatchesRequest, RankMatchesResponse, SkillProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let mentee = SkillProfile {
            id: "m1".to_string(),
            skills: vec!["rust".to_string()],
        };
        let results = rank(&mentee, &[]);
        assert!(results.is_empty());
    }
}
