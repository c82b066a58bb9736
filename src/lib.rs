//! Freelance Recommender - freelancer ranking service for the marketplace dashboards
//!
//! This library provides the recommendation scorer used by the client dashboard.
//! Freelancers are either sorted by rating or scored against a job post's
//! required skills, filtered by a minimum score and ranked.

pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{Recommender, RequiredSkills, rank_by_rating};
pub use models::{Freelancer, Requirement, Ranking, RankingMode, ScoredFreelancer, ScoreBreakdown, ScoringWeights};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let ranking = Recommender::default().rank(&[Freelancer::new("f1")], None);
        assert_eq!(ranking.mode(), RankingMode::Rating);
    }
}
