// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Freelancer, Requirement, ScoredFreelancer, ScoreBreakdown, Ranking, RankingMode, ScoringWeights};
pub use requests::{RecommendRequest, ScoreRequest};
pub use responses::{RecommendResponse, ScoreResponse, HealthResponse, ErrorResponse};
