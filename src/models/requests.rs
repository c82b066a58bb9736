use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Freelancer, Requirement};

/// Request to rank a list of freelancers
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[validate(nested)]
    pub freelancers: Vec<Freelancer>,
    #[serde(default)]
    pub requirements: Option<Requirement>,
    #[serde(default)]
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<usize>,
}

/// Request to explain the score of a single freelancer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[validate(nested)]
    pub freelancer: Freelancer,
    #[serde(default)]
    pub required_skills: Vec<String>,
}
