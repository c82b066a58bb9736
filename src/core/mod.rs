// Core algorithm exports
pub mod recommender;
pub mod scoring;
pub mod skills;

pub use recommender::{Recommender, rank_by_rating};
pub use scoring::calculate_recommendation_score;
pub use skills::{RequiredSkills, SkillMatch, normalize_skill, skills_overlap};
