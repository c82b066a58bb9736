use crate::core::scoring::{calculate_recommendation_score, DEFAULT_EXPERIENCE_CAP};
use crate::core::skills::RequiredSkills;
use crate::models::{Freelancer, Ranking, Requirement, ScoreBreakdown, ScoredFreelancer, ScoringWeights};

pub const DEFAULT_MIN_SCORE: u32 = 30;

/// Ranks freelancers for the client dashboard
///
/// # Modes
/// 1. No requirements (or no usable required skills): sort by rating
/// 2. Required skills: score, drop scores at or below `min_score`, sort by score
///
/// Both sorts are stable, so ties keep their input order. The input slice is
/// never modified.
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
    min_score: u32,
    experience_cap: u32,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            min_score: DEFAULT_MIN_SCORE,
            experience_cap: DEFAULT_EXPERIENCE_CAP,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    /// Scores must be strictly greater than this to be recommended
    pub fn with_min_score(mut self, min_score: u32) -> Self {
        self.min_score = min_score;
        self
    }

    /// Number of completed projects at which experience stops counting
    pub fn with_experience_cap(mut self, projects: u32) -> Self {
        self.experience_cap = projects;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn min_score(&self) -> u32 {
        self.min_score
    }

    /// Rank freelancers, optionally against a job post's requirements
    pub fn rank(&self, freelancers: &[Freelancer], requirements: Option<&Requirement>) -> Ranking {
        match requirements.and_then(RequiredSkills::from_requirement) {
            Some(required) => Ranking::Skills(self.rank_by_skills(freelancers, &required)),
            None => Ranking::Rating(rank_by_rating(freelancers)),
        }
    }

    /// Score, filter and sort freelancers against required skills
    pub fn rank_by_skills(
        &self,
        freelancers: &[Freelancer],
        required: &RequiredSkills,
    ) -> Vec<ScoredFreelancer> {
        let mut scored: Vec<ScoredFreelancer> = freelancers
            .iter()
            .filter_map(|freelancer| {
                let breakdown = self.score(freelancer, required);

                if self.passes(&breakdown) {
                    Some(ScoredFreelancer {
                        freelancer: freelancer.without_annotations(),
                        recommendation_score: breakdown.recommendation_score,
                        skill_match_count: breakdown.skill_match_count,
                        total_required_skills: breakdown.total_required_skills,
                        matched_skills: breakdown.matched_skills,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable: equal scores keep input order
        scored.sort_by(|a, b| b.recommendation_score.cmp(&a.recommendation_score));

        tracing::debug!(
            "Scored {} freelancers against {} required skills, {} recommended",
            freelancers.len(),
            required.len(),
            scored.len()
        );

        scored
    }

    /// Score a single freelancer without filtering
    pub fn score(&self, freelancer: &Freelancer, required: &RequiredSkills) -> ScoreBreakdown {
        calculate_recommendation_score(freelancer, required, &self.weights, self.experience_cap)
    }

    pub fn passes(&self, breakdown: &ScoreBreakdown) -> bool {
        breakdown.recommendation_score > self.min_score
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Sort freelancers by rating, highest first, keeping input order for ties
///
/// A NaN rating sorts as 0. Stale score annotations are stripped.
pub fn rank_by_rating(freelancers: &[Freelancer]) -> Vec<Freelancer> {
    let mut ranked: Vec<Freelancer> = freelancers
        .iter()
        .map(Freelancer::without_annotations)
        .collect();
    ranked.sort_by(|a, b| rating_key(b.rating).total_cmp(&rating_key(a.rating)));
    ranked
}

#[inline]
fn rating_key(rating: f64) -> f64 {
    // -0.0 folds into 0.0 so total_cmp keeps them tied
    if rating.is_nan() || rating == 0.0 {
        0.0
    } else {
        rating
    }
}
