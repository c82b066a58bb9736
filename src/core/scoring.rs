use crate::core::skills::RequiredSkills;
use crate::models::{Freelancer, ScoreBreakdown, ScoringWeights};

pub const MAX_RATING: f64 = 5.0;
pub const MAX_COMPLETENESS: f64 = 100.0;
pub const DEFAULT_EXPERIENCE_CAP: u32 = 20;

/// Calculate the recommendation score of a freelancer against required skills
///
/// Scoring formula (default weights):
/// score = round(
///     skill_match_ratio * 40 +               # Share of required skills matched
///     rating / 5 * 25 +                      # Rating on a 0-5 scale
///     profile_completeness / 100 * 20 +      # Profile filled in
///     min(completed_projects / 20, 1) * 15   # Experience, saturating at 20 projects
/// )
///
/// Rating and completeness are clamped to their documented ranges first.
pub fn calculate_recommendation_score(
    freelancer: &Freelancer,
    required: &RequiredSkills,
    weights: &ScoringWeights,
    experience_cap: u32,
) -> ScoreBreakdown {
    let skill_match = required.match_against(&freelancer.skills);

    let skills = skill_match.ratio() * weights.skills;
    let rating = rating_ratio(freelancer.rating) * weights.rating;
    let completeness = completeness_ratio(freelancer.profile_completeness) * weights.completeness;
    let experience = experience_ratio(freelancer.completed_projects, experience_cap) * weights.experience;

    let recommendation_score = round_score(skills + rating + completeness + experience);

    ScoreBreakdown {
        skills,
        rating,
        completeness,
        experience,
        recommendation_score,
        skill_match_count: skill_match.count(),
        total_required_skills: skill_match.total,
        matched_skills: skill_match.matched,
    }
}

#[inline]
fn rating_ratio(rating: f64) -> f64 {
    if rating.is_nan() {
        return 0.0;
    }
    rating.clamp(0.0, MAX_RATING) / MAX_RATING
}

#[inline]
fn completeness_ratio(completeness: f64) -> f64 {
    if completeness.is_nan() {
        return 0.0;
    }
    completeness.clamp(0.0, MAX_COMPLETENESS) / MAX_COMPLETENESS
}

/// Experience ratio (0-1), linear up to `cap` completed projects
#[inline]
fn experience_ratio(completed_projects: u32, cap: u32) -> f64 {
    if cap == 0 {
        return 1.0;
    }
    (completed_projects as f64 / cap as f64).min(1.0)
}

/// Round to the nearest integer, halves upward
#[inline]
fn round_score(total: f64) -> u32 {
    (total + 0.5).floor().max(0.0) as u32
}
