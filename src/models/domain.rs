use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Keys the recommender adds to a freelancer record. Stripped from the
/// pass-through fields so a re-posted result does not serialize them twice.
pub const ANNOTATION_KEYS: [&str; 4] = [
    "recommendationScore",
    "skillMatchCount",
    "totalRequiredSkills",
    "matchedSkills",
];

/// Freelancer profile as consumed by the recommender
///
/// Missing numeric fields default to 0 and a missing or `null` skill list
/// defaults to empty. Everything else on the record (name, title, avatar...)
/// is kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Freelancer {
    #[serde(deserialize_with = "id_from_string_or_number")]
    #[validate(length(min = 1, message = "freelancer id must not be empty"))]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be within [0, 5]"))]
    pub rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(range(min = 0.0, max = 100.0, message = "profileCompleteness must be within [0, 100]"))]
    pub profile_completeness: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_projects: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Freelancer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            skills: Vec::new(),
            rating: 0.0,
            profile_completeness: 0.0,
            completed_projects: 0,
            extra: Map::new(),
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_profile_completeness(mut self, completeness: f64) -> Self {
        self.profile_completeness = completeness;
        self
    }

    pub fn with_completed_projects(mut self, projects: u32) -> Self {
        self.completed_projects = projects;
        self
    }

    /// Copy of the record with any stale annotation keys removed
    pub(crate) fn without_annotations(&self) -> Self {
        let mut copy = self.clone();
        copy.extra
            .retain(|key, _| !ANNOTATION_KEYS.contains(&key.as_str()));
        copy
    }
}

/// Skill requirements of a job post, used to personalize the ranking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
}

impl Requirement {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_skills: skills.into_iter().map(Into::into).collect(),
        }
    }
}

/// Freelancer annotated with its recommendation score
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredFreelancer {
    #[serde(flatten)]
    pub freelancer: Freelancer,
    pub recommendation_score: u32,
    pub skill_match_count: usize,
    pub total_required_skills: usize,
    pub matched_skills: Vec<String>,
}

/// Per-component view of a single score
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub rating: f64,
    pub completeness: f64,
    pub experience: f64,
    pub recommendation_score: u32,
    pub skill_match_count: usize,
    pub total_required_skills: usize,
    pub matched_skills: Vec<String>,
}

/// Which branch of the recommender produced a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    Rating,
    Skills,
}

/// Ranked output of the recommender
///
/// `Rating` carries the input records reordered by rating with no
/// annotations; `Skills` carries the scored and filtered records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Ranking {
    Rating(Vec<Freelancer>),
    Skills(Vec<ScoredFreelancer>),
}

impl Ranking {
    pub fn mode(&self) -> RankingMode {
        match self {
            Ranking::Rating(_) => RankingMode::Rating,
            Ranking::Skills(_) => RankingMode::Skills,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Ranking::Rating(list) => list.len(),
            Ranking::Skills(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn truncate(&mut self, limit: usize) {
        match self {
            Ranking::Rating(list) => list.truncate(limit),
            Ranking::Skills(list) => list.truncate(limit),
        }
    }

    /// Freelancer ids in ranked order
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Ranking::Rating(list) => list.iter().map(|f| f.id.as_str()).collect(),
            Ranking::Skills(list) => list.iter().map(|s| s.freelancer.id.as_str()).collect(),
        }
    }
}

/// Scoring weights, in points out of a 100 point total
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub rating: f64,
    pub completeness: f64,
    pub experience: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.rating + self.completeness + self.experience
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 40.0,
            rating: 25.0,
            completeness: 20.0,
            experience: 15.0,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
