use crate::models::Requirement;

/// Required skills of a job post, normalized once per ranking
///
/// Empty entries are dropped: an empty string would otherwise be contained
/// in every freelancer skill and match everything. They also leave the
/// denominator, so `["", "Rust"]` counts as one required skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredSkills {
    display: Vec<String>,
    normalized: Vec<String>,
}

impl RequiredSkills {
    /// Returns `None` when no usable skill remains, meaning "no filter"
    pub fn new<S: AsRef<str>>(skills: &[S]) -> Option<Self> {
        let (display, normalized): (Vec<String>, Vec<String>) = skills
            .iter()
            .filter_map(|skill| {
                let skill = skill.as_ref();
                normalize_skill(skill).map(|norm| (skill.to_string(), norm))
            })
            .unzip();

        if normalized.is_empty() {
            None
        } else {
            Some(Self { display, normalized })
        }
    }

    pub fn from_requirement(requirement: &Requirement) -> Option<Self> {
        Self::new(&requirement.required_skills)
    }

    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Match a freelancer's skills against these requirements
    pub fn match_against<S: AsRef<str>>(&self, freelancer_skills: &[S]) -> SkillMatch {
        let candidate: Vec<String> = freelancer_skills
            .iter()
            .filter_map(|skill| normalize_skill(skill.as_ref()))
            .collect();

        let matched: Vec<String> = self
            .normalized
            .iter()
            .zip(&self.display)
            .filter(|(required, _)| candidate.iter().any(|skill| skills_overlap(required, skill)))
            .map(|(_, display)| display.clone())
            .collect();

        SkillMatch {
            matched,
            total: self.len(),
        }
    }
}

/// Outcome of matching one freelancer against the required skills
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMatch {
    /// Required skills that matched, in requirement order
    pub matched: Vec<String>,
    pub total: usize,
}

impl SkillMatch {
    pub fn count(&self) -> usize {
        self.matched.len()
    }

    /// Fraction of required skills matched, 0.0 when nothing was required
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.matched.len() as f64 / self.total as f64
    }
}

/// Lower-cased form of a skill; `None` for the empty string
///
/// Whitespace is kept: `" go"` must not match `"django"`.
#[inline]
pub fn normalize_skill(skill: &str) -> Option<String> {
    if skill.is_empty() {
        None
    } else {
        Some(skill.to_lowercase())
    }
}

/// Bidirectional substring test on normalized skills
///
/// "react" matches "react native" and "reactjs", and "node.js" matches "node".
#[inline]
pub fn skills_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
