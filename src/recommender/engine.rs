//! Career Matching Engine
//!
//! Scores the static career catalog against a user's self-reported
//! skills and returns a ranked list of recommendations.
//!
//! Scoring is read-only and deterministic: no I/O, no clock reads, no
//! randomness. The engine holds no mutable state, so it can be called
//! concurrently from any number of request handlers.

use super::catalog::default_catalog;
use super::types::{CareerProfile, ScoredCareer};

// ============================================================
// CONFIGURATION
// ============================================================

/// Configuration for the recommender
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// Maximum number of recommendations returned
    pub max_results: usize,
    /// Minimum score a profile must exceed to be included
    pub min_score: f64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            min_score: 0.1,
        }
    }
}

// ============================================================
// RECOMMENDER IMPLEMENTATION
// ============================================================

/// The career recommender
pub struct CareerRecommender {
    config: RecommenderConfig,
    careers: Vec<CareerProfile>,
}

impl CareerRecommender {
    /// Create a recommender over the default catalog
    pub fn new(config: RecommenderConfig) -> Self {
        Self {
            config,
            careers: default_catalog(),
        }
    }

    /// Create a recommender over an explicit catalog
    pub fn with_catalog(config: RecommenderConfig, careers: Vec<CareerProfile>) -> Self {
        Self { config, careers }
    }

    /// The catalog this recommender scores against
    pub fn careers(&self) -> &[CareerProfile] {
        &self.careers
    }

    /// Score the catalog against the user's skills and return the ranked
    /// recommendations.
    ///
    /// `interests` is accepted for future use and does not affect
    /// scoring. An empty skill list yields an empty result.
    pub fn recommend(
        &self,
        skills: &[String],
        experience_level: &str,
        _interests: &[String],
    ) -> Vec<ScoredCareer> {
        if skills.is_empty() {
            return Vec::new();
        }

        let skills_lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

        let mut recommendations: Vec<ScoredCareer> = self
            .careers
            .iter()
            .filter_map(|career| {
                let score = self.match_score(&skills_lower, career, experience_level);
                if score > self.config.min_score {
                    Some(ScoredCareer {
                        profile: career.clone(),
                        match_score: score,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable sort: ties keep catalog order
        recommendations.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        recommendations.truncate(self.config.max_results);
        recommendations
    }

    /// Compute the match score for one career profile.
    ///
    /// Each user skill contributes at most one increment: 0.3 for an
    /// exact (case-insensitive) required-skill match, else 0.2 when the
    /// skill and a match keyword contain one another. A skill repeated
    /// in the input contributes once per occurrence.
    fn match_score(&self, user_skills: &[String], career: &CareerProfile, experience_level: &str) -> f64 {
        let mut score = 0.0;

        let career_skills: Vec<String> = career
            .required_skills
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        for skill in user_skills {
            if career_skills.iter().any(|cs| cs == skill) {
                score += 0.3;
            } else if career
                .match_keywords
                .iter()
                .any(|kw| kw.contains(skill.as_str()) || skill.contains(kw.as_str()))
            {
                score += 0.2;
            }
        }

        score *= experience_multiplier(experience_level);

        // Score is non-negative by construction; only the upper bound needs clamping
        score.min(1.0)
    }
}

/// Scalar applied to a profile's raw score based on declared experience.
/// Unrecognized levels behave like "intermediate".
fn experience_multiplier(level: &str) -> f64 {
    match level {
        "beginner" => 0.8,
        "intermediate" => 1.0,
        "advanced" => 1.2,
        _ => 1.0,
    }
}
