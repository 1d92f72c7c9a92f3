//! Career Recommender Types
//!
//! Core data structures for the recommendation engine. A `CareerProfile`
//! describes one job role and its matching criteria; a `ScoredCareer` is
//! a profile annotated with the score computed for one request.

use serde::{Deserialize, Serialize};

// ============================================================
// CAREER PROFILE
// ============================================================

/// A static career profile in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerProfile {
    /// Unique within the catalog
    pub title: String,
    pub description: String,
    /// Skills checked for exact (case-insensitive) matches
    pub required_skills: Vec<String>,
    pub industry: String,
    /// Free-form display text, e.g. "$70k - $130k"
    pub salary_range: String,
    /// Lower-cased terms used for substring matching
    pub match_keywords: Vec<String>,
}

// ============================================================
// SCORED CAREER
// ============================================================

/// A career profile plus its computed match score.
///
/// Serializes with the profile fields and `match_score` at the same
/// level, so the wire format is a single flat object per recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCareer {
    #[serde(flatten)]
    pub profile: CareerProfile,
    /// Always within [0.0, 1.0]
    pub match_score: f64,
}
