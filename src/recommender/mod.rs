//! Recommender Module - Core of the Career Recommender
//!
//! This module implements the skills → match → recommend pipeline.
//!
//! Architecture:
//! - Catalog: static list of career profiles, fixed at startup
//! - Engine: pure scoring/ranking over the catalog
//! - Types: career profile and scored-recommendation records

pub mod catalog;
pub mod engine;
pub mod types;

pub use catalog::*;
pub use engine::*;
pub use types::*;
