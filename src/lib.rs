//! Career Recommender Backend
//!
//! A minimal career recommendation service with:
//! - Static career catalog (10 profiles)
//! - Rule-based matching engine (skills → scored recommendations)
//! - Flat-file JSON user store with register/login
//! - REST API layer

pub mod api;
pub mod recommender;
pub mod store;

pub use api::*;
pub use recommender::*;
pub use store::*;
