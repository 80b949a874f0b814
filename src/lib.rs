//! # schemematch
//!
//! Matches an applicant profile against a catalog of welfare/benefit schemes
//! and returns the relevant schemes, most relevant first.
//!
//! Matching runs in two steps:
//! - **Eligibility filter**: schemes whose income ceiling or allowed
//!   categories exclude the applicant are dropped
//! - **Relevance ranking**: the rest are ordered by TF-IDF cosine similarity
//!   between a query built from the profile and each scheme's description
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! schemematch --catalog ./data/schemes.json --http-port 8000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use schemematch::prelude::*;
//!
//! let catalog = load_catalog("./data/schemes.json");
//! let engine = MatchingEngine::new(catalog);
//!
//! let profile = ApplicantProfile::new("Ramesh", 45, Some(120000.0), "Farmer", "Uttar Pradesh", "farmer");
//! for result in engine.match_profile(&profile).iter().take(3) {
//!     println!("{} ({:.2})", result.scheme.title, result.score);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `schemematch-core` - Scheme model, text index, eligibility filter, ranker, engine
//! - `schemematch-storage` - Catalog loading and the registration log
//! - `schemematch-api` - REST API

// Re-export core types
pub use schemematch_core::{
    ApplicantProfile, Catalog, CatalogStatus, Criteria, Error, MatchResult, MatchingEngine,
    Result, SchemeId, SchemeRecord, TextIndex,
};

// Re-export storage
pub use schemematch_storage::{load_catalog, RegistrationLog};

// Re-export API
pub use schemematch_api::{AppState, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_catalog, ApplicantProfile, AppState, Catalog, CatalogStatus, Criteria, Error,
        MatchResult, MatchingEngine, RegistrationLog, RestApi, Result, SchemeId, SchemeRecord,
        TextIndex,
    };
}
