//! # schemematch Core
//!
//! Core library for the schemematch engine.
//!
//! This crate matches an applicant profile against a catalog of benefit
//! schemes in two steps:
//!
//! - [`filter`] - hard eligibility rules (income ceiling, allowed categories)
//! - [`Ranker`] - TF-IDF cosine relevance between a profile query and each scheme
//!
//! [`MatchingEngine`] composes both over a [`TextIndex`] that is built once
//! and then shared read-only.
//!
//! ## Example
//!
//! ```rust
//! use schemematch_core::{ApplicantProfile, Criteria, MatchingEngine, SchemeRecord};
//!
//! let catalog = vec![
//!     SchemeRecord::new(1u64, "Farmer Aid")
//!         .with_criteria(Criteria::default().with_categories(["farmer"]))
//!         .with_benefits(["subsidy"]),
//! ];
//! let engine = MatchingEngine::from_schemes(catalog);
//!
//! let profile = ApplicantProfile::new("Ramesh", 45, Some(50000.0), "Farmer", "Bihar", "farmer");
//! let results = engine.match_profile(&profile);
//! assert_eq!(results[0].id_string(), "1");
//! ```

pub mod engine;
pub mod error;
pub mod filter;
pub mod profile;
pub mod rank;
pub mod scheme;
pub mod text;
pub mod vector;

pub use engine::{Catalog, CatalogStatus, IndexedScheme, MatchingEngine};
pub use error::{Error, Result};
pub use filter::{filter, Eligibility, Exclusion, ProfileFilter};
pub use profile::ApplicantProfile;
pub use rank::{build_query, MatchResult, Ranker};
pub use scheme::{Criteria, SchemeId, SchemeRecord};
pub use text::{tokenize, TextIndex};
pub use vector::Vector;
