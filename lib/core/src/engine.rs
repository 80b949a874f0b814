use crate::filter::filter;
use crate::profile::ApplicantProfile;
use crate::rank::{MatchResult, Ranker};
use crate::scheme::SchemeRecord;
use crate::text::TextIndex;
use crate::vector::Vector;

/// Outcome of loading the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Loaded,
    /// Source missing or malformed; the catalog is empty
    Unavailable(String),
}

/// Schemes as handed over by the catalog loader
#[derive(Debug, Clone)]
pub struct Catalog {
    pub schemes: Vec<SchemeRecord>,
    pub status: CatalogStatus,
}

impl Catalog {
    pub fn loaded(schemes: Vec<SchemeRecord>) -> Self {
        Self {
            schemes,
            status: CatalogStatus::Loaded,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            schemes: Vec::new(),
            status: CatalogStatus::Unavailable(reason.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == CatalogStatus::Loaded
    }
}

/// A scheme paired with its precomputed weight vector.
/// The pair travels together through filtering and ranking.
#[derive(Debug, Clone)]
pub struct IndexedScheme {
    pub scheme: SchemeRecord,
    pub vector: Vector,
}

/// Matches applicant profiles against a catalog.
///
/// The text index is built once in [`MatchingEngine::new`] and never
/// mutated; the engine is `Send + Sync` and meant to be shared behind an
/// `Arc` across request handlers.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    schemes: Vec<IndexedScheme>,
    index: TextIndex,
    status: CatalogStatus,
}

impl MatchingEngine {
    pub fn new(catalog: Catalog) -> Self {
        let Catalog { schemes, status } = catalog;
        let (index, vectors) = TextIndex::build(&schemes);

        let schemes = schemes
            .into_iter()
            .zip(vectors)
            .map(|(scheme, vector)| IndexedScheme { scheme, vector })
            .collect();

        Self {
            schemes,
            index,
            status,
        }
    }

    pub fn from_schemes(schemes: Vec<SchemeRecord>) -> Self {
        Self::new(Catalog::loaded(schemes))
    }

    /// Eligible schemes for the profile, most relevant first.
    ///
    /// An empty result means either no catalog or no eligible scheme;
    /// use [`MatchingEngine::is_catalog_available`] to tell them apart.
    pub fn match_profile<'a>(&'a self, profile: &ApplicantProfile) -> Vec<MatchResult<'a>> {
        let eligible = filter(profile, &self.schemes);
        Ranker::new(&self.index).rank(profile, &eligible)
    }

    /// Eligible schemes in catalog order, without ranking
    pub fn eligible<'a>(&'a self, profile: &ApplicantProfile) -> Vec<&'a SchemeRecord> {
        filter(profile, &self.schemes)
            .into_iter()
            .map(|indexed| &indexed.scheme)
            .collect()
    }

    pub fn is_catalog_available(&self) -> bool {
        self.status == CatalogStatus::Loaded
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn index(&self) -> &TextIndex {
        &self.index
    }

    pub fn schemes(&self) -> &[IndexedScheme] {
        &self.schemes
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}
