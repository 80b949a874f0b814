//! Relevance ranking of eligible schemes
//!
//! Scores each candidate by cosine similarity between a query synthesized
//! from the applicant profile and the candidate's precomputed weight vector.

use crate::engine::IndexedScheme;
use crate::profile::ApplicantProfile;
use crate::scheme::SchemeRecord;
use crate::text::TextIndex;
use serde::Serialize;

/// Need phrase used when the applicant did not state one
pub const DEFAULT_NEED: &str = "financial assistance";

/// A scheme together with its relevance score in [0, 1]
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    pub scheme: &'a SchemeRecord,
    pub score: f32,
}

impl MatchResult<'_> {
    pub fn id_string(&self) -> String {
        self.scheme.id.to_string()
    }
}

/// Build the query text for a profile. Deterministic for a given profile.
pub fn build_query(profile: &ApplicantProfile) -> String {
    format!(
        "{} {} {} needs help with {}",
        profile.occupation,
        profile.category,
        profile.state,
        profile.need.as_deref().unwrap_or(DEFAULT_NEED)
    )
}

/// Ranks candidates against the frozen text index
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'i> {
    index: &'i TextIndex,
}

impl<'i> Ranker<'i> {
    pub fn new(index: &'i TextIndex) -> Self {
        Self { index }
    }

    /// Score and sort candidates by descending relevance.
    ///
    /// The sort is stable, so equal scores keep the input order.
    pub fn rank<'a>(
        &self,
        profile: &ApplicantProfile,
        eligible: &[&'a IndexedScheme],
    ) -> Vec<MatchResult<'a>> {
        if eligible.is_empty() {
            return Vec::new();
        }

        let query = self.index.transform(&build_query(profile));

        let mut results: Vec<MatchResult<'a>> = eligible
            .iter()
            .map(|indexed| MatchResult {
                scheme: &indexed.scheme,
                score: query.cosine_similarity(&indexed.vector).clamp(0.0, 1.0),
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::Criteria;
    use crate::vector::Vector;

    fn indexed(schemes: Vec<SchemeRecord>) -> (TextIndex, Vec<IndexedScheme>) {
        let (index, vectors) = TextIndex::build(&schemes);
        let catalog = schemes
            .into_iter()
            .zip(vectors)
            .map(|(scheme, vector)| IndexedScheme { scheme, vector })
            .collect();
        (index, catalog)
    }

    #[test]
    fn test_build_query() {
        let profile = ApplicantProfile::new("A", 20, None, "Student", "Kerala", "obc");
        assert_eq!(
            build_query(&profile),
            "Student obc Kerala needs help with financial assistance"
        );
        let profile = profile.with_need("hostel fees");
        assert!(build_query(&profile).ends_with("needs help with hostel fees"));
    }

    #[test]
    fn test_rank_orders_by_relevance() {
        let (index, catalog) = indexed(vec![
            SchemeRecord::new(1u64, "Pension Support").with_type("Elderly"),
            SchemeRecord::new(2u64, "Student Scholarship")
                .with_type("Education")
                .with_criteria(Criteria::default().with_categories(["student"])),
        ]);
        let profile = ApplicantProfile::new("A", 20, None, "Student", "Kerala", "student");
        let eligible: Vec<&IndexedScheme> = catalog.iter().collect();

        let results = Ranker::new(&index).rank(&profile, &eligible);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id_string(), "2");
        assert!(results[0].score > 0.0);
        assert_eq!(results[1].score, 0.0);
        assert!(results.iter().all(|r| (0.0..=1.0).contains(&r.score)));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let (index, catalog) = indexed(vec![
            SchemeRecord::new(1u64, "Alpha"),
            SchemeRecord::new(2u64, "Beta"),
            SchemeRecord::new(3u64, "Gamma"),
        ]);
        let profile = ApplicantProfile::new("A", 20, None, "Driver", "Goa", "sc");
        let eligible: Vec<&IndexedScheme> = catalog.iter().rev().collect();

        let ids: Vec<String> = Ranker::new(&index)
            .rank(&profile, &eligible)
            .iter()
            .map(MatchResult::id_string)
            .collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_identical_schemes_score_from_their_own_vectors() {
        let twin = SchemeRecord::new(1u64, "Farmer Aid").with_type("Agriculture");
        let (index, catalog) = indexed(vec![twin.clone(), twin]);
        let profile = ApplicantProfile::new("A", 40, None, "Farmer", "Assam", "farmer");
        let eligible: Vec<&IndexedScheme> = catalog.iter().collect();

        let results = Ranker::new(&index).rank(&profile, &eligible);
        assert_eq!(results.len(), 2);
        assert!((results[0].score - results[1].score).abs() < 1e-6);
        assert!(std::ptr::eq(results[0].scheme, &catalog[0].scheme));
        assert!(std::ptr::eq(results[1].scheme, &catalog[1].scheme));
    }

    #[test]
    fn test_zero_vectors_score_zero() {
        let index = TextIndex::default();
        let orphan = IndexedScheme {
            scheme: SchemeRecord::new(9u64, "Orphan"),
            vector: Vector::default(),
        };
        let profile = ApplicantProfile::new("A", 40, None, "Farmer", "Assam", "farmer");
        let results = Ranker::new(&index).rank(&profile, &[&orphan]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 0.0);
    }

    #[test]
    fn test_empty_candidates() {
        let index = TextIndex::default();
        let profile = ApplicantProfile::new("A", 40, None, "Farmer", "Assam", "farmer");
        assert!(Ranker::new(&index).rank(&profile, &[]).is_empty());
    }
}
