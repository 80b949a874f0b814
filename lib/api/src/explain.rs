//! Human-readable recommendations
//!
//! Turns ranked matches into templated explanations. Truncation of benefit
//! and process lists happens here; the engine always hands over full lists.

use schemematch_core::{MatchResult, SchemeId, SchemeRecord};
use serde::Serialize;

/// Number of benefits quoted in an explanation
pub const QUOTED_BENEFITS: usize = 2;

/// Action suggested when a scheme lists no application steps
pub const FALLBACK_ACTION: &str = "visit the website";

/// Render a short explanation for one ranked match
pub fn explain(result: &MatchResult<'_>, applicant_name: &str) -> String {
    let scheme = result.scheme;
    let benefits = scheme
        .benefits
        .iter()
        .take(QUOTED_BENEFITS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" and ");
    let action = scheme.primary_action().unwrap_or(FALLBACK_ACTION);

    format!(
        "Hello {}, based on your profile, we highly recommend the **{}**.\n\n\
         This scheme is a great match because it specifically targets your needs.\n\
         You can get {}.\n\
         To apply, simply {}.",
        applicant_name, scheme.title, benefits, action
    )
}

/// One recommended scheme as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub scheme_id: SchemeId,
    pub title: String,
    pub match_score: f32,
    pub simple_explanation: String,
    pub original_data: SchemeRecord,
}

impl Recommendation {
    pub fn from_match(result: &MatchResult<'_>, applicant_name: &str) -> Self {
        Self {
            scheme_id: result.scheme.id.clone(),
            title: result.scheme.title.clone(),
            match_score: (result.score * 100.0).round() / 100.0,
            simple_explanation: explain(result, applicant_name),
            original_data: result.scheme.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub count: usize,
    pub results: Vec<Recommendation>,
}

impl RecommendationResponse {
    /// Keep the first `top_n` matches and explain each of them
    pub fn from_matches(matches: &[MatchResult<'_>], applicant_name: &str, top_n: usize) -> Self {
        let results: Vec<Recommendation> = matches
            .iter()
            .take(top_n)
            .map(|m| Recommendation::from_match(m, applicant_name))
            .collect();
        Self {
            count: results.len(),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_quotes_two_benefits_and_first_step() {
        let scheme = SchemeRecord::new(1u64, "PM Kisan")
            .with_benefits(["Rs 6000 per year", "direct transfer", "crop advice"])
            .with_process(["register at the CSC", "verify land records"]);
        let result = MatchResult { scheme: &scheme, score: 0.42 };

        let text = explain(&result, "Ramesh");
        assert!(text.starts_with("Hello Ramesh, based on your profile"));
        assert!(text.contains("**PM Kisan**"));
        assert!(text.contains("You can get Rs 6000 per year and direct transfer."));
        assert!(!text.contains("crop advice"));
        assert!(text.ends_with("To apply, simply register at the CSC."));
    }

    #[test]
    fn test_explain_without_process_steps() {
        let scheme = SchemeRecord::new(2u64, "Bare");
        let result = MatchResult { scheme: &scheme, score: 0.0 };
        assert!(explain(&result, "Sita").ends_with("To apply, simply visit the website."));
    }

    #[test]
    fn test_response_truncates_and_rounds() {
        let schemes: Vec<SchemeRecord> = (1..=5u64)
            .map(|i| SchemeRecord::new(i, format!("Scheme {}", i)))
            .collect();
        let matches: Vec<MatchResult<'_>> = schemes
            .iter()
            .map(|s| MatchResult { scheme: s, score: 0.12345 })
            .collect();

        let response = RecommendationResponse::from_matches(&matches, "Ramesh", 3);
        assert_eq!(response.count, 3);
        assert_eq!(response.results[2].scheme_id, SchemeId::from(3u64));
        assert!((response.results[0].match_score - 0.12).abs() < 1e-6);
        // Full lists are preserved in original_data
        assert_eq!(response.results[0].original_data, schemes[0]);
    }
}
