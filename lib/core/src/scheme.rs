use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Opaque scheme identifier, any JSON number or string as written in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemeId {
    Number(Number),
    String(String),
}

impl std::fmt::Display for SchemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemeId::Number(n) => write!(f, "{}", n),
            SchemeId::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for SchemeId {
    fn from(i: u64) -> Self {
        SchemeId::Number(i.into())
    }
}

impl From<i64> for SchemeId {
    fn from(i: i64) -> Self {
        SchemeId::Number(i.into())
    }
}

impl From<String> for SchemeId {
    fn from(s: String) -> Self {
        SchemeId::String(s)
    }
}

impl From<&str> for SchemeId {
    fn from(s: &str) -> Self {
        SchemeId::String(s.to_string())
    }
}

/// Structured eligibility constraints. A missing field leaves that
/// dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_income: Option<f64>,
    /// Allowed category/occupation labels, compared case-insensitively
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
}

impl Criteria {
    #[must_use]
    pub fn with_max_income(mut self, max_income: f64) -> Self {
        self.max_income = Some(max_income);
        self
    }

    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// First declared category label, used as part of the descriptive text
    pub fn first_category(&self) -> Option<&str> {
        self.category
            .as_ref()
            .and_then(|c| c.first())
            .map(String::as_str)
    }
}

/// A benefit scheme as loaded from the catalog. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeRecord {
    pub id: SchemeId,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub scheme_type: String,
    #[serde(default)]
    pub eligibility: Vec<String>,
    #[serde(default)]
    pub criteria: Criteria,
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Application steps; the first one is the primary action
    #[serde(default)]
    pub process: Vec<String>,
}

impl SchemeRecord {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<SchemeId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            scheme_type: String::new(),
            eligibility: Vec::new(),
            criteria: Criteria::default(),
            benefits: Vec::new(),
            process: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_type(mut self, scheme_type: impl Into<String>) -> Self {
        self.scheme_type = scheme_type.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_eligibility<I, S>(mut self, clauses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.eligibility = clauses.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = criteria;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_benefits<I, S>(mut self, benefits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.benefits = benefits.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_process<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.process = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Text the relevance index is built from: title, type, every
    /// eligibility clause and the first category label.
    pub fn descriptive_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.scheme_type,
            self.eligibility.join(" "),
            self.criteria.first_category().unwrap_or("")
        )
    }

    pub fn primary_action(&self) -> Option<&str> {
        self.process.first().map(String::as_str)
    }
}
