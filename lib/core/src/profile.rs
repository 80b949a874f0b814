use serde::{Deserialize, Serialize};
use crate::{Error, Result};

fn default_disability() -> String {
    "No".to_string()
}

/// Applicant attributes submitted with a single match request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub name: String,
    pub age: u32,
    /// Annual income. `None` means unknown; an unknown income never
    /// fails an income ceiling.
    #[serde(default)]
    pub income: Option<f64>,
    pub occupation: String,
    pub state: String,
    #[serde(default = "default_disability")]
    pub disability: String,
    pub category: String,
    /// Free-text statement of what the applicant needs help with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need: Option<String>,
}

impl ApplicantProfile {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        income: Option<f64>,
        occupation: impl Into<String>,
        state: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            income,
            occupation: occupation.into(),
            state: state.into(),
            disability: default_disability(),
            category: category.into(),
            need: None,
        }
    }

    #[must_use]
    pub fn with_need(mut self, need: impl Into<String>) -> Self {
        self.need = Some(need.into());
        self
    }

    #[must_use]
    pub fn with_disability(mut self, disability: impl Into<String>) -> Self {
        self.disability = disability.into();
        self
    }

    /// Check the profile before it is handed to the engine.
    ///
    /// Income, when present, must be a finite non-negative number.
    /// Occupation and category must not be blank.
    pub fn validate(&self) -> Result<()> {
        if let Some(income) = self.income {
            if !income.is_finite() || income < 0.0 {
                return Err(Error::MalformedProfile(format!(
                    "income must be a non-negative number, got {}",
                    income
                )));
            }
        }
        if self.occupation.trim().is_empty() {
            return Err(Error::MalformedProfile("occupation is required".to_string()));
        }
        if self.category.trim().is_empty() {
            return Err(Error::MalformedProfile("category is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farmer() -> ApplicantProfile {
        ApplicantProfile::new("Ramesh", 45, Some(120000.0), "Farmer", "Uttar Pradesh", "farmer")
    }

    #[test]
    fn test_disability_defaults_to_no() {
        let json = r#"{
            "name": "Ramesh Gupta",
            "age": 45,
            "income": 120000,
            "occupation": "Farmer",
            "state": "Uttar Pradesh",
            "category": "farmer"
        }"#;
        let profile: ApplicantProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.disability, "No");
        assert_eq!(profile.income, Some(120000.0));
        assert!(profile.need.is_none());
    }

    #[test]
    fn test_unknown_income_is_valid() {
        let mut profile = farmer();
        profile.income = None;
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_income() {
        let mut profile = farmer();
        profile.income = Some(-1.0);
        assert!(matches!(profile.validate(), Err(Error::MalformedProfile(_))));

        profile.income = Some(f64::NAN);
        assert!(matches!(profile.validate(), Err(Error::MalformedProfile(_))));
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut profile = farmer();
        profile.occupation = "  ".to_string();
        assert!(profile.validate().is_err());

        let mut profile = farmer();
        profile.category = String::new();
        assert!(profile.validate().is_err());
    }
}
