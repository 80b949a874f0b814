// Hard eligibility filtering against structured scheme criteria
use crate::engine::IndexedScheme;
use crate::profile::ApplicantProfile;
use crate::scheme::SchemeRecord;

/// Allowed-category token that admits every applicant
pub const WILDCARD_CATEGORY: &str = "general";

pub trait Eligibility {
    fn admits(&self, scheme: &SchemeRecord) -> bool;
}

/// Why a scheme was excluded for a profile. Only the first failing rule is reported.
#[derive(Debug, Clone, PartialEq)]
pub enum Exclusion {
    IncomeAboveCeiling { ceiling: f64, income: f64 },
    CategoryNotAllowed { allowed: Vec<String> },
}

/// Eligibility rules evaluated against one applicant profile
pub struct ProfileFilter {
    income: Option<f64>,
    category: String,
    occupation: String,
}

impl ProfileFilter {
    pub fn new(profile: &ApplicantProfile) -> Self {
        Self {
            income: profile.income,
            category: profile.category.to_lowercase(),
            occupation: profile.occupation.to_lowercase(),
        }
    }

    /// Apply the income ceiling, then the allowed-category set.
    ///
    /// Unknown income never fails the ceiling.
    /// A profile whose own category is "general" gets no special treatment;
    /// only a scheme listing "general" acts as a wildcard.
    pub fn check(&self, scheme: &SchemeRecord) -> Result<(), Exclusion> {
        let criteria = &scheme.criteria;

        if let (Some(ceiling), Some(income)) = (criteria.max_income, self.income) {
            if income > ceiling {
                return Err(Exclusion::IncomeAboveCeiling { ceiling, income });
            }
        }

        if let Some(categories) = &criteria.category {
            let allowed: Vec<String> = categories.iter().map(|c| c.to_lowercase()).collect();
            let admitted = allowed.iter().any(|c| {
                *c == self.category || *c == self.occupation || c == WILDCARD_CATEGORY
            });
            if !admitted {
                return Err(Exclusion::CategoryNotAllowed { allowed });
            }
        }

        Ok(())
    }
}

impl Eligibility for ProfileFilter {
    fn admits(&self, scheme: &SchemeRecord) -> bool {
        self.check(scheme).is_ok()
    }
}

/// Keep the schemes the profile is eligible for, in catalog order
pub fn filter<'a>(profile: &ApplicantProfile, catalog: &'a [IndexedScheme]) -> Vec<&'a IndexedScheme> {
    let rules = ProfileFilter::new(profile);
    catalog
        .iter()
        .filter(|indexed| rules.admits(&indexed.scheme))
        .collect()
}
