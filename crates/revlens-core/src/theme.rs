//! Closed theme taxonomy and polarity classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment polarity of a theme within a review or corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// All polarities, for exhaustive iteration.
    pub const ALL: [Polarity; 3] = [Polarity::Positive, Polarity::Negative, Polarity::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workplace-aspect category. The taxonomy is closed: an identifier
/// outside this enum is a load-time error, not a silent no-op.
///
/// Variants are declared in identifier order so the derived `Ord`
/// sorts by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    CareerGrowth,
    CompanyPerformance,
    Compensation,
    DiversityInclusion,
    Innovation,
    JobSecurity,
    Leadership,
    OfficeEnvironment,
    ProjectManagement,
    TeamDynamics,
    WorkCulture,
    WorkLifeBalance,
}

impl Theme {
    /// All themes, in identifier order.
    pub const ALL: [Theme; 12] = [
        Theme::CareerGrowth,
        Theme::CompanyPerformance,
        Theme::Compensation,
        Theme::DiversityInclusion,
        Theme::Innovation,
        Theme::JobSecurity,
        Theme::Leadership,
        Theme::OfficeEnvironment,
        Theme::ProjectManagement,
        Theme::TeamDynamics,
        Theme::WorkCulture,
        Theme::WorkLifeBalance,
    ];

    /// Snake-case identifier, as used in stored records and wire output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::CareerGrowth => "career_growth",
            Theme::CompanyPerformance => "company_performance",
            Theme::Compensation => "compensation",
            Theme::DiversityInclusion => "diversity_inclusion",
            Theme::Innovation => "innovation",
            Theme::JobSecurity => "job_security",
            Theme::Leadership => "leadership",
            Theme::OfficeEnvironment => "office_environment",
            Theme::ProjectManagement => "project_management",
            Theme::TeamDynamics => "team_dynamics",
            Theme::WorkCulture => "work_culture",
            Theme::WorkLifeBalance => "work_life_balance",
        }
    }

    /// Human-readable fallback name: separators to spaces, title-cased.
    pub fn display_name(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_ord_matches_identifier_order() {
        let mut sorted = Theme::ALL;
        sorted.sort();
        for pair in sorted.windows(2) {
            assert!(pair[0].as_str() < pair[1].as_str());
        }
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(Theme::WorkLifeBalance.display_name(), "Work Life Balance");
        assert_eq!(Theme::Compensation.display_name(), "Compensation");
    }

    #[test]
    fn test_serde_identifiers() {
        let json = serde_json::to_string(&Theme::CareerGrowth).unwrap();
        assert_eq!(json, "\"career_growth\"");
        let back: Theme = serde_json::from_str("\"work_culture\"").unwrap();
        assert_eq!(back, Theme::WorkCulture);
        assert_eq!(
            serde_json::to_string(&Polarity::Negative).unwrap(),
            "\"negative\""
        );
    }
}
