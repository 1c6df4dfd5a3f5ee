//! Theme keyword catalogs.
//!
//! Two catalog shapes exist. The flat catalog maps each theme to one
//! keyword list; any match flags the theme and the field's role or
//! detected sentiment decides the polarity. The per-polarity catalog
//! splits each theme's keywords into positive/negative/neutral lists so
//! a match carries its own polarity. A deployment picks one shape.

use revlens_core::Theme;

/// Keyword list(s) owned by one theme.
#[derive(Debug, Clone, Copy)]
pub enum KeywordSet {
    /// One list; any match flags the theme, polarity comes from the field.
    Flat(&'static [&'static str]),
    /// Per-polarity lists; a match flags the theme under the list's polarity.
    PerPolarity {
        positive: &'static [&'static str],
        negative: &'static [&'static str],
        neutral: &'static [&'static str],
    },
}

/// Immutable theme → keywords catalog, built once and passed into the
/// analyzer. Construction is the only place keyword data is touched.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    entries: Vec<(Theme, KeywordSet)>,
}

impl ThemeCatalog {
    /// The twelve-theme flat catalog.
    pub fn flat() -> Self {
        Self {
            entries: FLAT_CATALOG
                .iter()
                .map(|&(theme, keywords)| (theme, KeywordSet::Flat(keywords)))
                .collect(),
        }
    }

    /// The six-theme per-polarity catalog with graded adjective lists.
    pub fn per_polarity() -> Self {
        Self {
            entries: PER_POLARITY_CATALOG
                .iter()
                .map(|&(theme, positive, negative, neutral)| {
                    (
                        theme,
                        KeywordSet::PerPolarity {
                            positive,
                            negative,
                            neutral,
                        },
                    )
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[(Theme, KeywordSet)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const FLAT_CATALOG: &[(Theme, &[&str])] = &[
    (
        Theme::WorkCulture,
        &[
            "culture", "environment", "atmosphere", "workplace", "team", "collaboration",
            "friendly", "inclusive", "diverse", "supportive", "transparency", "ethics",
            "values", "diversity", "inclusion", "respect", "belonging", "community",
            "social", "fun", "positive", "toxic", "politics", "bureaucracy",
        ],
    ),
    (
        Theme::Leadership,
        &[
            "leadership", "management", "direction", "strategy", "vision", "leader",
            "manager", "executive", "boss", "supervisor", "communication", "transparency",
            "decision", "guidance", "mentorship", "coaching", "feedback", "recognition",
            "micromanagement", "hierarchy", "clarity",
        ],
    ),
    (
        Theme::Compensation,
        &[
            "salary", "benefits", "pay", "compensation", "bonus", "package", "stock",
            "insurance", "retirement", "401k", "raise", "equity", "options", "rsu",
            "healthcare", "dental", "vision", "pto", "vacation", "leave", "perks",
            "allowance", "reimbursement", "overtime", "commission",
        ],
    ),
    (
        Theme::WorkLifeBalance,
        &[
            "balance", "flexibility", "hours", "schedule", "remote", "time",
            "wlb", "flexible", "workload", "overtime", "vacation", "burnout",
            "stress", "pressure", "deadline", "weekend", "holiday", "family",
            "personal", "hybrid", "work from home", "wfh", "commute",
        ],
    ),
    (
        Theme::CareerGrowth,
        &[
            "growth", "learning", "development", "opportunity", "promotion", "career",
            "training", "mentor", "skill", "advance", "progress", "education",
            "certification", "conference", "workshop", "upskill", "challenge",
            "responsibility", "exposure", "path", "trajectory", "potential",
        ],
    ),
    (
        Theme::Innovation,
        &[
            "innovation", "technology", "creative", "innovative", "cutting-edge", "modern",
            "tools", "tech", "startup", "agile", "future", "research", "development",
            "experimentation", "breakthrough", "transformation", "digital", "automation",
            "ai", "machine learning", "cloud", "stack",
        ],
    ),
    (
        Theme::JobSecurity,
        &[
            "security", "stable", "stability", "layoff", "redundancy", "permanent",
            "contract", "temporary", "future", "uncertainty", "downsizing", "reorganization",
            "restructuring", "merger", "acquisition", "full-time", "part-time",
        ],
    ),
    (
        Theme::OfficeEnvironment,
        &[
            "office", "workspace", "facility", "amenities", "location", "parking",
            "cafeteria", "food", "gym", "ergonomic", "desk", "equipment", "supplies",
            "building", "infrastructure", "safety", "clean", "comfortable",
        ],
    ),
    (
        Theme::TeamDynamics,
        &[
            "team", "colleague", "coworker", "peer", "collaboration", "communication",
            "support", "morale", "conflict", "politics", "drama", "cooperation",
            "teamwork", "relationship", "dynamic", "interaction", "coordination",
        ],
    ),
    (
        Theme::CompanyPerformance,
        &[
            "performance", "growth", "revenue", "profit", "market", "competitor",
            "industry", "success", "failure", "strategy", "direction", "leadership",
            "management", "vision", "mission", "goal", "objective", "target",
        ],
    ),
    (
        Theme::DiversityInclusion,
        &[
            "diversity", "inclusion", "equality", "equity", "discrimination", "bias",
            "harassment", "representation", "minority", "gender", "race", "age",
            "disability", "lgbt", "culture", "background", "perspective",
        ],
    ),
    (
        Theme::ProjectManagement,
        &[
            "project", "deadline", "timeline", "planning", "execution", "delivery",
            "scrum", "agile", "waterfall", "methodology", "process", "workflow",
            "coordination", "organization", "requirement", "specification",
        ],
    ),
];

type PerPolarityEntry = (Theme, &'static [&'static str], &'static [&'static str], &'static [&'static str]);

const PER_POLARITY_CATALOG: &[PerPolarityEntry] = &[
    (
        Theme::WorkCulture,
        &["collaborative", "inclusive", "supportive", "friendly", "positive"],
        &["toxic", "hostile", "political", "bureaucratic", "unfriendly"],
        &["formal", "casual", "traditional", "startup-like", "corporate"],
    ),
    (
        Theme::Leadership,
        &["transparent", "inspiring", "approachable", "effective", "visionary"],
        &["micromanaging", "unclear", "disorganized", "absent", "poor"],
        &["hands-off", "structured", "hierarchical", "decentralized"],
    ),
    (
        Theme::Compensation,
        &["competitive", "generous", "excellent", "comprehensive", "above-market"],
        &["low", "below-market", "inadequate", "unfair", "poor"],
        &["standard", "industry-average", "market-rate", "typical"],
    ),
    (
        Theme::WorkLifeBalance,
        &["flexible", "balanced", "accommodating", "reasonable", "great"],
        &["demanding", "stressful", "burnout", "overwhelming", "poor"],
        &["structured", "predictable", "regular", "standard"],
    ),
    (
        Theme::CareerGrowth,
        &["excellent", "promising", "abundant", "clear", "supported"],
        &["limited", "stagnant", "unclear", "rare", "nonexistent"],
        &["steady", "gradual", "traditional", "standard"],
    ),
    (
        Theme::Innovation,
        &["cutting-edge", "innovative", "advanced", "modern", "progressive"],
        &["outdated", "legacy", "behind", "obsolete", "stagnant"],
        &["established", "stable", "conventional", "standard"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_catalog_covers_taxonomy() {
        let catalog = ThemeCatalog::flat();
        assert_eq!(catalog.len(), Theme::ALL.len());
        for (theme, set) in catalog.entries() {
            match set {
                KeywordSet::Flat(keywords) => {
                    assert!(!keywords.is_empty(), "{theme} has no keywords")
                }
                KeywordSet::PerPolarity { .. } => panic!("flat catalog holds per-polarity set"),
            }
        }
    }

    #[test]
    fn test_per_polarity_catalog_shape() {
        let catalog = ThemeCatalog::per_polarity();
        assert_eq!(catalog.len(), 6);
        for (theme, set) in catalog.entries() {
            match set {
                KeywordSet::PerPolarity {
                    positive,
                    negative,
                    neutral,
                } => {
                    assert!(!positive.is_empty(), "{theme} positive list empty");
                    assert!(!negative.is_empty(), "{theme} negative list empty");
                    assert!(!neutral.is_empty(), "{theme} neutral list empty");
                }
                KeywordSet::Flat(_) => panic!("per-polarity catalog holds flat set"),
            }
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        // Matching lowercases the text only, so keywords must already be
        // lowercase or they can never match.
        for (_, keywords) in FLAT_CATALOG {
            for kw in *keywords {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
    }
}
