//! Human-readable theme descriptions.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use revlens_core::Theme;

/// Description templates for the rendered summary. Themes without an
/// entry fall back to the title-cased identifier.
static DESCRIPTIONS: Lazy<HashMap<Theme, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        Theme::WorkCulture,
        "Strong company culture and positive work environment",
    );
    m.insert(Theme::Leadership, "Effective leadership and management team");
    m.insert(
        Theme::Compensation,
        "Competitive compensation and benefits package",
    );
    m.insert(
        Theme::WorkLifeBalance,
        "Good work-life balance and flexible scheduling",
    );
    m.insert(
        Theme::CareerGrowth,
        "Excellent career growth and learning opportunities",
    );
    m.insert(
        Theme::Innovation,
        "Strong focus on innovation and modern technologies",
    );
    m.insert(Theme::JobSecurity, "Good job security and stability");
    m.insert(
        Theme::OfficeEnvironment,
        "Well-designed and comfortable office space",
    );
    m.insert(
        Theme::DiversityInclusion,
        "Inclusive workplace with strong diversity initiatives",
    );
    m.insert(
        Theme::ProjectManagement,
        "Effective project management practices",
    );
    m
});

/// Description template for a theme, falling back to the title-cased
/// identifier when no template exists.
pub fn describe(theme: Theme) -> String {
    match DESCRIPTIONS.get(&theme) {
        Some(text) => (*text).to_string(),
        None => theme.display_name(),
    }
}

/// Rendered summary line: `"<description> (<pct>% of reviews)"` with
/// one decimal of precision.
pub fn render(theme: Theme, percentage: f64) -> String {
    format!("{} ({:.1}% of reviews)", describe(theme), percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_theme() {
        assert_eq!(
            render(Theme::Compensation, 80.0),
            "Competitive compensation and benefits package (80.0% of reviews)"
        );
    }

    #[test]
    fn test_fallback_is_title_cased_identifier() {
        // team_dynamics and company_performance have no template.
        assert_eq!(describe(Theme::TeamDynamics), "Team Dynamics");
        assert_eq!(
            render(Theme::CompanyPerformance, 33.333),
            "Company Performance (33.3% of reviews)"
        );
    }
}
