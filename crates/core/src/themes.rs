//! Well-known interest theme constants.
//!
//! The theme catalogue is fixed program-side; users pick exactly one on
//! their my-page. These must match the values stored in the `users.theme`
//! column and the options rendered by the frontend selector.

pub const THEME_DISASTER_PREVENTION: &str = "disaster_prevention";
pub const THEME_CHILD_SUPPORT: &str = "child_support";
pub const THEME_WELFARE_HEALTH: &str = "welfare_health";
pub const THEME_ENVIRONMENT: &str = "environment";
pub const THEME_COMMUNITY_REVITALIZATION: &str = "community_revitalization";
pub const THEME_POPULATION: &str = "population";
pub const THEME_CULTURE: &str = "culture";
pub const THEME_URBAN_INFRASTRUCTURE: &str = "urban_infrastructure";
pub const THEME_EDUCATION: &str = "education";

/// All selectable themes.
pub const VALID_THEMES: &[&str] = &[
    THEME_DISASTER_PREVENTION,
    THEME_CHILD_SUPPORT,
    THEME_WELFARE_HEALTH,
    THEME_ENVIRONMENT,
    THEME_COMMUNITY_REVITALIZATION,
    THEME_POPULATION,
    THEME_CULTURE,
    THEME_URBAN_INFRASTRUCTURE,
    THEME_EDUCATION,
];

/// Validate that a theme string is one of the catalogue values.
pub fn validate_theme(theme: &str) -> Result<(), String> {
    if VALID_THEMES.contains(&theme) {
        Ok(())
    } else {
        Err(format!(
            "Invalid theme '{theme}'. Must be one of: {}",
            VALID_THEMES.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_catalogue_themes_accepted() {
        for theme in VALID_THEMES {
            assert!(validate_theme(theme).is_ok());
        }
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let result = validate_theme("astronomy");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid theme"));
    }

    #[test]
    fn test_empty_theme_rejected() {
        assert!(validate_theme("").is_err());
    }

    #[test]
    fn test_catalogue_has_nine_themes() {
        assert_eq!(VALID_THEMES.len(), 9);
    }
}
