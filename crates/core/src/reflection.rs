//! Reflection field names and validation.
//!
//! The my-page carries five free-text sections a student fills in over the
//! course of the program (inquiry task, hypothesis, learning report, factor
//! analysis, summary) plus a link to their presentation material. Each
//! section saves independently, one field per request.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const FIELD_INQUIRY_CONTENT: &str = "inquiry_content";
pub const FIELD_HYPOTHESIS: &str = "hypothesis";
pub const FIELD_LEARNING_REPORT: &str = "learning_report";
pub const FIELD_FACTOR_ANALYSIS: &str = "factor_analysis";
pub const FIELD_SUMMARY: &str = "summary";

/// All saveable reflection field names.
pub const VALID_REFLECTION_FIELDS: &[&str] = &[
    FIELD_INQUIRY_CONTENT,
    FIELD_HYPOTHESIS,
    FIELD_LEARNING_REPORT,
    FIELD_FACTOR_ANALYSIS,
    FIELD_SUMMARY,
];

/// Maximum length for a reflection section in characters.
pub const MAX_REFLECTION_LENGTH: usize = 10_000;

/// Maximum length for the presentation URL.
pub const MAX_PRESENTATION_URL_LENGTH: usize = 2_048;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// One of the five reflection sections.
///
/// `as_str` doubles as the column name in the `users` table, so the DB
/// layer can interpolate it into UPDATE statements without user input ever
/// reaching the SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionField {
    InquiryContent,
    Hypothesis,
    LearningReport,
    FactorAnalysis,
    Summary,
}

impl ReflectionField {
    /// Convert from the field name used in API paths.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            FIELD_INQUIRY_CONTENT => Ok(Self::InquiryContent),
            FIELD_HYPOTHESIS => Ok(Self::Hypothesis),
            FIELD_LEARNING_REPORT => Ok(Self::LearningReport),
            FIELD_FACTOR_ANALYSIS => Ok(Self::FactorAnalysis),
            FIELD_SUMMARY => Ok(Self::Summary),
            _ => Err(format!(
                "Invalid reflection field '{s}'. Must be one of: {}",
                VALID_REFLECTION_FIELDS.join(", ")
            )),
        }
    }

    /// Field name / `users` column name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InquiryContent => FIELD_INQUIRY_CONTENT,
            Self::Hypothesis => FIELD_HYPOTHESIS,
            Self::LearningReport => FIELD_LEARNING_REPORT,
            Self::FactorAnalysis => FIELD_FACTOR_ANALYSIS,
            Self::Summary => FIELD_SUMMARY,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate reflection content length. Empty content is allowed (clearing
/// a section is a normal save).
pub fn validate_reflection_content(content: &str) -> Result<(), String> {
    if content.chars().count() > MAX_REFLECTION_LENGTH {
        return Err(format!(
            "Content exceeds maximum length of {MAX_REFLECTION_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a presentation material URL: http(s) scheme, bounded length.
pub fn validate_presentation_url(url: &str) -> Result<(), String> {
    if url.len() > MAX_PRESENTATION_URL_LENGTH {
        return Err(format!(
            "URL exceeds maximum length of {MAX_PRESENTATION_URL_LENGTH} characters"
        ));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_from_str_round_trip() {
        for name in VALID_REFLECTION_FIELDS {
            let field = ReflectionField::from_str_value(name).unwrap();
            assert_eq!(field.as_str(), *name);
        }
    }

    #[test]
    fn field_from_str_invalid() {
        let result = ReflectionField::from_str_value("diary");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid reflection field"));
    }

    #[test]
    fn empty_content_is_valid() {
        assert!(validate_reflection_content("").is_ok());
    }

    #[test]
    fn content_at_limit_is_valid() {
        let content = "a".repeat(MAX_REFLECTION_LENGTH);
        assert!(validate_reflection_content(&content).is_ok());
    }

    #[test]
    fn content_over_limit_is_rejected() {
        let content = "a".repeat(MAX_REFLECTION_LENGTH + 1);
        assert!(validate_reflection_content(&content).is_err());
    }

    #[test]
    fn https_url_is_valid() {
        assert!(validate_presentation_url("https://docs.google.com/presentation/d/abc").is_ok());
    }

    #[test]
    fn non_http_url_is_rejected() {
        assert!(validate_presentation_url("ftp://example.com/slides").is_err());
        assert!(validate_presentation_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn overlong_url_is_rejected() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_PRESENTATION_URL_LENGTH));
        assert!(validate_presentation_url(&url).is_err());
    }
}
