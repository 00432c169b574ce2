use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Error,
    Warning,
}

/// The form widget a diagnostic belongs to.
///
/// Review ratings are addressed by index: a review has no identity beyond
/// its position in the list, so diagnostics against it are positional too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldPath {
    ImageUrl,
    RatingValue,
    RatingCount,
    HighestRatingAllowed,
    LowestRatingAllowed,
    ReviewRating { index: usize },
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::ImageUrl => write!(f, "imageUrl"),
            FieldPath::RatingValue => write!(f, "ratingValue"),
            FieldPath::RatingCount => write!(f, "ratingCount"),
            FieldPath::HighestRatingAllowed => write!(f, "highestRatingAllowed"),
            FieldPath::LowestRatingAllowed => write!(f, "lowestRatingAllowed"),
            FieldPath::ReviewRating { index } => write!(f, "reviews[{}].rating", index),
        }
    }
}

/// A diagnostic message from the validation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level
    pub level: DiagnosticLevel,

    /// The rule that generated this diagnostic
    pub rule: String,

    /// The field the message should be displayed against
    pub field: FieldPath,

    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    pub fn error(rule: impl Into<String>, message: impl Into<String>, field: FieldPath) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            rule: rule.into(),
            field,
            message: message.into(),
        }
    }

    pub fn warning(rule: impl Into<String>, message: impl Into<String>, field: FieldPath) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            rule: rule.into(),
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_display() {
        assert_eq!(FieldPath::ImageUrl.to_string(), "imageUrl");
        assert_eq!(
            FieldPath::ReviewRating { index: 2 }.to_string(),
            "reviews[2].rating"
        );
    }

    #[test]
    fn test_diagnostic_serializes() {
        let diagnostic = Diagnostic::error(
            "image-url",
            "Invalid image URL",
            FieldPath::ImageUrl,
        );

        let json = serde_json::to_string(&diagnostic).unwrap();
        let back: Diagnostic = serde_json::from_str(&json).unwrap();

        assert_eq!(diagnostic, back);
    }
}
