use crate::diagnostic::{Diagnostic, FieldPath};
use crate::rules::ValidationRule;
use ldcraft_form::FormState;
use regex::Regex;

/// Validation rule that requires the image URL to point at an image file
pub struct ImageUrlRule;

impl ValidationRule for ImageUrlRule {
    fn name(&self) -> &'static str {
        "image-url"
    }

    fn description(&self) -> &'static str {
        "Require image URLs to be absolute http(s) URLs ending in an image extension"
    }

    fn check(&self, state: &FormState) -> Vec<Diagnostic> {
        // Empty is valid: the field is optional and projects as "".
        if state.image_url.trim().is_empty() {
            return Vec::new();
        }

        // scheme + host/path + image extension, optional query string
        let re =
            Regex::new(r"(?i)^https?://[^\s]+\.(jpe?g|png|gif|webp|avif|svg)(\?[^\s]*)?$")
                .unwrap();

        if re.is_match(state.image_url.trim()) {
            Vec::new()
        } else {
            vec![Diagnostic::error(
                "image-url",
                "Invalid image URL",
                FieldPath::ImageUrl,
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> FormState {
        FormState {
            image_url: url.to_string(),
            ..FormState::default()
        }
    }

    #[test]
    fn test_empty_url_is_valid() {
        let rule = ImageUrlRule;
        assert!(rule.check(&with_url("")).is_empty());
        assert!(rule.check(&with_url("   ")).is_empty());
    }

    #[test]
    fn test_accepts_image_urls() {
        let rule = ImageUrlRule;
        assert!(rule.check(&with_url("https://x.com/a.jpg")).is_empty());
        assert!(rule.check(&with_url("http://cdn.example.org/img/shoe.PNG")).is_empty());
        assert!(rule.check(&with_url("https://x.com/a.webp?v=2")).is_empty());
    }

    #[test]
    fn test_rejects_non_image_urls() {
        let rule = ImageUrlRule;

        for url in [
            "https://x.com/a.txt",
            "ftp://x.com/a.jpg",
            "x.com/a.jpg",
            "not a url",
        ] {
            let diagnostics = rule.check(&with_url(url));
            assert_eq!(diagnostics.len(), 1, "expected rejection for {url}");
            assert_eq!(diagnostics[0].rule, "image-url");
            assert_eq!(diagnostics[0].message, "Invalid image URL");
            assert_eq!(diagnostics[0].field, FieldPath::ImageUrl);
        }
    }
}
