//! Script-element wrapper around the projected document.

use ldcraft_form::FormState;
use serde_json::Value;

use crate::document::project;

/// Wrap a projected document in the script element a host page embeds.
///
/// The body is pretty-printed with two-space indentation so the snippet
/// diffs cleanly when pasted into templates.
pub fn embed_script(document: &Value) -> String {
    let body = serde_json::to_string_pretty(document)
        .expect("a JSON value serializes without error");
    format!("<script type=\"application/ld+json\">\n{}\n</script>", body)
}

/// Project the state and wrap it in one call.
pub fn snippet(state: &FormState) -> String {
    embed_script(&project(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_shape() {
        let snippet = snippet(&FormState::default());

        assert!(snippet.starts_with("<script type=\"application/ld+json\">\n"));
        assert!(snippet.ends_with("\n</script>"));
    }

    #[test]
    fn test_body_is_pretty_printed() {
        let state = FormState {
            product_name: "Shoe".to_string(),
            ..FormState::default()
        };

        let snippet = snippet(&state);

        assert!(snippet.contains("  \"@context\": \"https://schema.org/\""));
        assert!(snippet.contains("  \"name\": \"Shoe\""));
    }

    #[test]
    fn test_embedded_body_round_trips() {
        let state = FormState {
            brand: "Acme".to_string(),
            ..FormState::default()
        };

        let snippet = snippet(&state);
        let body = snippet
            .strip_prefix("<script type=\"application/ld+json\">\n")
            .and_then(|s| s.strip_suffix("\n</script>"))
            .unwrap();

        let parsed: Value = serde_json::from_str(body).unwrap();
        assert_eq!(parsed, project(&state));
    }
}
