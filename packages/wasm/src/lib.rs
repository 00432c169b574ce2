use ldcraft_form::{IdentifierKey, Mutation};
use ldcraft_session::FormSession;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// A live form session driven from a host page.
///
/// Field names at this boundary are the camelCase wire names
/// (`productName`, `ratingValue`, `sku`, `inputValue`, ...). Unknown
/// names are reported as errors — never silently dropped. Setters return
/// `true` when the edit was applied and `false` when the keystroke guard
/// ignored it.
#[wasm_bindgen]
pub struct FormApp {
    session: FormSession,
}

impl Default for FormApp {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl FormApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FormApp {
        FormApp {
            session: FormSession::new(),
        }
    }

    /// Apply a top-level field edit
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<bool, JsValue> {
        let mutation =
            Mutation::for_field(name, value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.session.apply(mutation).is_applied())
    }

    /// Toggle an identifier field on or off
    #[wasm_bindgen(js_name = toggleIdentifier)]
    pub fn toggle_identifier(&mut self, key: &str) -> Result<bool, JsValue> {
        let key = parse_key(key)?;
        Ok(self
            .session
            .apply(Mutation::ToggleIdentifier { key })
            .is_applied())
    }

    /// Deactivate an identifier field
    #[wasm_bindgen(js_name = removeIdentifier)]
    pub fn remove_identifier(&mut self, key: &str) -> Result<bool, JsValue> {
        let key = parse_key(key)?;
        Ok(self
            .session
            .apply(Mutation::RemoveIdentifier { key })
            .is_applied())
    }

    /// Append an empty review
    #[wasm_bindgen(js_name = addReview)]
    pub fn add_review(&mut self) -> bool {
        self.session.apply(Mutation::AddReview).is_applied()
    }

    /// Remove the review at `index` (out of range is a no-op)
    #[wasm_bindgen(js_name = removeReview)]
    pub fn remove_review(&mut self, index: usize) -> bool {
        self.session
            .apply(Mutation::RemoveReview { index })
            .is_applied()
    }

    /// Apply a review sub-field edit
    #[wasm_bindgen(js_name = setReviewField)]
    pub fn set_review_field(
        &mut self,
        index: usize,
        name: &str,
        value: &str,
    ) -> Result<bool, JsValue> {
        let mutation = Mutation::for_review_field(index, name, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.session.apply(mutation).is_applied())
    }

    /// Current state as JSON
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.state())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Current diagnostics as JSON
    #[wasm_bindgen(js_name = diagnosticsJson)]
    pub fn diagnostics_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.diagnostics())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Projected JSON-LD document, pretty-printed
    #[wasm_bindgen(js_name = documentJson)]
    pub fn document_json(&self) -> Result<String, JsValue> {
        serde_json::to_string_pretty(&self.session.document())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// The embeddable script snippet
    pub fn snippet(&self) -> String {
        self.session.snippet()
    }

    /// Identifier picker options under the current filter, as JSON
    #[wasm_bindgen(js_name = filteredOptionsJson)]
    pub fn filtered_options_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.filtered_options())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

fn parse_key(key: &str) -> Result<IdentifierKey, JsValue> {
    IdentifierKey::parse(key)
        .ok_or_else(|| JsValue::from_str(&format!("unknown identifier key: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_applies_and_guards() {
        let mut app = FormApp::new();

        assert!(app.set_field("productName", "Shoe").unwrap());
        // Guarded keystroke: reported as not-applied, not as an error.
        assert!(!app.set_field("ratingCount", "-5").unwrap());
    }

    #[test]
    fn test_review_flow() {
        let mut app = FormApp::new();

        assert!(app.add_review());
        assert!(app.set_review_field(0, "reviewTitle", "Great").unwrap());
        assert!(app.set_review_field(0, "rating", "5").unwrap());
        // Out-of-range index: quietly not applied.
        assert!(!app.set_review_field(7, "rating", "5").unwrap());

        let snippet = app.snippet();
        assert!(snippet.contains("\"name\": \"Great\""));
    }

    #[test]
    fn test_toggle_and_filter() {
        let mut app = FormApp::new();

        app.set_field("inputValue", "gtin").unwrap();
        let options = app.filtered_options_json().unwrap();
        assert!(options.contains("GTIN-8"));
        assert!(!options.contains("SKU"));

        assert!(app.toggle_identifier("gtin8").unwrap());

        let state = app.state_json().unwrap();
        assert!(state.contains("\"selectedOptions\":[\"gtin8\"]"));
    }

    #[test]
    fn test_diagnostics_surface() {
        let mut app = FormApp::new();

        app.set_field("imageUrl", "not-an-image").unwrap();

        let diagnostics = app.diagnostics_json().unwrap();
        assert!(diagnostics.contains("Invalid image URL"));
    }
}
