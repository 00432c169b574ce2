//! # Form State
//!
//! The canonical in-memory representation of the product form.
//!
//! One `FormState` exists per editing session. It is owned exclusively by
//! the session driving it and mutated only through [`crate::Mutation`].
//! The serde representation uses camelCase keys so state files read the
//! way the emitted JSON-LD properties do (`productName`, `ratingValue`,
//! `selectedOptions`, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::registry::IdentifierKey;

/// Root form state: product details, rating scale, and reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    pub product_name: String,
    pub image_url: String,
    pub brand: String,
    pub description: String,

    /// Values entered for the optional identifier fields. A key with no
    /// entry reads as the empty string.
    pub identifier_values: BTreeMap<IdentifierKey, String>,

    /// Identifier fields the user has opted into, in selection order.
    /// Order matters for display only; the projection emits one property
    /// per entry either way.
    #[serde(rename = "selectedOptions")]
    pub selected_identifiers: Vec<IdentifierKey>,

    /// Aggregate rating value, guarded to `(0, 5]` at entry.
    pub rating_value: f64,

    /// Number of ratings behind the aggregate, guarded to `>= 0` at entry.
    pub rating_count: f64,

    /// Upper bound of the review rating scale, guarded to `[1, 5]`.
    pub highest_rating_allowed: f64,

    /// Lower bound of the review rating scale, guarded to `[1, 5]`.
    pub lowest_rating_allowed: f64,

    /// Reviews in creation order. Creation order is display order.
    pub reviews: Vec<Review>,

    /// Transient filter text for the identifier picker. Never projected.
    #[serde(rename = "inputValue")]
    pub identifier_filter: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            image_url: String::new(),
            brand: String::new(),
            description: String::new(),
            identifier_values: BTreeMap::new(),
            selected_identifiers: Vec::new(),
            rating_value: 0.0,
            rating_count: 0.0,
            highest_rating_allowed: 5.0,
            lowest_rating_allowed: 1.0,
            reviews: Vec::new(),
            identifier_filter: String::new(),
        }
    }
}

impl FormState {
    /// Value entered for an identifier field, or `""` when none was.
    pub fn identifier_value(&self, key: IdentifierKey) -> &str {
        self.identifier_values
            .get(&key)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Whether an identifier field is currently active.
    pub fn is_selected(&self, key: IdentifierKey) -> bool {
        self.selected_identifiers.contains(&key)
    }
}

/// A single customer review. Owned by its `FormState`; a review has no
/// identity outside its position in the list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
    pub review_title: String,
    pub review_body: String,
    /// Expected to sit within the owning state's rating scale. The bound
    /// is checked by the validation engine, not here: the scale can move
    /// after the rating was entered.
    pub rating: f64,
    pub date: String,
    pub author: String,
    pub publisher: String,
}
