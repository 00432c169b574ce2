//! Static catalog of the optional product identifier fields and the
//! free-text filter the identifier picker runs over it.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

/// One of the optional product identifier properties a user may opt into.
///
/// The wire key doubles as the JSON-LD property name in the projected
/// document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKey {
    Sku,
    Gtin8,
    Gtin13,
    Gtin14,
    Mpn,
    Isbn,
}

impl IdentifierKey {
    /// All identifier fields in canonical display order.
    pub const ALL: [IdentifierKey; 6] = [
        IdentifierKey::Sku,
        IdentifierKey::Gtin8,
        IdentifierKey::Gtin13,
        IdentifierKey::Gtin14,
        IdentifierKey::Mpn,
        IdentifierKey::Isbn,
    ];

    /// Wire key, also the emitted JSON-LD property name.
    pub fn key(self) -> &'static str {
        match self {
            IdentifierKey::Sku => "sku",
            IdentifierKey::Gtin8 => "gtin8",
            IdentifierKey::Gtin13 => "gtin13",
            IdentifierKey::Gtin14 => "gtin14",
            IdentifierKey::Mpn => "mpn",
            IdentifierKey::Isbn => "isbn",
        }
    }

    /// Display label shown in the picker.
    pub fn label(self) -> &'static str {
        match self {
            IdentifierKey::Sku => "SKU",
            IdentifierKey::Gtin8 => "GTIN-8",
            IdentifierKey::Gtin13 => "GTIN-13",
            IdentifierKey::Gtin14 => "GTIN-14",
            IdentifierKey::Mpn => "MPN",
            IdentifierKey::Isbn => "ISBN",
        }
    }

    /// Parse a wire key back into its variant. Used at stringly boundaries
    /// (CLI arguments, wasm calls); unknown keys are reported there, not
    /// silently dropped.
    pub fn parse(value: &str) -> Option<IdentifierKey> {
        IdentifierKey::ALL.into_iter().find(|k| k.key() == value)
    }
}

/// A selectable entry in the identifier picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdentifierOption {
    pub label: &'static str,
    pub value: IdentifierKey,
}

/// The full option list in display order.
pub fn options() -> Vec<IdentifierOption> {
    IdentifierKey::ALL
        .into_iter()
        .map(|value| IdentifierOption {
            label: value.label(),
            value,
        })
        .collect()
}

/// Filter the option list by a free-text query.
///
/// Empty query returns every option. Otherwise an option matches when its
/// label contains the query case-insensitively; the query is treated as
/// literal text, so pattern metacharacters in it have no special meaning.
pub fn filter_options(query: &str) -> Vec<IdentifierOption> {
    if query.is_empty() {
        return options();
    }

    // Escaped literal, so the pattern always compiles.
    let matcher = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .unwrap();

    options()
        .into_iter()
        .filter(|option| matcher.is_match(option.label))
        .collect()
}
