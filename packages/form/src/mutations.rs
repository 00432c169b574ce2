//! # Form Mutations
//!
//! High-level semantic operations on the form state.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents one user edit
//! 2. **Tagged**: Fields are addressed by closed enums, never by string
//! 3. **Never fatal**: Rejected input is an observable no-op, not an error
//! 4. **Trim-late**: Text is stored raw; trimming happens at projection
//!
//! ## Mutation Semantics
//!
//! ### SetNumber / SetReviewRating
//! - Raw keystrokes are parsed as f64
//! - Non-numeric or non-finite input is ignored, keeping the prior value
//! - `SetNumber` additionally enforces per-field hard bounds at entry;
//!   review ratings have no hard bound — scale conformance is the
//!   validation engine's concern, since the scale can move afterwards
//!
//! ### ToggleIdentifier
//! - Adds the key when absent, removes it when present
//! - Applying it twice restores the original selection
//! - Always clears the picker filter text
//!
//! ### RemoveReview
//! - Out-of-range indices are a no-op, never a panic

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::IdentifierKey;
use crate::state::{FormState, Review};

/// Plain text fields addressable at the top level of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    ProductName,
    ImageUrl,
    Brand,
    Description,
}

/// Numeric fields guarded at the mutation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberField {
    RatingValue,
    RatingCount,
    HighestRatingAllowed,
    LowestRatingAllowed,
}

/// Text sub-fields of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewTextField {
    Title,
    Body,
    Date,
    Author,
    Publisher,
}

/// A field name that no mutation maps to. Only produced at stringly
/// boundaries (CLI, wasm); inside the crate field names are enums.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown field name: {0}")]
pub struct UnknownField(pub String);

/// Semantic mutations (one per user edit)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Assign a top-level text field (stored raw, trimmed at projection)
    SetText { field: TextField, value: String },

    /// Assign a guarded numeric field from raw keystroke text
    SetNumber { field: NumberField, raw: String },

    /// Assign the value of an identifier field
    SetIdentifierValue { key: IdentifierKey, value: String },

    /// Activate or deactivate an identifier field; clears the picker filter
    ToggleIdentifier { key: IdentifierKey },

    /// Deactivate an identifier field unconditionally
    RemoveIdentifier { key: IdentifierKey },

    /// Update the identifier picker filter text
    SetIdentifierFilter { value: String },

    /// Append an empty review rated at the current scale floor
    AddReview,

    /// Remove the review at `index`
    RemoveReview { index: usize },

    /// Assign a text sub-field of the review at `index`
    SetReviewText {
        index: usize,
        field: ReviewTextField,
        value: String,
    },

    /// Assign the rating of the review at `index` from raw keystroke text
    SetReviewRating { index: usize, raw: String },
}

/// Why a mutation was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Raw input did not parse as a finite number
    NotANumber,
    /// Parsed number sits outside the field's hard bounds
    OutOfBounds,
    /// Review index does not name an existing review
    IndexOutOfRange,
}

/// Result of applying a mutation.
///
/// Nothing here is fatal: an ignored mutation leaves the state untouched
/// and the reason is only for presentation layers and tests to observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    Ignored(IgnoreReason),
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }
}

impl Mutation {
    /// Apply this mutation to the state.
    pub fn apply(&self, state: &mut FormState) -> MutationOutcome {
        match self {
            Mutation::SetText { field, value } => {
                let slot = match field {
                    TextField::ProductName => &mut state.product_name,
                    TextField::ImageUrl => &mut state.image_url,
                    TextField::Brand => &mut state.brand,
                    TextField::Description => &mut state.description,
                };
                *slot = value.clone();
                MutationOutcome::Applied
            }

            Mutation::SetNumber { field, raw } => match parse_guarded(*field, raw) {
                Ok(value) => {
                    let slot = match field {
                        NumberField::RatingValue => &mut state.rating_value,
                        NumberField::RatingCount => &mut state.rating_count,
                        NumberField::HighestRatingAllowed => &mut state.highest_rating_allowed,
                        NumberField::LowestRatingAllowed => &mut state.lowest_rating_allowed,
                    };
                    *slot = value;
                    MutationOutcome::Applied
                }
                Err(reason) => MutationOutcome::Ignored(reason),
            },

            Mutation::SetIdentifierValue { key, value } => {
                state.identifier_values.insert(*key, value.clone());
                MutationOutcome::Applied
            }

            Mutation::ToggleIdentifier { key } => {
                if let Some(pos) = state.selected_identifiers.iter().position(|k| k == key) {
                    state.selected_identifiers.remove(pos);
                } else {
                    state.selected_identifiers.push(*key);
                }
                state.identifier_filter.clear();
                MutationOutcome::Applied
            }

            Mutation::RemoveIdentifier { key } => {
                state.selected_identifiers.retain(|k| k != key);
                MutationOutcome::Applied
            }

            Mutation::SetIdentifierFilter { value } => {
                state.identifier_filter = value.clone();
                MutationOutcome::Applied
            }

            Mutation::AddReview => {
                // Scale floor, falling back to 1 when the floor is unset.
                let rating = if state.lowest_rating_allowed > 0.0 {
                    state.lowest_rating_allowed
                } else {
                    1.0
                };
                state.reviews.push(Review {
                    rating,
                    ..Review::default()
                });
                MutationOutcome::Applied
            }

            Mutation::RemoveReview { index } => {
                if *index >= state.reviews.len() {
                    return MutationOutcome::Ignored(IgnoreReason::IndexOutOfRange);
                }
                state.reviews.remove(*index);
                MutationOutcome::Applied
            }

            Mutation::SetReviewText {
                index,
                field,
                value,
            } => {
                let Some(review) = state.reviews.get_mut(*index) else {
                    return MutationOutcome::Ignored(IgnoreReason::IndexOutOfRange);
                };
                let slot = match field {
                    ReviewTextField::Title => &mut review.review_title,
                    ReviewTextField::Body => &mut review.review_body,
                    ReviewTextField::Date => &mut review.date,
                    ReviewTextField::Author => &mut review.author,
                    ReviewTextField::Publisher => &mut review.publisher,
                };
                *slot = value.clone();
                MutationOutcome::Applied
            }

            Mutation::SetReviewRating { index, raw } => {
                let Some(review) = state.reviews.get_mut(*index) else {
                    return MutationOutcome::Ignored(IgnoreReason::IndexOutOfRange);
                };
                match parse_finite(raw) {
                    Some(value) => {
                        review.rating = value;
                        MutationOutcome::Applied
                    }
                    None => MutationOutcome::Ignored(IgnoreReason::NotANumber),
                }
            }
        }
    }

    /// Build the mutation for a top-level field named at a stringly
    /// boundary. Accepts text fields, numeric fields, identifier keys, and
    /// the picker filter (`inputValue`).
    pub fn for_field(name: &str, value: &str) -> Result<Mutation, UnknownField> {
        let mutation = match name {
            "productName" => Mutation::SetText {
                field: TextField::ProductName,
                value: value.to_string(),
            },
            "imageUrl" => Mutation::SetText {
                field: TextField::ImageUrl,
                value: value.to_string(),
            },
            "brand" => Mutation::SetText {
                field: TextField::Brand,
                value: value.to_string(),
            },
            "description" => Mutation::SetText {
                field: TextField::Description,
                value: value.to_string(),
            },
            "ratingValue" => Mutation::SetNumber {
                field: NumberField::RatingValue,
                raw: value.to_string(),
            },
            "ratingCount" => Mutation::SetNumber {
                field: NumberField::RatingCount,
                raw: value.to_string(),
            },
            "highestRatingAllowed" => Mutation::SetNumber {
                field: NumberField::HighestRatingAllowed,
                raw: value.to_string(),
            },
            "lowestRatingAllowed" => Mutation::SetNumber {
                field: NumberField::LowestRatingAllowed,
                raw: value.to_string(),
            },
            "inputValue" => Mutation::SetIdentifierFilter {
                value: value.to_string(),
            },
            other => match IdentifierKey::parse(other) {
                Some(key) => Mutation::SetIdentifierValue {
                    key,
                    value: value.to_string(),
                },
                None => return Err(UnknownField(other.to_string())),
            },
        };
        Ok(mutation)
    }

    /// Build the mutation for a review sub-field named at a stringly
    /// boundary.
    pub fn for_review_field(
        index: usize,
        name: &str,
        value: &str,
    ) -> Result<Mutation, UnknownField> {
        let field = match name {
            "reviewTitle" => ReviewTextField::Title,
            "reviewBody" => ReviewTextField::Body,
            "date" => ReviewTextField::Date,
            "author" => ReviewTextField::Author,
            "publisher" => ReviewTextField::Publisher,
            "rating" => {
                return Ok(Mutation::SetReviewRating {
                    index,
                    raw: value.to_string(),
                })
            }
            other => return Err(UnknownField(other.to_string())),
        };
        Ok(Mutation::SetReviewText {
            index,
            field,
            value: value.to_string(),
        })
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_guarded(field: NumberField, raw: &str) -> Result<f64, IgnoreReason> {
    let value = parse_finite(raw).ok_or(IgnoreReason::NotANumber)?;

    let in_bounds = match field {
        NumberField::RatingValue => value > 0.0 && value <= 5.0,
        NumberField::RatingCount => value >= 0.0,
        NumberField::HighestRatingAllowed | NumberField::LowestRatingAllowed => {
            (1.0..=5.0).contains(&value)
        }
    };

    if in_bounds {
        Ok(value)
    } else {
        Err(IgnoreReason::OutOfBounds)
    }
}
