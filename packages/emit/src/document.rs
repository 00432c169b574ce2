//! Projection of form state into a schema.org `Product` document.

use ldcraft_form::{FormState, Review};
use serde_json::{json, Map, Value};
use tracing::debug;

const SCHEMA_CONTEXT: &str = "https://schema.org/";

/// Project the form state into a JSON-LD `Product` document.
///
/// Key order is fixed: context and type first, then the always-present
/// product fields, then one property per selected identifier in selection
/// order, then `brand`, `aggregateRating`, and — only when reviews exist —
/// the `review` array.
pub fn project(state: &FormState) -> Value {
    let mut doc = Map::new();

    doc.insert("@context".to_string(), json!(SCHEMA_CONTEXT));
    doc.insert("@type".to_string(), json!("Product"));
    doc.insert("name".to_string(), json!(trim(&state.product_name)));
    doc.insert("image".to_string(), json!(trim(&state.image_url)));
    doc.insert("description".to_string(), json!(trim(&state.description)));

    // Selected identifiers merge in at the top level, siblings of `name`.
    // An empty value still emits: the user opted the property in.
    for key in &state.selected_identifiers {
        doc.insert(
            key.key().to_string(),
            json!(trim(state.identifier_value(*key))),
        );
    }

    doc.insert(
        "brand".to_string(),
        json!({
            "@type": "Brand",
            "name": trim(&state.brand),
        }),
    );

    let mut aggregate = Map::new();
    aggregate.insert("@type".to_string(), json!("AggregateRating"));
    aggregate.insert("ratingValue".to_string(), number(state.rating_value));
    aggregate.insert("reviewCount".to_string(), number(state.rating_count));
    aggregate.insert("bestRating".to_string(), number(state.highest_rating_allowed));
    aggregate.insert("worstRating".to_string(), number(state.lowest_rating_allowed));
    doc.insert("aggregateRating".to_string(), Value::Object(aggregate));

    // No reviews means no `review` key at all, not an empty array.
    if !state.reviews.is_empty() {
        let reviews: Vec<Value> = state
            .reviews
            .iter()
            .map(|review| project_review(review, state))
            .collect();
        doc.insert("review".to_string(), Value::Array(reviews));
    }

    debug!(
        reviews = state.reviews.len(),
        identifiers = state.selected_identifiers.len(),
        "Projected product document"
    );

    Value::Object(doc)
}

fn project_review(review: &Review, state: &FormState) -> Value {
    let mut doc = Map::new();

    doc.insert("@type".to_string(), json!("Review"));
    doc.insert("name".to_string(), json!(trim(&review.review_title)));
    doc.insert("reviewBody".to_string(), json!(trim(&review.review_body)));

    // An unrated review carries no Rating object.
    if review.rating > 0.0 {
        doc.insert(
            "reviewRating".to_string(),
            Value::Object(Map::from_iter([
                ("@type".to_string(), json!("Rating")),
                ("ratingValue".to_string(), number(review.rating)),
                ("bestRating".to_string(), number(state.highest_rating_allowed)),
                ("worstRating".to_string(), number(state.lowest_rating_allowed)),
            ])),
        );
    }

    doc.insert("datePublished".to_string(), json!(trim(&review.date)));
    doc.insert(
        "author".to_string(),
        json!({
            "@type": "Person",
            "name": trim(&review.author),
        }),
    );
    doc.insert(
        "publisher".to_string(),
        json!({
            "@type": "Organization",
            "name": trim(&review.publisher),
        }),
    );

    Value::Object(doc)
}

fn trim(value: &str) -> &str {
    value.trim()
}

// Whole values emit as integers (4, not 4.0) so the serialized text stays
// stable across state round-trips.
fn number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}
