use crate::diagnostic::{Diagnostic, FieldPath};
use crate::rules::ValidationRule;
use ldcraft_form::FormState;

/// Validation rule for per-review ratings against the current scale.
///
/// This is the one dependent rule in the engine: a review rating that was
/// valid when entered can become invalid when either scale bound moves or
/// reviews shift position. [`check_review_ratings`] is the directly
/// callable form sessions use after such changes; the registry wires the
/// same check into the full pass.
pub struct ReviewRatingRule;

impl ValidationRule for ReviewRatingRule {
    fn name(&self) -> &'static str {
        "review-rating"
    }

    fn description(&self) -> &'static str {
        "Keep every review rating within the current scale bounds"
    }

    fn check(&self, state: &FormState) -> Vec<Diagnostic> {
        check_review_ratings(state)
    }
}

/// Re-check every review rating against the current scale bounds.
///
/// Call after a scale bound changes or the review list gains/loses
/// entries; diagnostics are positional and must be rebuilt even for
/// reviews that were not edited.
pub fn check_review_ratings(state: &FormState) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (index, review) in state.reviews.iter().enumerate() {
        if review.rating < state.lowest_rating_allowed {
            diagnostics.push(Diagnostic::error(
                "review-rating",
                format!("Rating must be at least {}", state.lowest_rating_allowed),
                FieldPath::ReviewRating { index },
            ));
        }
        if review.rating > state.highest_rating_allowed {
            diagnostics.push(Diagnostic::error(
                "review-rating",
                format!("Rating must be at most {}", state.highest_rating_allowed),
                FieldPath::ReviewRating { index },
            ));
        }
    }

    diagnostics
}
