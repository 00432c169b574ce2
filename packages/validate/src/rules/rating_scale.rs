use crate::diagnostic::{Diagnostic, FieldPath};
use crate::rules::ValidationRule;
use ldcraft_form::FormState;

/// Validation rule for the review rating scale bounds.
///
/// Each bound must sit in [1, 5]. An inverted scale (floor above ceiling)
/// is surfaced as a warning rather than rejected or clamped: rejecting
/// would make one bound un-editable until the other moves, and the
/// mutation layer never rewrites user input.
pub struct RatingScaleRule;

impl ValidationRule for RatingScaleRule {
    fn name(&self) -> &'static str {
        "rating-scale"
    }

    fn description(&self) -> &'static str {
        "Keep both rating scale bounds in [1, 5] and warn on an inverted scale"
    }

    fn check(&self, state: &FormState) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (value, field) in [
            (
                state.highest_rating_allowed,
                FieldPath::HighestRatingAllowed,
            ),
            (state.lowest_rating_allowed, FieldPath::LowestRatingAllowed),
        ] {
            if value < 1.0 {
                diagnostics.push(Diagnostic::error(
                    "rating-scale",
                    "The value must be at least 1",
                    field,
                ));
            }
            if value > 5.0 {
                diagnostics.push(Diagnostic::error(
                    "rating-scale",
                    "The value must be at most 5",
                    field,
                ));
            }
        }

        if state.lowest_rating_allowed > state.highest_rating_allowed {
            diagnostics.push(Diagnostic::warning(
                "rating-scale",
                format!(
                    "Lowest rating allowed ({}) is greater than highest rating allowed ({})",
                    state.lowest_rating_allowed, state.highest_rating_allowed
                ),
                FieldPath::LowestRatingAllowed,
            ));
        }

        diagnostics
    }
}
