use crate::diagnostic::{Diagnostic, FieldPath};
use crate::rules::ValidationRule;
use ldcraft_form::FormState;

/// Validation rule for the aggregate rating value and count.
///
/// The mutation boundary already guards these ranges at entry; the rule is
/// kept as a second layer so a state loaded from elsewhere (a state file,
/// a wire payload) is still checked.
pub struct AggregateRatingRule;

impl ValidationRule for AggregateRatingRule {
    fn name(&self) -> &'static str {
        "aggregate-rating"
    }

    fn description(&self) -> &'static str {
        "Keep the aggregate rating in [0, 5] and the rating count non-negative"
    }

    fn check(&self, state: &FormState) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if state.rating_value < 0.0 {
            diagnostics.push(Diagnostic::error(
                "aggregate-rating",
                "Rating must be at least 0",
                FieldPath::RatingValue,
            ));
        }
        if state.rating_value > 5.0 {
            diagnostics.push(Diagnostic::error(
                "aggregate-rating",
                "Rating must be at most 5",
                FieldPath::RatingValue,
            ));
        }
        if state.rating_count < 0.0 {
            diagnostics.push(Diagnostic::error(
                "aggregate-rating",
                "Number of rating cannot be negative",
                FieldPath::RatingCount,
            ));
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_clean() {
        assert!(AggregateRatingRule.check(&FormState::default()).is_empty());
    }

    #[test]
    fn test_flags_out_of_range_loaded_state() {
        // Unreachable through mutations, reachable through a state file.
        let state = FormState {
            rating_value: 6.0,
            rating_count: -1.0,
            ..FormState::default()
        };

        let diagnostics = AggregateRatingRule.check(&state);

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].message, "Rating must be at most 5");
        assert_eq!(diagnostics[0].field, FieldPath::RatingValue);
        assert_eq!(diagnostics[1].message, "Number of rating cannot be negative");
        assert_eq!(diagnostics[1].field, FieldPath::RatingCount);
    }
}
