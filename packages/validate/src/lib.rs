mod diagnostic;
mod rules;
mod validator;

pub use diagnostic::{Diagnostic, DiagnosticLevel, FieldPath};
pub use rules::{
    check_review_ratings, AggregateRatingRule, ImageUrlRule, RatingScaleRule, ReviewRatingRule,
    RuleRegistry, ValidationRule,
};
pub use validator::{validate, ValidateOptions};
