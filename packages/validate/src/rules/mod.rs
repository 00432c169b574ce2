mod aggregate_rating;
mod image_url;
mod rating_scale;
mod review_rating;

pub use aggregate_rating::AggregateRatingRule;
pub use image_url::ImageUrlRule;
pub use rating_scale::RatingScaleRule;
pub use review_rating::{check_review_ratings, ReviewRatingRule};

use crate::diagnostic::Diagnostic;
use ldcraft_form::FormState;

/// Trait for implementing validation rules
pub trait ValidationRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check the form state
    fn check(&self, state: &FormState) -> Vec<Diagnostic>;
}

/// Registry of all available validation rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(ImageUrlRule),
                Box::new(AggregateRatingRule),
                Box::new(RatingScaleRule),
                Box::new(ReviewRatingRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn ValidationRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
