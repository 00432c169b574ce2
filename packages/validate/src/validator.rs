use crate::diagnostic::Diagnostic;
use crate::rules::RuleRegistry;
use ldcraft_form::FormState;

/// Options for configuring validation
#[derive(Debug)]
pub struct ValidateOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self { registry: None }
    }
}

/// Validate a form state and return diagnostics.
///
/// Runs on every state change — there is no submit step, the form is
/// live. A failing rule never rolls state back; the offending value stays
/// in place alongside its message so the user can correct it.
pub fn validate(state: &FormState, options: ValidateOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let mut diagnostics = Vec::new();

    for rule in registry.rules() {
        diagnostics.extend(rule.check(state));
    }

    diagnostics
}
