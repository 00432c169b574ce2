//! # Session Management
//!
//! One `FormSession` per user. The session owns the live `FormState`,
//! applies mutations, and keeps the diagnostics snapshot current. The
//! projected document and snippet are computed on demand — they are cheap
//! and always reflect the state exactly.

use ldcraft_emit::{project, snippet};
use ldcraft_form::{filter_options, FormState, IdentifierOption, Mutation, MutationOutcome};
use ldcraft_validate::{validate, Diagnostic, FieldPath, ValidateOptions};
use serde_json::Value;
use tracing::debug;

/// Live editing session over a single form state.
pub struct FormSession {
    /// The one live state. Reads go through [`FormSession::state`];
    /// writes only through [`FormSession::apply`].
    state: FormState,

    /// Current version number (increments on each applied mutation)
    version: u64,

    /// Diagnostics for the current state, refreshed after every applied
    /// mutation. The full rule pass includes the dependent review-rating
    /// check, so bound changes re-flag untouched reviews automatically.
    diagnostics: Vec<Diagnostic>,
}

impl FormSession {
    /// Start a session with default state.
    pub fn new() -> Self {
        Self::from_state(FormState::default())
    }

    /// Resume a session from an existing state (e.g. a loaded state file).
    pub fn from_state(state: FormState) -> Self {
        let diagnostics = validate(&state, ValidateOptions::default());
        Self {
            state,
            version: 0,
            diagnostics,
        }
    }

    /// Apply a mutation.
    ///
    /// Ignored mutations change nothing — not the state, not the version,
    /// not the diagnostics. Applied mutations bump the version and refresh
    /// the diagnostics snapshot.
    pub fn apply(&mut self, mutation: Mutation) -> MutationOutcome {
        let outcome = mutation.apply(&mut self.state);

        match outcome {
            MutationOutcome::Applied => {
                self.version += 1;
                self.diagnostics = validate(&self.state, ValidateOptions::default());
                debug!(
                    version = self.version,
                    diagnostics = self.diagnostics.len(),
                    "Applied mutation"
                );
            }
            MutationOutcome::Ignored(reason) => {
                debug!(?reason, "Ignored mutation");
            }
        }

        outcome
    }

    /// Current state (read-only).
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Version number, incremented once per applied mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Diagnostics for the current state.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics attached to one field, for rendering next to its widget.
    pub fn diagnostics_for(&self, field: FieldPath) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.field == field)
            .collect()
    }

    /// Project the current state into the JSON-LD document.
    pub fn document(&self) -> Value {
        project(&self.state)
    }

    /// The embeddable script snippet for the current state.
    pub fn snippet(&self) -> String {
        snippet(&self.state)
    }

    /// Identifier picker options under the current filter text.
    pub fn filtered_options(&self) -> Vec<IdentifierOption> {
        filter_options(&self.state.identifier_filter)
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
