//! # LDCraft Form
//!
//! Core form state engine for LDCraft.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ form: FormState + mutations                 │
//! │  - One state instance per session           │
//! │  - All writes go through Mutation::apply    │
//! │  - Guarded numeric entry (bad input is a    │
//! │    no-op, never an error)                   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ validate: FormState → diagnostics           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ emit: FormState → JSON-LD document          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **State is source of truth**: diagnostics and the projected document
//!    are derived views, recomputed on demand
//! 2. **Tagged field updates**: fields are addressed by closed enums, so an
//!    invalid field name cannot compile
//! 3. **Keystroke tolerance**: malformed or out-of-bound numeric input is
//!    silently ignored at the mutation boundary, keeping the prior value
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ldcraft_form::{FormState, Mutation, TextField};
//!
//! let mut state = FormState::default();
//! let mutation = Mutation::SetText {
//!     field: TextField::ProductName,
//!     value: "Running Shoe".to_string(),
//! };
//! mutation.apply(&mut state);
//! ```

mod mutations;
mod registry;
mod state;

pub use mutations::{
    IgnoreReason, Mutation, MutationOutcome, NumberField, ReviewTextField, TextField,
    UnknownField,
};
pub use registry::{filter_options, options, IdentifierKey, IdentifierOption};
pub use state::{FormState, Review};
