//! # Form Session
//!
//! The live editing session tying the form engine together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ session: FormSession                        │
//! │  - Owns the one live FormState              │
//! │  - Routes every write through Mutation      │
//! │  - Refreshes diagnostics after each edit    │
//! └─────────────────────────────────────────────┘
//!          ↓                       ↓
//! ┌──────────────────┐   ┌──────────────────────┐
//! │ validate:        │   │ emit:                │
//! │ state → messages │   │ state → JSON-LD      │
//! └──────────────────┘   └──────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Single source of truth**: diagnostics and the document are derived
//!    views over the one state, never parallel copies kept in sync
//! 2. **Synchronous**: one edit at a time on one thread; every apply
//!    completes before the next is handled
//! 3. **Never fatal**: ignored input and validation failures are surfaced,
//!    not thrown

mod session;

pub use session::FormSession;

// Re-export the types a presentation layer needs to drive a session.
pub use ldcraft_form::{
    FormState, IdentifierKey, IdentifierOption, IgnoreReason, Mutation, MutationOutcome,
    NumberField, Review, ReviewTextField, TextField,
};
pub use ldcraft_validate::{Diagnostic, DiagnosticLevel, FieldPath};
