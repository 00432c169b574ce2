//! # LDCraft Emit
//!
//! Pure projection of form state into a schema.org `Product` JSON-LD
//! document, plus the script-element wrapper used for embedding.
//!
//! Projection is deterministic and side-effect free: equal states produce
//! byte-identical serialized output, so callers can safely re-project on
//! every state change.

mod document;
mod embed;

pub use document::project;
pub use embed::{embed_script, snippet};
