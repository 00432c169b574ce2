mod check;
mod generate;
mod init;

pub use check::{check, CheckArgs};
pub use generate::{generate, GenerateArgs};
pub use init::{init, InitArgs};

use anyhow::{Context, Result};
use ldcraft_form::FormState;
use std::fs;
use std::path::Path;

/// Load a form state file. Missing fields take their defaults, so a
/// minimal `{"productName": "..."}` file is enough to get started.
pub(crate) fn load_state(path: &Path) -> Result<FormState> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("cannot read state file {}", path.display()))?;

    serde_json::from_str(&source)
        .with_context(|| format!("{} is not a valid form state file", path.display()))
}
