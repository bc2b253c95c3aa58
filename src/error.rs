//! Error types shared by the wizard and the batch converter

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a wizard session.
///
/// Per-file conversion failures are not errors: they are recorded in the
/// batch outcome and processing continues.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The transcoding binary could not be located on PATH
    #[error("`{program}` is not installed or not in PATH")]
    ToolNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    /// The output directory could not be created before the batch started
    #[error("failed to create output directory {}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The terminal failed for a reason other than the user cancelling
    #[error("prompt failed")]
    Prompt(#[source] io::Error),
}
