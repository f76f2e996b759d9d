//! Error types for the weaving pipeline
//!
//!     Weaving is all-or-nothing: there is no partial output, retry, or
//!     degraded mode. Every variant therefore carries enough context (the
//!     literal command line and exit status, or the failing path) for the
//!     user to diagnose an environment problem rather than a weave bug.

use std::fmt;
use std::path::PathBuf;

/// Errors that can abort a weave.
#[derive(Debug)]
pub enum WeaveError {
    /// The external highlighter binary could not be located.
    HighlighterNotFound { command: String },
    /// The highlighter (or its scratch files) could not be driven.
    HighlightIo {
        command: String,
        source: std::io::Error,
    },
    /// The highlighter ran but reported failure.
    HighlightInvocation {
        command: String,
        code: Option<i32>,
    },
    /// A source file's modification time could not be read for the footer.
    MetadataLookup {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for WeaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeaveError::HighlighterNotFound { command } => {
                write!(
                    f,
                    "highlighter '{}' not found (is it installed and on PATH?)",
                    command
                )
            }
            WeaveError::HighlightIo { command, source } => {
                write!(f, "failed to run `{}`: {}", command, source)
            }
            WeaveError::HighlightInvocation { command, code } => match code {
                Some(code) => write!(f, "`{}` exited with status {}", command, code),
                None => write!(f, "`{}` was terminated by a signal", command),
            },
            WeaveError::MetadataLookup { path, source } => {
                write!(
                    f,
                    "cannot read modification time of {}: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for WeaveError {}
