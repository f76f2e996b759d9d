//! External syntax highlighting
//!
//!     Code fragments are not highlighted in-process. They are handed to an
//!     external pygments-style program that knows the weft lexers, and the
//!     rendered markup is read back. [`Highlighter`] is the seam: the weaver
//!     only ever talks to the trait, so tests substitute canned doubles (see
//!     [`crate::testing`]) and never spawn a real process.
//!
//!     The production implementation, [`Pygments`], writes each fragment to a
//!     scratch directory, invokes the binary with line numbering anchored at
//!     the fragment's recorded start line, and reads the produced markup. The
//!     scratch directory is dropped on every path out of the call.
//!
//!     Invocation failures are fatal for the whole weave. The error carries
//!     the literal command line and exit status so a missing or broken
//!     highlighter reads as the environment problem it is.

use crate::error::WeaveError;
use log::debug;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use weft_ast::Language;

/// Default external highlighter command.
pub const DEFAULT_COMMAND: &str = "pygmentize";

/// One positioned code fragment to highlight.
#[derive(Debug, Clone, Copy)]
pub struct HighlightRequest<'a> {
    /// The (already normalized) code text.
    pub code: &'a str,
    /// Declared surface language, selects the lexer.
    pub language: Language,
    /// Display name of the file the fragment came from; used for anchors.
    pub source_file: &'a str,
    /// Line the fragment starts on; seeds the emitted line numbers.
    pub start_line: usize,
}

/// The highlighting capability the weaver depends on.
pub trait Highlighter {
    /// Render one code fragment as HTML markup.
    fn highlight(&self, request: &HighlightRequest<'_>) -> Result<String, WeaveError>;

    /// Emit the CSS the fragment markup expects.
    fn stylesheet(&self) -> Result<String, WeaveError>;
}

/// External pygments invocation.
pub struct Pygments {
    command: String,
}

impl Pygments {
    pub fn new() -> Self {
        Self::with_command(DEFAULT_COMMAND)
    }

    /// Use a different command name (or path) than the default.
    pub fn with_command(command: impl Into<String>) -> Self {
        Pygments {
            command: command.into(),
        }
    }

    fn resolve(&self) -> Result<PathBuf, WeaveError> {
        which::which(&self.command).map_err(|_| WeaveError::HighlighterNotFound {
            command: self.command.clone(),
        })
    }
}

impl Default for Pygments {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for Pygments {
    fn highlight(&self, request: &HighlightRequest<'_>) -> Result<String, WeaveError> {
        let program = self.resolve()?;
        let scratch = tempfile::tempdir().map_err(|source| WeaveError::HighlightIo {
            command: self.command.clone(),
            source,
        })?;
        let input = scratch.path().join("fragment.in");
        let output = scratch.path().join("fragment.html");
        fs::write(&input, request.code).map_err(|source| WeaveError::HighlightIo {
            command: self.command.clone(),
            source,
        })?;

        let formatter_options = format!(
            "linenos=table,linenostart={},lineanchors={},anchorlinenos",
            request.start_line,
            anchor_name(request.source_file)
        );
        let args = vec![
            "-l".to_string(),
            request.language.lexer().to_string(),
            "-f".to_string(),
            "html".to_string(),
            "-O".to_string(),
            formatter_options,
            "-o".to_string(),
            output.display().to_string(),
            input.display().to_string(),
        ];
        let command_line = render_command(&self.command, &args);
        debug!("highlighting {}:{}", request.source_file, request.start_line);

        let status =
            Command::new(&program)
                .args(&args)
                .status()
                .map_err(|source| WeaveError::HighlightIo {
                    command: command_line.clone(),
                    source,
                })?;
        if !status.success() {
            return Err(WeaveError::HighlightInvocation {
                command: command_line,
                code: status.code(),
            });
        }

        fs::read_to_string(&output).map_err(|source| WeaveError::HighlightIo {
            command: command_line,
            source,
        })
    }

    fn stylesheet(&self) -> Result<String, WeaveError> {
        let program = self.resolve()?;
        let args = vec![
            "-S".to_string(),
            "default".to_string(),
            "-f".to_string(),
            "html".to_string(),
        ];
        let command_line = render_command(&self.command, &args);
        debug!("requesting stylesheet from {}", self.command);

        let output =
            Command::new(&program)
                .args(&args)
                .output()
                .map_err(|source| WeaveError::HighlightIo {
                    command: command_line.clone(),
                    source,
                })?;
        if !output.status.success() {
            return Err(WeaveError::HighlightInvocation {
                command: command_line,
                code: output.status.code(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Render the full command line for diagnostics.
fn render_command(command: &str, args: &[String]) -> String {
    let mut line = command.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Derive a line-anchor prefix from a source file name.
///
/// Pygments splices this into `id` attributes, so anything outside
/// `[A-Za-z0-9_-]` is flattened to a dash.
fn anchor_name(source_file: &str) -> String {
    source_file
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
