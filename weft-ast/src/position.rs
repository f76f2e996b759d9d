//! Source position tracking for item payloads

use serde::{Deserialize, Serialize};

/// A value paired with the source location it was read from.
///
/// `start_line` is 1-based, the convention of every tool that will ever
/// display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Positioned<T> {
    /// The payload itself (an article name, a code fragment, ...).
    pub value: T,
    /// Display name of the source file the payload was read from.
    pub file: String,
    /// Line the payload starts on in `file`.
    pub start_line: usize,
}

impl<T> Positioned<T> {
    pub fn new(value: T, file: impl Into<String>, start_line: usize) -> Self {
        Positioned {
            value,
            file: file.into(),
            start_line,
        }
    }
}
