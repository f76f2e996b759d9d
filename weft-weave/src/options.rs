//! Rendering configuration for one weave

use crate::highlight::DEFAULT_COMMAND;
use weft_ast::Language;

/// Options threaded through a whole weave.
#[derive(Debug, Clone)]
pub struct WeaveOptions {
    /// Declared source language of the woven program.
    pub language: Language,
    /// Override for the external highlighter command, if any.
    pub highlighter: Option<String>,
}

impl WeaveOptions {
    pub fn new(language: Language) -> Self {
        WeaveOptions {
            language,
            highlighter: None,
        }
    }

    pub fn with_highlighter(mut self, command: impl Into<String>) -> Self {
        self.highlighter = Some(command.into());
        self
    }

    /// The highlighter command to invoke, falling back to the default.
    pub fn highlighter_command(&self) -> &str {
        self.highlighter.as_deref().unwrap_or(DEFAULT_COMMAND)
    }
}
