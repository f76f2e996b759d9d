//! Source language selection
//!
//!     A weft program declares the natural language its surface syntax uses.
//!     The language drives three things downstream: which pygments lexer the
//!     highlighter is asked for, which string table the page assembler uses,
//!     and whether article identifiers resolve to legal cross-reference links
//!     (only the French corpus has an official consultation service).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared source language of a weft program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    En,
}

impl Language {
    /// Name of the pygments lexer registered for this surface syntax.
    pub fn lexer(&self) -> &'static str {
        match self {
            Language::Fr => "weft_fr",
            Language::En => "weft_en",
        }
    }

    /// Whether article identifiers in this language resolve to an external
    /// legal consultation service.
    pub fn has_legal_reference_service(&self) -> bool {
        matches!(self, Language::Fr)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Fr => write!(f, "fr"),
            Language::En => write!(f, "en"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            other => Err(format!(
                "unknown language '{}' (expected 'fr' or 'en')",
                other
            )),
        }
    }
}
