//! Test doubles for the highlighting seam
//!
//!     The weaver only knows the [`Highlighter`](crate::highlight::Highlighter)
//!     trait, so tests run the full pipeline against these doubles instead of
//!     spawning a real pygments process.

use crate::error::WeaveError;
use crate::highlight::{HighlightRequest, Highlighter};

/// Reflects the requested fragment back wrapped in a `<pre>` tag, so tests
/// can assert on exactly what reached the delegate.
pub struct EchoHighlighter;

impl Highlighter for EchoHighlighter {
    fn highlight(&self, request: &HighlightRequest<'_>) -> Result<String, WeaveError> {
        Ok(format!("<pre class=\"echo\">{}</pre>", request.code))
    }

    fn stylesheet(&self) -> Result<String, WeaveError> {
        Ok(".echo { }".to_string())
    }
}

/// Simulates an external highlighter exiting with status 1.
pub struct FailingHighlighter;

impl Highlighter for FailingHighlighter {
    fn highlight(&self, _request: &HighlightRequest<'_>) -> Result<String, WeaveError> {
        Err(WeaveError::HighlightInvocation {
            command: "stub-highlighter -f html".to_string(),
            code: Some(1),
        })
    }

    fn stylesheet(&self) -> Result<String, WeaveError> {
        Err(WeaveError::HighlightInvocation {
            command: "stub-highlighter -S default".to_string(),
            code: Some(1),
        })
    }
}
