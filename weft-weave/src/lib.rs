//! Weaving engine for literate legislative programs
//!
//!     This crate turns an ordered sequence of document items (legislative
//!     headings, prose, article boundaries, code fragments, includes) into a
//!     single HTML document, interleaving law text and source code exactly in
//!     their original order.
//!
//! Architecture
//!
//!     The pipeline is a chain of small pieces, leaves first:
//!
//!     - symbols: rewrites ASCII operator tokens in code fragments into
//!       display glyphs. Pure, total.
//!     - highlight: the external syntax-highlighting collaborator, behind the
//!       Highlighter trait so tests inject doubles.
//!     - render: the per-item state machine. Given one item and the current
//!       article containment state, produces that item's markup and the next
//!       state.
//!     - weave: folds the renderer over the item sequence, threading
//!       containment state linearly, and joins the fragments.
//!     - page: wraps the woven body in the static page shell (stylesheet,
//!       localized titles, source-file footer).
//!
//!     The file structure:
//!     .
//!     ├── error.rs        # WeaveError, the one error type of the pipeline
//!     ├── symbols.rs      # operator token -> glyph normalization
//!     ├── highlight.rs    # Highlighter trait + external pygments invocation
//!     ├── options.rs      # per-weave rendering configuration
//!     ├── render.rs       # item renderer and containment state machine
//!     ├── weave.rs        # the weaving fold
//!     ├── page.rs         # document shell assembly
//!     ├── testing.rs      # highlighter doubles for tests
//!     └── lib.rs
//!
//! Failure Model
//!
//!     Weaving one document is all-or-nothing. An external highlighter
//!     failure or an unreadable source-file timestamp aborts the whole run
//!     with a diagnostic naming the offending command line or path; there is
//!     no partial output, retry, or degraded mode.
//!
//!     Processing is single-threaded and strictly sequential: containment
//!     state threads linearly through the item sequence, and each highlighter
//!     invocation blocks the weave until it returns.

pub mod error;
pub mod highlight;
pub mod options;
pub mod page;
pub mod render;
pub mod symbols;
pub mod testing;
pub mod weave;

pub use error::WeaveError;
pub use highlight::{HighlightRequest, Highlighter, Pygments};
pub use options::WeaveOptions;
pub use render::{render_item, Containment};
pub use weave::weave;

use weft_ast::DocumentItem;

/// Weave an item sequence and wrap it in the full page shell.
///
/// This is the whole pipeline behind one call: it builds the external
/// highlighter from `options`, weaves the body, and assembles the final
/// document. `sources` is the list of files credited in the footer.
pub fn weave_document(
    items: &[DocumentItem],
    options: &WeaveOptions,
    sources: &[String],
) -> Result<String, WeaveError> {
    let highlighter = Pygments::with_command(options.highlighter_command());
    let body = weave::weave(items, options, &highlighter)?;
    page::assemble(&body, options, &highlighter, sources)
}
