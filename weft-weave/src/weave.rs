//! The weaving fold
//!
//!     One pass, left to right, threading [`Containment`] from item to item.
//!     Fragments come out in input order and are joined with a blank line;
//!     the state the sequence ends in is discarded, so a document ending
//!     inside an article keeps its last container unclosed.

use crate::error::WeaveError;
use crate::highlight::Highlighter;
use crate::options::WeaveOptions;
use crate::render::{render_item, Containment};
use log::debug;
use weft_ast::DocumentItem;

/// Weave an ordered item sequence into one document body.
///
/// Strictly sequential: each item is rendered exactly once, in order, and a
/// failing highlight invocation aborts the whole weave with no partial body.
pub fn weave(
    items: &[DocumentItem],
    options: &WeaveOptions,
    highlighter: &dyn Highlighter,
) -> Result<String, WeaveError> {
    debug!("weaving {} items", items.len());
    let mut fragments = Vec::with_capacity(items.len());
    let mut state = Containment::OutsideArticle;
    for item in items {
        let (fragment, next_state) = render_item(item, state, options, highlighter)?;
        fragments.push(fragment);
        state = next_state;
    }
    Ok(fragments.join("\n\n"))
}
