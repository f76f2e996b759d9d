//! Per-item rendering and the article containment state machine
//!
//!     Weft item sequences carry no explicit nesting markers, so whether the
//!     weave is currently inside an open article container is decided here,
//!     one item at a time. The whole machine is two states and one rule: a
//!     heading or a new article closes an open article before rendering
//!     itself, and nothing else ever does.
//!
//! Item to HTML mapping:
//!
//!     | Item                      | HTML                                 |
//!     |---------------------------|--------------------------------------|
//!     | LawHeading                | `<h{precedence + 2}>`                |
//!     | LawText                   | `<p class="weft-law-text">`          |
//!     | LawArticle                | `<div class="weft-article">` (open)  |
//!     | CodeBlock / MetadataBlock | `<div class="weft-code">` wrapper    |
//!     | Include                   | empty                                |
//!
//!     An article's container stays open until the next heading or article;
//!     a sequence that ends inside an article leaves its container unclosed.

use crate::error::WeaveError;
use crate::highlight::{HighlightRequest, Highlighter};
use crate::options::WeaveOptions;
use crate::symbols::normalize_symbols;
use chrono::Local;
use weft_ast::{DocumentItem, Language, Positioned};

/// Whether the weave is currently inside an open article container.
///
/// Owned exclusively by the weaving fold; every transition is a pure
/// function of `(item, state)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    InsideArticle,
    OutsideArticle,
}

/// Render one item, producing its markup and the containment state the next
/// item starts from.
pub fn render_item(
    item: &DocumentItem,
    state: Containment,
    options: &WeaveOptions,
    highlighter: &dyn Highlighter,
) -> Result<(String, Containment), WeaveError> {
    let mut fragment = String::new();

    // Headings and article boundaries close an open article before anything
    // of their own is emitted.
    let closes_article = state == Containment::InsideArticle
        && matches!(
            item,
            DocumentItem::LawHeading { .. } | DocumentItem::LawArticle { .. }
        );
    if closes_article {
        fragment.push_str("</div>\n");
    }

    let next_state = match item {
        DocumentItem::LawHeading { title, precedence } => {
            let level = precedence + 2;
            fragment.push_str(&format!(
                "<h{level}>{title}</h{level}>",
                level = level,
                title = escape_html(title)
            ));
            if state == Containment::InsideArticle {
                Containment::OutsideArticle
            } else {
                state
            }
        }
        DocumentItem::LawText { body } => {
            fragment.push_str(&format!(
                "<p class=\"weft-law-text\">{}</p>",
                escape_html(body)
            ));
            state
        }
        DocumentItem::LawArticle { name, article_id } => {
            fragment.push_str(&format!(
                "<div class=\"weft-article\">\n<div class=\"weft-article-title\"><a href=\"{}\">{}</a></div>",
                article_href(article_id.as_deref(), options.language),
                escape_html(&name.value)
            ));
            Containment::InsideArticle
        }
        DocumentItem::CodeBlock { code } => {
            fragment.push_str(&code_wrapper(code, "weft-code", options, highlighter)?);
            state
        }
        DocumentItem::MetadataBlock { code } => {
            fragment.push_str(&code_wrapper(
                code,
                "weft-code weft-code-metadata",
                options,
                highlighter,
            )?);
            state
        }
        DocumentItem::Include { .. } => state,
    };

    Ok((fragment, next_state))
}

/// Build the link target for an article name.
///
/// French programs with an official identifier link to the Légifrance
/// consultation service, stamped with the calendar date at render time so
/// the reference resolves to the law as of the day the reader follows it.
/// Everything else gets an inert placeholder.
fn article_href(article_id: Option<&str>, language: Language) -> String {
    match article_id {
        Some(id) if language.has_legal_reference_service() => {
            let today = Local::now().format("%Y%m%d");
            format!(
                "https://www.legifrance.gouv.fr/affichCodeArticle.do?idArticle={}&dateTexte={}",
                id, today
            )
        }
        _ => "#".to_string(),
    }
}

/// Normalize, highlight, and wrap one code fragment.
///
/// The fragment is sent to the highlighter wrapped in block-comment markers,
/// matching how it sits in the original source file.
fn code_wrapper(
    code: &Positioned<String>,
    css_class: &str,
    options: &WeaveOptions,
    highlighter: &dyn Highlighter,
) -> Result<String, WeaveError> {
    let normalized = normalize_symbols(&code.value);
    let commented = format!("/*{}*/", normalized);
    let markup = highlighter.highlight(&HighlightRequest {
        code: &commented,
        language: options.language,
        source_file: &code.file,
        start_line: code.start_line,
    })?;
    Ok(format!(
        "<div class=\"{}\">\n<div class=\"weft-filename\">{}</div>\n{}\n</div>",
        css_class,
        escape_html(&code.file),
        markup
    ))
}

/// Escape HTML special characters
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}
