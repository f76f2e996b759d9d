//! End-to-end weaving tests over the public API
//!
//! These drive the full fold with highlighter doubles, checking the
//! interleaving contract: original order, article containment, include
//! transparency, and all-or-nothing failure.

use weft_ast::{DocumentItem, Language, Positioned};
use weft_weave::testing::{EchoHighlighter, FailingHighlighter};
use weft_weave::{weave, WeaveError, WeaveOptions};

fn heading(title: &str, precedence: usize) -> DocumentItem {
    DocumentItem::LawHeading {
        title: title.to_string(),
        precedence,
    }
}

fn text(body: &str) -> DocumentItem {
    DocumentItem::LawText {
        body: body.to_string(),
    }
}

fn article(name: &str) -> DocumentItem {
    DocumentItem::LawArticle {
        name: Positioned::new(name.to_string(), "prog.weft", 1),
        article_id: None,
    }
}

fn code(fragment: &str, start_line: usize) -> DocumentItem {
    DocumentItem::CodeBlock {
        code: Positioned::new(fragment.to_string(), "prog.weft", start_line),
    }
}

fn weave_en(items: &[DocumentItem]) -> String {
    let options = WeaveOptions::new(Language::En);
    weave(items, &options, &EchoHighlighter).unwrap()
}

#[test]
fn article_then_text_then_heading_closes_exactly_once() {
    let items = vec![article("Art. 1"), text("hello"), heading("Title", 0)];
    let body = weave_en(&items);

    // One article opened, one paragraph inside it, and the container closed
    // immediately before the heading.
    assert_eq!(body.matches("<div class=\"weft-article\">").count(), 1);
    assert!(body.contains("<p class=\"weft-law-text\">hello</p>"));
    assert!(body.contains("</div>\n<h2>Title</h2>"));
}

#[test]
fn code_is_normalized_before_reaching_the_delegate() {
    let items = vec![code("a != b -> c", 5)];
    let body = weave_en(&items);
    assert!(body.contains("a ≠ b → c"));
    assert!(!body.contains("!="));
}

#[test]
fn consecutive_headings_outside_an_article_emit_no_close() {
    let items = vec![heading("One", 0), heading("Two", 1)];
    let body = weave_en(&items);
    assert!(!body.contains("</div>"));
    assert!(body.contains("<h2>One</h2>"));
    assert!(body.contains("<h3>Two</h3>"));
}

#[test]
fn failing_delegate_aborts_with_no_partial_document() {
    let items = vec![text("before"), code("x", 2), text("after")];
    let options = WeaveOptions::new(Language::En);
    let result = weave(&items, &options, &FailingHighlighter);
    match result {
        Err(WeaveError::HighlightInvocation { command, code }) => {
            assert!(command.contains("stub-highlighter"));
            assert_eq!(code, Some(1));
        }
        other => panic!("expected HighlightInvocation, got {:?}", other),
    }
}

#[test]
fn include_occupies_a_slot_but_renders_nothing() {
    let without_include = vec![article("Art. 1"), text("body"), heading("Next", 0)];
    let items = vec![
        article("Art. 1"),
        DocumentItem::Include {
            path: "prologue.weft".to_string(),
        },
        text("body"),
        heading("Next", 0),
    ];
    let body = weave_en(&items);

    // The include renders empty, so its slot shows up as doubled separators,
    // and the containment path is identical to the sequence without it.
    assert!(body.contains("\n\n\n\n"));
    assert_eq!(
        body.replace("\n\n\n\n", "\n\n"),
        weave_en(&without_include)
    );
}

#[test]
fn reordering_the_input_reorders_the_output() {
    let forward = weave_en(&[text("alpha"), text("beta")]);
    let backward = weave_en(&[text("beta"), text("alpha")]);

    assert!(forward.find("alpha").unwrap() < forward.find("beta").unwrap());
    assert!(backward.find("beta").unwrap() < backward.find("alpha").unwrap());
}

#[test]
fn document_ending_inside_an_article_stays_open() {
    let items = vec![heading("Title", 0), article("Art. 9"), text("tail")];
    let body = weave_en(&items);
    assert!(body.ends_with("<p class=\"weft-law-text\">tail</p>"));
    // Only the article-title div is ever closed.
    assert_eq!(body.matches("</div>").count(), 1);
}
