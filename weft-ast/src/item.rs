//! Document item definitions
//!
//!     The item sequence is the contract between parser and weaver. Every
//!     variant below is one unit of the original document, in source order.
//!     Matching on `DocumentItem` is exhaustive by construction: adding a new
//!     item kind is a compile-time obligation for every consumer, never a
//!     silent fallthrough.

use crate::position::Positioned;
use serde::{Deserialize, Serialize};

/// One unit of a parsed weft document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DocumentItem {
    /// A section header. `precedence` is the nesting depth declared in the
    /// source; deeper headings render smaller.
    LawHeading { title: String, precedence: usize },
    /// Literal legislative prose, reproduced verbatim (modulo escaping).
    LawText { body: String },
    /// An article boundary. `article_id`, when present, is the official
    /// identifier usable to build an external legal-reference link.
    LawArticle {
        name: Positioned<String>,
        #[serde(default)]
        article_id: Option<String>,
    },
    /// A fragment of ordinary source code.
    CodeBlock { code: Positioned<String> },
    /// A fragment of metadata code (declarations, scopes, ...).
    MetadataBlock { code: Positioned<String> },
    /// A reference to another source file. Contributes nothing to rendered
    /// output but keeps its slot in the sequence.
    Include { path: String },
}

/// Collect the distinct source files woven into an item sequence, in
/// first-seen order.
///
/// Only files that actually contribute rendered text count, which is why
/// `Include` paths are skipped: an include renders empty.
pub fn source_files(items: &[DocumentItem]) -> Vec<String> {
    let mut files: Vec<String> = Vec::new();
    for item in items {
        let file = match item {
            DocumentItem::LawArticle { name, .. } => Some(&name.file),
            DocumentItem::CodeBlock { code } | DocumentItem::MetadataBlock { code } => {
                Some(&code.file)
            }
            DocumentItem::LawHeading { .. }
            | DocumentItem::LawText { .. }
            | DocumentItem::Include { .. } => None,
        };
        if let Some(file) = file {
            if !files.iter().any(|known| known == file) {
                files.push(file.clone());
            }
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_stream_deserializes_from_tagged_json() {
        let json = r#"[
            {"kind": "law-heading", "title": "Section 121", "precedence": 0},
            {"kind": "law-text", "body": "The allowance is computed monthly."},
            {"kind": "law-article",
             "name": {"value": "Article L121-1", "file": "housing.weft", "start_line": 4},
             "article_id": "LEGIARTI000038814864"},
            {"kind": "code-block",
             "code": {"value": "amount = base * rate", "file": "housing.weft", "start_line": 7}},
            {"kind": "include", "path": "prologue.weft"}
        ]"#;

        let items: Vec<DocumentItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 5);
        match &items[2] {
            DocumentItem::LawArticle { name, article_id } => {
                assert_eq!(name.value, "Article L121-1");
                assert_eq!(name.start_line, 4);
                assert_eq!(article_id.as_deref(), Some("LEGIARTI000038814864"));
            }
            other => panic!("expected a law-article, got {:?}", other),
        }
    }

    #[test]
    fn test_article_id_defaults_to_none() {
        let json = r#"{"kind": "law-article",
                       "name": {"value": "Article 1", "file": "a.weft", "start_line": 1}}"#;
        let item: DocumentItem = serde_json::from_str(json).unwrap();
        match item {
            DocumentItem::LawArticle { article_id, .. } => assert!(article_id.is_none()),
            other => panic!("expected a law-article, got {:?}", other),
        }
    }

    #[test]
    fn test_source_files_deduplicates_in_first_seen_order() {
        let items = vec![
            DocumentItem::CodeBlock {
                code: Positioned::new("a".to_string(), "b.weft", 1),
            },
            DocumentItem::LawArticle {
                name: Positioned::new("Article 1".to_string(), "a.weft", 2),
                article_id: None,
            },
            DocumentItem::MetadataBlock {
                code: Positioned::new("c".to_string(), "b.weft", 9),
            },
            DocumentItem::Include {
                path: "ignored.weft".to_string(),
            },
        ];

        assert_eq!(source_files(&items), vec!["b.weft", "a.weft"]);
    }
}
