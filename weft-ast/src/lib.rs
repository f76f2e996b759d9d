//! Document item model for the weft format
//!
//!     Weft programs are literate documents: legislative text and the source code
//!     implementing it live in one file, in the order the law states them. The
//!     upstream parser reduces such a file to a flat, ordered sequence of typed
//!     items, and that sequence is the sole input of the weaving engine.
//!
//!     This crate defines the item sequence contract shared by the parser and the
//!     weaver. There is deliberately no tree here: unlike most document formats,
//!     weft documents carry no explicit nesting markers, and deciding where visual
//!     containers open and close is the weaver's job, not the parser's.
//!
//! Item Kinds
//!
//!     An item is one of:
//!
//!         - LawHeading: a section header with a precedence depth.
//!         - LawText: literal legislative prose.
//!         - LawArticle: an article boundary, optionally carrying the official
//!           identifier used to build legal cross-reference links.
//!         - CodeBlock / MetadataBlock: a positioned source-code fragment.
//!         - Include: a reference to another source file.
//!
//!     Item order in a sequence equals the order items appear in the original
//!     source. Consumers must not reorder, deduplicate, or drop items.
//!
//! Position Tracking
//!
//!     Article names and code fragments are position-tagged: they remember the
//!     file they were read from and the line their text starts on. The weaver
//!     threads these through to the syntax highlighter so emitted line numbers
//!     and anchors point back at the original source.
//!
//! Interchange
//!
//!     All types serialize with serde. The parser hands item sequences to the
//!     weaver as JSON arrays, tagged by item kind.

pub mod item;
pub mod language;
pub mod position;

pub use item::{source_files, DocumentItem};
pub use language::Language;
pub use position::Positioned;
