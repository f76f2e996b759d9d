//! Page assembly
//!
//!     Wraps a woven body in the fixed page shell: highlighting stylesheet,
//!     localized title block, generated-by line, and the list of woven source
//!     files with their last-modification times. Pure string assembly; the
//!     only failable parts are the stylesheet invocation (the second and last
//!     call to the external highlighter) and the file metadata lookups.

use crate::error::WeaveError;
use crate::highlight::Highlighter;
use crate::options::WeaveOptions;
use crate::render::escape_html;
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use weft_ast::Language;

const LAYOUT_CSS: &str = include_str!("../css/weft.css");

struct PageStrings {
    title: &'static str,
    sources_heading: &'static str,
    modified_label: &'static str,
    generated_by: &'static str,
    date_format: &'static str,
}

fn strings(language: Language) -> PageStrings {
    match language {
        Language::Fr => PageStrings {
            title: "Implémentation de texte législatif",
            sources_heading: "Fichiers sources tissés dans ce document",
            modified_label: "dernière modification le",
            generated_by: "Document généré par weft version",
            date_format: "%d/%m/%Y",
        },
        Language::En => PageStrings {
            title: "Legislative text implementation",
            sources_heading: "Source files woven into this document",
            modified_label: "last modified on",
            generated_by: "Document generated by weft version",
            date_format: "%Y-%m-%d",
        },
    }
}

/// Wrap a woven body in the complete HTML document shell.
///
/// `sources` lists the files to credit in the footer; pass an empty slice to
/// omit the listing. A file whose modification time cannot be read aborts
/// the whole assembly.
pub fn assemble(
    body: &str,
    options: &WeaveOptions,
    highlighter: &dyn Highlighter,
    sources: &[String],
) -> Result<String, WeaveError> {
    let strings = strings(options.language);
    let highlight_css = highlighter.stylesheet()?;
    let source_list = render_source_list(sources, &strings)?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
  <meta charset="UTF-8">
  <meta name="generator" content="weft">
  <title>{title}</title>
  <style>
{highlight_css}
{layout_css}
  </style>
</head>
<body>
<div class="weft-document">
<h1>{title}</h1>
<p class="weft-generated-by">{generated_by} {version}</p>
{source_list}{body}
</div>
</body>
</html>
"#,
        lang = options.language,
        title = strings.title,
        highlight_css = highlight_css,
        layout_css = LAYOUT_CSS,
        generated_by = strings.generated_by,
        version = env!("CARGO_PKG_VERSION"),
        source_list = source_list,
        body = body,
    ))
}

fn render_source_list(sources: &[String], strings: &PageStrings) -> Result<String, WeaveError> {
    if sources.is_empty() {
        return Ok(String::new());
    }
    let mut list = String::new();
    list.push_str(&format!(
        "<p class=\"weft-sources-heading\">{}</p>\n<ul class=\"weft-source-files\">\n",
        strings.sources_heading
    ));
    for source in sources {
        let modified = last_modified(Path::new(source))?;
        list.push_str(&format!(
            "<li><tt>{}</tt>, {} {}</li>\n",
            escape_html(source),
            strings.modified_label,
            modified.format(strings.date_format)
        ));
    }
    list.push_str("</ul>\n");
    Ok(list)
}

fn last_modified(path: &Path) -> Result<DateTime<Local>, WeaveError> {
    let metadata = fs::metadata(path).map_err(|source| WeaveError::MetadataLookup {
        path: path.to_path_buf(),
        source,
    })?;
    let modified = metadata
        .modified()
        .map_err(|source| WeaveError::MetadataLookup {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(modified.into())
}
