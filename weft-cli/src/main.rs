//! Command-line interface for weft
//! This binary weaves a parsed item stream (JSON) into a single HTML document
//! interleaving legislative text and source code.
//!
//! Usage:
//!   weft `<items.json>` [--language `<fr|en>`] [--output `<path>`]   - Weave a document
//!   weft --stylesheet-only                                           - Emit only the highlighting CSS

use clap::{Arg, ArgAction, Command};
use std::fs;
use std::process::exit;
use weft_ast::DocumentItem;
use weft_config::{Loader, WeftConfig};
use weft_weave::{Highlighter, Pygments, WeaveOptions};

fn main() {
    env_logger::init();

    let matches = Command::new("weft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Weave legislative text and source code into one HTML document")
        .arg_required_else_help(true)
        .arg(
            Arg::new("items")
                .help("Path to the parsed item stream (JSON)")
                .required_unless_present("stylesheet-only")
                .index(1),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .help("Source language of the woven program ('fr' or 'en')"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the document here instead of stdout"),
        )
        .arg(
            Arg::new("highlighter")
                .long("highlighter")
                .help("Override the external highlighter command"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Layer a configuration file over the built-in defaults"),
        )
        .arg(
            Arg::new("stylesheet-only")
                .long("stylesheet-only")
                .help("Emit only the highlighting stylesheet and exit")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(&matches);

    if matches.get_flag("stylesheet-only") {
        handle_stylesheet_command(&config);
        return;
    }

    let path = matches
        .get_one::<String>("items")
        .expect("items path is required unless emitting the stylesheet");
    let output = matches.get_one::<String>("output");
    handle_weave_command(&config, path, output);
}

/// Build the effective configuration: defaults, then an optional `weft.toml`
/// in the working directory, then an explicit --config file, then CLI flags.
fn load_config(matches: &clap::ArgMatches) -> WeftConfig {
    let mut loader = Loader::new().with_optional_file("weft.toml");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    for (flag, key) in [("language", "weave.language"), ("highlighter", "weave.highlighter")] {
        if let Some(value) = matches.get_one::<String>(flag) {
            loader = loader.set_override(key, value.as_str()).unwrap_or_else(|e| {
                eprintln!("weft: cannot apply --{}: {}", flag, e);
                exit(1);
            });
        }
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("weft: invalid configuration: {}", e);
        exit(1)
    })
}

/// Handle the default weave command
fn handle_weave_command(config: &WeftConfig, path: &str, output: Option<&String>) {
    let raw = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("weft: cannot read {}: {}", path, e);
        exit(1)
    });
    let items: Vec<DocumentItem> = serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("weft: {} is not a valid item stream: {}", path, e);
        exit(1)
    });
    log::info!("loaded {} items from {}", items.len(), path);

    let options = WeaveOptions::new(config.weave.language)
        .with_highlighter(config.weave.highlighter.clone());
    let sources = if config.page.include_sources {
        weft_ast::source_files(&items)
    } else {
        Vec::new()
    };

    let document = weft_weave::weave_document(&items, &options, &sources).unwrap_or_else(|e| {
        eprintln!("weft: {}", e);
        exit(1)
    });

    write_result(&document, output);
}

/// Handle --stylesheet-only
fn handle_stylesheet_command(config: &WeftConfig) {
    let highlighter = Pygments::with_command(config.weave.highlighter.as_str());
    let css = highlighter.stylesheet().unwrap_or_else(|e| {
        eprintln!("weft: {}", e);
        exit(1)
    });
    print!("{}", css);
}

fn write_result(document: &str, output: Option<&String>) {
    match output {
        Some(path) => fs::write(path, document).unwrap_or_else(|e| {
            eprintln!("weft: cannot write {}: {}", path, e);
            exit(1)
        }),
        None => print!("{}", document),
    }
}
