//! Command-line interface for folder-tree
//! Renders an outline file (or stdin) the same way the template helper does, or in one of
//! the inspection formats.
//!
//! Usage:
//!   folder-tree [path] [--format `<format>`] [--config `<file>`] [--pretty] [--escape]
//!   folder-tree [path] --records                 - Dump the flat parser records as JSON
//!   folder-tree --list-formats                   - List available output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use folder_tree::outline::building::build;
use folder_tree::outline::config::{FolderTreeConfig, Loader};
use folder_tree::outline::formats::FormatRegistry;
use folder_tree::outline::parsing::parse;
use std::io::Read;

fn main() {
    env_logger::init();

    let matches = Command::new("folder-tree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render indented outlines as HTML folder trees")
        .arg(
            Arg::new("path")
                .help("Path to the outline file ('-' or nothing reads stdin)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'html', 'treeviz', 'json', 'yaml')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Indent the HTML output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("escape")
                .long("escape")
                .help("HTML-escape names")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("records")
                .long("records")
                .help("Print the flat parser records as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    });
    let registry = FormatRegistry::with_html_options(config.html.clone());

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let source = read_source(matches.get_one::<String>("path")).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    });

    if matches.get_flag("records") {
        handle_records_command(&source);
        return;
    }

    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.output.format.clone());
    handle_render_command(&registry, &source, &format);
}

fn load_config(matches: &ArgMatches) -> Result<FolderTreeConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("pretty") {
        loader = loader.set_override("html.pretty", true)?;
    }
    if matches.get_flag("escape") {
        loader = loader.set_override("html.escape_names", true)?;
    }
    loader.build()
}

fn read_source(path: Option<&String>) -> std::io::Result<String> {
    match path.map(String::as_str) {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

/// Handle the default render command
fn handle_render_command(registry: &FormatRegistry, source: &str, format: &str) {
    let records = parse(source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let forest = build(records);

    let output = registry.serialize(&forest, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the --records flag
fn handle_records_command(source: &str) {
    let records = parse(source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let json = serde_json::to_string_pretty(&records).unwrap_or_else(|e| {
        eprintln!("Error formatting records: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}

/// Handle the --list-formats flag
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
        println!();
    }
}
