//! emojiplus CLI
//!
//! Opens the emoji grid (GUI or TUI) or queries the catalog from the shell.

use clap::{Parser, Subcommand};
use console::style;
use emojiplus::{filter, logging, AppConfig, Catalog, CatalogEntry, EmojiError};
use indicatif::HumanDuration;
use serde::Serialize;
use std::time::Instant;

/// emojiplus - searchable emoji grid
///
/// Builds its catalog from the Unicode character name database;
/// search matches any part of an emoji's Unicode name.
#[derive(Parser)]
#[command(name = "emojiplus")]
#[command(author = "emojiplus Contributors")]
#[command(version)]
#[command(about = "Searchable emoji grid", long_about = None)]
struct Cli {
    /// Write a debug log next to the executable
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the emoji window (default)
    Gui,

    /// Browse the emoji grid in the terminal
    Tui {
        /// Grid columns
        #[arg(short, long, default_value = "8")]
        columns: usize,
    },

    /// Print emoji whose name contains the query
    Search {
        /// Search text, or an emoji to look up
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Maximum results
        #[arg(short, long, default_value = "100")]
        max: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Print the whole catalog in display order
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Show catalog statistics
    Info,
}

/// JSON shape of one catalog entry
#[derive(Serialize)]
struct EntryRecord<'a> {
    char: char,
    code_point: String,
    name: &'a str,
}

impl<'a> From<&'a CatalogEntry> for EntryRecord<'a> {
    fn from(entry: &'a CatalogEntry) -> Self {
        Self {
            char: entry.character,
            code_point: entry.code_label(),
            name: &entry.name,
        }
    }
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(s: &str) -> emojiplus::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(EmojiError::UnknownFormat(s.to_string())),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.log {
        logging::init(logging::LogLevel::Debug);
        logging::separator("emojiplus starting up");
    }

    let config = AppConfig::default();

    let result = match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => emojiplus::gui::run(config),

        Commands::Tui { columns } => emojiplus::tui::run(config.with_columns(columns)),

        Commands::Search { query, max, output } => cmd_search(&config, &query, max, &output),

        Commands::List { output } => cmd_list(&config, &output),

        Commands::Info => cmd_info(&config),
    };

    if let Err(e) = result {
        logging::error("MAIN", &e.to_string());
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// Search command implementation
fn cmd_search(config: &AppConfig, query: &str, max: usize, output: &str) -> emojiplus::Result<()> {
    let format = OutputFormat::parse(output)?;
    let catalog = config.build_catalog();
    let hits = filter(&catalog, query);
    let shown: Vec<&CatalogEntry> = hits.iter().copied().take(max).collect();

    logging::info(
        "SEARCH",
        &format!("'{}': {} matches, {} shown", query, hits.len(), shown.len()),
    );

    match format {
        OutputFormat::Json => print_json(&shown),
        OutputFormat::Text => {
            if shown.is_empty() {
                println!("{} No emoji match '{}'", style("!").yellow().bold(), query);
                return Ok(());
            }
            print_text(&shown);
            if hits.len() > shown.len() {
                println!(
                    "{}",
                    style(format!("... {} more (use --max)", hits.len() - shown.len())).dim()
                );
            }
            Ok(())
        }
    }
}

/// List command implementation
fn cmd_list(config: &AppConfig, output: &str) -> emojiplus::Result<()> {
    let format = OutputFormat::parse(output)?;
    let catalog = config.build_catalog();
    let entries: Vec<&CatalogEntry> = catalog.iter().collect();

    match format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Text => {
            print_text(&entries);
            Ok(())
        }
    }
}

/// Info command implementation
fn cmd_info(config: &AppConfig) -> emojiplus::Result<()> {
    let start = Instant::now();
    let catalog = config.build_catalog();
    let elapsed = start.elapsed();

    println!("{} emojiplus {}", style("→").cyan().bold(), emojiplus::VERSION);
    println!();
    println!("  {:<14} {}", style("Entries:").bold(), catalog.len());
    println!("  {:<14} {}", style("Face entries:").bold(), catalog.face_count());

    let stats = catalog.stats();
    println!("  {:<14} {}", style("Scanned:").bold(), stats.scanned);
    println!("  {:<14} {}", style("Unnamed:").bold(), stats.unnamed);
    println!("  {:<14} {}", style("Built in:").bold(), HumanDuration(elapsed));
    println!();
    println!("{}", style("Ranges").bold().underlined());
    for range in &config.ranges {
        let count = count_in_range(&catalog, range);
        println!(
            "  U+{:05X}-U+{:05X}  {:>4}  {}",
            range.start,
            range.end,
            count,
            style(range.label).dim()
        );
    }

    Ok(())
}

fn count_in_range(catalog: &Catalog, range: &emojiplus::CodeRange) -> usize {
    catalog.iter().filter(|e| range.contains(e.character)).count()
}

fn print_text(entries: &[&CatalogEntry]) {
    for entry in entries {
        println!("{}\t{}\t{}", entry.code_label(), entry.character, entry.name);
    }
}

fn print_json(entries: &[&CatalogEntry]) -> emojiplus::Result<()> {
    let records: Vec<EntryRecord> = entries.iter().map(|e| EntryRecord::from(*e)).collect();
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
