mod errors;
mod handlers;
mod logging;
mod operations;
mod state;
mod ui;

use catbrowse_core::{LetterAvailability, PrimarySlots, TagDepth};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::errors::map_run_error;
use crate::handlers::{apply_overrides, replay_actions, EngineOverrides};
use crate::logging::Verbosity;
use crate::operations::{load_config, parse_actions};
use crate::state::AppState;
use crate::ui::{render_page, GroupBy, RenderOptions};

/// Catalog browser - Filter a database catalog with cascading facets
///
/// Examples:
///   # Show every database, sectioned by first letter
///   catbrowse catalog.tsv
///
///   # Narrow by primary tag, then by secondary tag
///   catbrowse catalog.tsv -s tag1=Science -s tag2=Biology
///
///   # Pick a letter, then a provider (the letter is dropped again)
///   catbrowse catalog.tsv -s letter=B -s provider=Acme
///
///   # Click the "History" tag shown on the "Beta" entry
///   catbrowse catalog.tsv -s @Beta=History
///
///   # Machine readable view of the page
///   catbrowse catalog.tsv -s tag1=Arts --json
#[derive(Parser, Debug)]
#[command(name = "catbrowse")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Selection Logic:\n  \
    - Every --select is replayed in order, like clicks on the page\n  \
    - Different dimensions are combined with AND\n  \
    - A value of 'all' (or nothing) resets that control\n  \
    - Choosing tag1 resets tag2, tag3 and the letter\n  \
    - Choosing tag2 resets tag3 and the letter\n  \
    - Choosing tag3 or a provider resets the letter\n  \
    - 'clear' resets everything\n\n\
Grouping:\n  \
    - letter: alphabet sections (default)\n  \
    - provider, tag1: one section per value, '(none)' collects the rest\n\n\
Logging:\n  \
    - CATBROWSE_LOG, then RUST_LOG, override -v/-q")]
struct Cli {
    /// Tab-separated catalog feed
    #[arg(value_name = "FEED")]
    feed: PathBuf,

    /// TOML configuration with [engine] and [feed] tables
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Selection to apply: DIM=VALUE, @ITEM=TAG or clear (repeatable)
    #[arg(short, long = "select", value_name = "ACTION")]
    selections: Vec<String>,

    /// Number of tag levels (1-3)
    #[arg(long, value_name = "N", value_parser = parse_tag_depth)]
    tag_depth: Option<TagDepth>,

    /// Whether tag2 counts as a second primary tag
    #[arg(long, value_enum, value_name = "MODE")]
    primary_slots: Option<SlotsArg>,

    /// How the alphabet bar reacts to a chosen letter
    #[arg(long, value_enum, value_name = "MODE")]
    letters: Option<LettersArg>,

    /// Sort items within each section
    #[arg(long, value_enum, value_name = "FIELD")]
    sort: Option<SortArg>,

    /// Section the results
    #[arg(short = 'G', long, value_enum, default_value_t = GroupBy::Letter)]
    group_by: GroupBy,

    /// Print the page state as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Errors only
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SlotsArg {
    Single,
    Either,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LettersArg {
    Frozen,
    Narrowed,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Name,
}

fn parse_tag_depth(arg: &str) -> Result<TagDepth, String> {
    let depth: u8 = arg
        .parse()
        .map_err(|_| format!("'{arg}' is not a number"))?;
    TagDepth::try_from(depth)
}

impl Cli {
    fn overrides(&self) -> EngineOverrides {
        EngineOverrides {
            tag_depth: self.tag_depth,
            primary_slots: self.primary_slots.map(|slots| match slots {
                SlotsArg::Single => PrimarySlots::Single,
                SlotsArg::Either => PrimarySlots::Either,
            }),
            letter_availability: self.letters.map(|letters| match letters {
                LettersArg::Frozen => LetterAvailability::Frozen,
                LettersArg::Narrowed => LetterAvailability::Narrowed,
            }),
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            sort_by_name: matches!(self.sort, Some(SortArg::Name)),
            group_by: self.group_by,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet), cli.no_color);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            let (title, message, details) = map_run_error(&err);
            eprintln!("{} {}", format!("{title}:").red().bold(), message);
            eprintln!("{details}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli.overrides());

    let actions = parse_actions(&cli.selections)?;

    let mut state = AppState::load_from_file(&cli.feed, &config)?;
    replay_actions(&mut state, &actions)?;

    if cli.json {
        println!("{}", render_json(&state)?);
    } else {
        println!("{}", render_page(&state, &cli.render_options()));
        if !state.warnings.is_empty() && !cli.quiet {
            eprintln!(
                "{}",
                format!("{} data warning(s) in feed", state.warnings.len()).yellow()
            );
        }
    }

    Ok(())
}

/// JSON page: feed path, derived view and data warnings
fn render_json(state: &AppState) -> anyhow::Result<String> {
    let output = serde_json::json!({
        "feed": state.current_file.display().to_string(),
        "view": serde_json::to_value(state.engine.view())?,
        "warnings": state.warnings,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
