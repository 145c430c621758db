//! Demo driver for the notes page behaviors
//!
//! Seeds an in-memory page from config, applies the saved theme as the
//! page-ready hook, then reads commands from stdin:
//!
//! - `toggle` - flip light/dark
//! - `find <query>` - filter the note cards
//! - `list` - print every card with its visibility
//! - `quit` - exit
//!
//! Run with: cargo run -- [--config <path>] [--prefs <path>] [--ephemeral]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use notes_page::config::{load_config, Config};
use notes_page::error::ResultExt;
use notes_page::filter::filter_notes;
use notes_page::logging;
use notes_page::page::{MemoryCard, MemoryPage, NoteCardAccess};
use notes_page::prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use notes_page::theme::{apply_saved_theme, toggle_theme};

#[derive(Parser)]
#[command(
    name = "notes-page",
    about = "Drive the notes page theme toggle and card filter from a terminal"
)]
struct Args {
    /// Config file path (default: ~/.notespage/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preferences file path (overrides the config)
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// Keep preferences in memory instead of on disk
    #[arg(long)]
    ephemeral: bool,
}

fn main() {
    let args = Args::parse();
    let _guard = logging::init();

    let config = load_config(args.config.clone());

    let mut prefs: Box<dyn PreferenceStore> = if args.ephemeral {
        Box::new(MemoryPreferenceStore::new())
    } else {
        let path = args.prefs.clone().unwrap_or_else(|| config.preferences_path());
        let mut store = FilePreferenceStore::with_path(path);
        // A corrupt or unreadable file starts the session with defaults
        store.load().warn_on_err();
        Box::new(store)
    };

    let mut page = build_page(&config);
    info!(cards = config.cards.len(), "Page ready");

    // Page-ready hook: re-apply whatever the last session persisted
    let theme = apply_saved_theme(&mut page, prefs.as_ref());
    println!(
        "theme: {} (button {})",
        theme,
        page.toggle_label().unwrap_or("-")
    );
    print_cards(&page);

    run_commands(&mut page, prefs.as_mut());
}

fn build_page(config: &Config) -> MemoryPage {
    let mut page = MemoryPage::new();
    for card in &config.cards {
        page.push_card(MemoryCard::with_parts(card.title.clone(), card.content.clone()));
    }
    page
}

fn run_commands(page: &mut MemoryPage, prefs: &mut dyn PreferenceStore) {
    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => {}
            "toggle" => {
                if let Some(theme) = toggle_theme(page, prefs).log_err() {
                    println!(
                        "theme: {} (button {})",
                        theme,
                        page.toggle_label().unwrap_or("-")
                    );
                }
            }
            "find" => {
                page.set_search_value(rest.trim());
                filter_notes(page);
                print_cards(page);
            }
            "list" => print_cards(page),
            "quit" | "exit" => break,
            other => {
                println!("unknown command: {other}");
                println!("commands: toggle, find <query>, list, quit");
            }
        }
        prompt();
    }
    info!("Session ended");
}

fn print_cards(page: &MemoryPage) {
    for card in page.cards() {
        let marker = if card.is_visible() { "shown" } else { "hidden" };
        let title = card.title().unwrap_or_default();
        let body = card.body().unwrap_or_default();
        println!("  [{marker:>6}] {title}: {body}");
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
