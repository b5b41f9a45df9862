use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::warn;

use crate::config::{INTERACTIVE_GENERATION_DELAY, Settings};
use crate::logging;
use crate::models::Category;
use crate::share::{copy_to_clipboard, share_message};
use crate::state::AppState;
use crate::storage::PreferenceStore;
use crate::timer::{DEFAULT_TIMER_MINUTES, TIMER_PRESETS_MINUTES};
use crate::tui::run_interactive;
use crate::utils::format_path_with_tilde;

/// Upper bound on suggestions per `suggest` invocation
const MAX_SUGGEST_COUNT: u32 = 50;

#[derive(Parser)]
#[command(name = "activity-suggester")]
#[command(version = "0.1.0")]
#[command(about = "Suggest a random leisure activity from the categories you like", long_about = None)]
pub struct Cli {
    /// Directory holding favorites, selected categories and theme
    #[arg(long, global = true, env = "ACTIVITY_SUGGESTER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// JSON file replacing the built-in activity pool
    #[arg(long, global = true, env = "ACTIVITY_SUGGESTER_POOL")]
    pub pool: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List categories and their pool sizes (* marks selected)
    Categories,
    /// Add categories to the saved selection
    Select {
        #[arg(required = true)]
        categories: Vec<String>,
    },
    /// Remove categories from the saved selection
    Deselect {
        #[arg(required = true)]
        categories: Vec<String>,
    },
    /// Clear the saved selection
    Clear,
    /// Suggest activities from the selected categories
    Suggest {
        /// Use these categories instead of the saved selection
        #[arg(short, long = "category")]
        categories: Vec<String>,
        /// Number of suggestions
        #[arg(short = 'n', long, default_value_t = 1,
              value_parser = clap::value_parser!(u32).range(1..=MAX_SUGGEST_COUNT as i64))]
        count: u32,
    },
    /// List or edit favorite activities
    Favorites {
        #[command(subcommand)]
        action: Option<FavoriteAction>,
    },
    /// Show or cycle the theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Print a share message for an activity and copy it to the clipboard
    Share {
        activity: String,
        /// Only print the message
        #[arg(long)]
        no_copy: bool,
    },
    /// Run the interactive terminal UI
    Interactive {
        /// Initial countdown length started with `t` (5, 15, 30 or 60)
        #[arg(long, default_value_t = DEFAULT_TIMER_MINUTES, value_parser = parse_timer_preset)]
        timer_minutes: u64,
    },
}

#[derive(Subcommand)]
pub enum FavoriteAction {
    /// Add an activity to favorites
    Add { activity: String },
    /// Remove an activity from favorites
    Remove { activity: String },
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Switch to the next theme
    Next,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(cli.data_dir.clone(), cli.pool.clone())?;

    match &cli.command {
        Some(Commands::Interactive { timer_minutes }) => {
            let settings = settings
                .with_generation_delay(INTERACTIVE_GENERATION_DELAY)
                .with_timer_minutes(*timer_minutes);
            // Keep the guard alive until the UI exits so buffered logs flush
            let _guard = logging::init_file(cli.verbose, &settings.log_file())?;
            run_interactive(&settings)?;
        }
        Some(command) => {
            logging::init_stderr(cli.verbose)?;
            run_command(command, &settings)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn run_command(command: &Commands, settings: &Settings) -> Result<()> {
    let store = settings.store();
    match command {
        Commands::Categories => show_categories(settings, &store),
        Commands::Select { categories } => edit_selection(&store, categories, true),
        Commands::Deselect { categories } => edit_selection(&store, categories, false),
        Commands::Clear => {
            store.save_categories(&BTreeSet::new())?;
            println!("Selection cleared");
            Ok(())
        }
        Commands::Suggest { categories, count } => suggest(settings, &store, categories, *count),
        Commands::Favorites { action } => favorites(&store, action.as_ref()),
        Commands::Theme { action } => theme(&store, action.as_ref()),
        Commands::Share { activity, no_copy } => share(activity, *no_copy),
        Commands::Interactive { .. } => unreachable!("interactive mode is dispatched by run"),
    }
}

fn parse_timer_preset(raw: &str) -> Result<u64, String> {
    let minutes: u64 = raw.parse().map_err(|e| format!("{}", e))?;
    if TIMER_PRESETS_MINUTES.contains(&minutes) {
        Ok(minutes)
    } else {
        Err(format!("must be one of {:?}", TIMER_PRESETS_MINUTES))
    }
}

fn parse_categories(raw: &[String]) -> Result<BTreeSet<Category>> {
    raw.iter().map(|s| s.parse::<Category>().map_err(anyhow::Error::from)).collect()
}

fn show_categories(settings: &Settings, store: &PreferenceStore) -> Result<()> {
    let pool = settings.load_pool()?;
    let selected = store.load_categories();

    println!("Categories");
    println!("==========");
    for category in Category::all() {
        let marker = if selected.contains(&category) { "*" } else { " " };
        let size = if pool.contains(category) {
            format!("{} activities", pool.activities(category).len())
        } else {
            "not in pool".to_string()
        };
        println!("{} {} {:<13} {}", marker, category.icon(), category.as_ref(), size);
    }
    println!();
    println!("Total activities: {}", pool.total());
    println!("Data directory: {}", format_path_with_tilde(store.dir()));

    Ok(())
}

fn edit_selection(store: &PreferenceStore, raw: &[String], add: bool) -> Result<()> {
    let requested = parse_categories(raw)?;
    let mut state = AppState::new(store.load(), Default::default());

    let mut changed = false;
    for category in requested {
        changed |= if add {
            state.select_category(category)
        } else {
            state.deselect_category(category)
        };
    }
    if changed {
        store.save_categories(state.selected())?;
    }

    if state.selected().is_empty() {
        println!("Selected: (none)");
    } else {
        let ids: Vec<&str> = state.selected().iter().map(|c| c.as_ref()).collect();
        println!("Selected: {}", ids.join(", "));
    }
    Ok(())
}

fn suggest(settings: &Settings, store: &PreferenceStore, raw: &[String], count: u32) -> Result<()> {
    let pool = settings.load_pool()?;
    let mut state = AppState::new(store.load(), settings.generation_delay);
    if !raw.is_empty() {
        state.set_categories(parse_categories(raw)?);
    }

    let mut rng = rand::rng();
    for _ in 0..count {
        let activity = state.generate_now(&pool, &mut rng).context("Could not suggest an activity")?;
        let star = if state.is_favorite(&activity) { " ★" } else { "" };
        println!("{}{}", activity, star);
    }
    Ok(())
}

fn favorites(store: &PreferenceStore, action: Option<&FavoriteAction>) -> Result<()> {
    let mut state = AppState::new(store.load(), Default::default());

    match action {
        None => {
            if state.favorites().is_empty() {
                println!("No favorites yet");
            }
            for favorite in state.favorites() {
                println!("★ {}", favorite);
            }
        }
        Some(FavoriteAction::Add { activity }) => {
            let activity = activity.trim();
            if activity.is_empty() {
                anyhow::bail!("Favorite activity cannot be empty");
            }
            if state.add_favorite(activity) {
                store.save_favorites(state.favorites())?;
                println!("Added to favorites: {}", activity);
            } else {
                println!("Already a favorite: {}", activity);
            }
        }
        Some(FavoriteAction::Remove { activity }) => {
            if state.remove_favorite(activity.trim()) {
                store.save_favorites(state.favorites())?;
                println!("Removed from favorites: {}", activity.trim());
            } else {
                println!("Not a favorite: {}", activity.trim());
            }
        }
    }
    Ok(())
}

fn theme(store: &PreferenceStore, action: Option<&ThemeAction>) -> Result<()> {
    let mut state = AppState::new(store.load(), Default::default());

    match action {
        None => println!("Theme: {}", state.theme()),
        Some(ThemeAction::Next) => {
            let theme = state.cycle_theme();
            store.save_theme(theme)?;
            println!("Theme: {}", theme);
        }
    }
    Ok(())
}

fn share(activity: &str, no_copy: bool) -> Result<()> {
    if activity.trim().is_empty() {
        anyhow::bail!("Nothing to share: activity is empty");
    }

    let message = share_message(activity);
    println!("{}", message);

    if !no_copy {
        match copy_to_clipboard(&message) {
            Ok(()) => eprintln!("✓ Copied to clipboard"),
            Err(e) => {
                warn!("Clipboard unavailable: {:#}", e);
                eprintln!("✗ Could not copy to clipboard: {}", e);
            }
        }
    }
    Ok(())
}
