mod app;
mod browser;
mod catalog;
mod clipboard;
mod config;
mod filter;
mod i18n;
mod listing;
mod state;
mod ui;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::process::ExitCode;

use app::App;
use catalog::{Catalog, GameVersion, Language};
use clipboard::{copy_record, CopyOptions, SystemClipboard};
use config::{resolve_category, Config};
use filter::category_options;
use i18n::I18n;
use state::{Selection, SelectionChange};

#[derive(Parser)]
#[command(name = "cch")]
#[command(about = "Counter-Strike console command reference (English/Russian)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Default)]
struct SelectionArgs {
    /// Language: en | ru
    #[arg(long, short = 'l')]
    lang: Option<String>,
    /// Game version: CS2 | CS:GO | "CS 1.6"
    #[arg(long = "game-version", short = 'g')]
    game_version: Option<String>,
    /// Category filter ("All" for no filter)
    #[arg(long, short = 'c')]
    category: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse commands interactively (default)
    Browse {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Initial search text
        #[arg(long, short = 'q')]
        query: Option<String>,
    },
    /// Print the filtered command list
    List {
        /// Search text (case-insensitive substring)
        query: Option<String>,
        #[command(flatten)]
        selection: SelectionArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Copy a command to the clipboard by id
    Copy {
        /// Command id, e.g. sv_cheats
        id: String,
        /// Language: en | ru
        #[arg(long, short = 'l')]
        lang: Option<String>,
        /// Append the description as a comment line
        #[arg(long = "with-description", short = 'd')]
        with_description: bool,
    },
    /// List category filters
    Categories {
        /// Language: en | ru
        #[arg(long, short = 'l')]
        lang: Option<String>,
    },
    /// List game versions
    Versions {
        /// Language: en | ru
        #[arg(long, short = 'l')]
        lang: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::new()?;
    let catalog = Catalog::builtin().context("built-in command catalog is invalid")?;

    // Top-level help is printed in the configured language
    let args: Vec<String> = std::env::args().collect();
    if args.len() == 2 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        let i18n = I18n::new(config.get_effective_language()?);
        print_help(&i18n);
        return Ok(ExitCode::SUCCESS);
    }

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Browse {
        selection: SelectionArgs::default(),
        query: None,
    });

    match command {
        Commands::Browse { selection, query } => {
            let mut initial = resolve_selection(&config, &catalog, &selection)?;
            if let Some(q) = query {
                initial = initial.apply(SelectionChange::SetQuery(q), &category_options(&catalog));
            }
            let mut app = App::new(catalog, initial, &config.clipboard.comment_prefix);
            if config.tui_simple()? {
                browser::print_simple(&app);
            } else {
                let mut clipboard = SystemClipboard::new(config.clipboard.command.as_deref());
                browser::run(&mut app, &mut clipboard, config.use_alt_screen())?;
            }
        }
        Commands::List { query, selection, json } => {
            let mut current = resolve_selection(&config, &catalog, &selection)?;
            if let Some(q) = query {
                current = current.apply(SelectionChange::SetQuery(q), &category_options(&catalog));
            }
            let visible = current.visible(&catalog);
            if json {
                println!("{}", listing::render_json(&visible, current.language)?);
            } else {
                let i18n = I18n::new(current.language);
                print!("{}", listing::render_text(&visible, &current, catalog.len(), &i18n));
            }
        }
        Commands::Copy { id, lang, with_description } => {
            let lang = resolve_language(&config, lang.as_deref())?;
            let i18n = I18n::new(lang);
            let Some(record) = catalog.get(&id) else {
                eprintln!("{}", i18n.t_format("unknown_command_id", &[&id]).red());
                return Ok(ExitCode::FAILURE);
            };
            let options = CopyOptions {
                include_description: with_description,
                comment_prefix: config.clipboard.comment_prefix.clone(),
            };
            let mut clipboard = SystemClipboard::new(config.clipboard.command.as_deref());
            let outcome = copy_record(&mut clipboard, record, lang, &options);
            if outcome.is_success() {
                println!("{}", outcome.message(&i18n).green().bold());
            } else {
                eprintln!("{}", outcome.message(&i18n).red().bold());
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Categories { lang } => {
            let i18n = I18n::new(resolve_language(&config, lang.as_deref())?);
            println!("{}", i18n.t("categories_title").bold());
            for option in category_options(&catalog) {
                println!("  {}", option.label());
            }
        }
        Commands::Versions { lang } => {
            let i18n = I18n::new(resolve_language(&config, lang.as_deref())?);
            println!("{}", i18n.t("versions_title").bold());
            for version in catalog.versions() {
                println!("  {}", version.label());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Flag value if given, else the configured language.
fn resolve_language(config: &Config, flag: Option<&str>) -> Result<Language> {
    let lang = match flag {
        Some(value) => value.parse()?,
        None => config.get_effective_language()?,
    };
    Ok(lang)
}

/// Initial selection: command-line flags override the config defaults.
fn resolve_selection(
    config: &Config,
    catalog: &Catalog,
    args: &SelectionArgs,
) -> Result<Selection> {
    let language = resolve_language(config, args.lang.as_deref())?;
    let version: GameVersion = match &args.game_version {
        Some(value) => value.parse()?,
        None => config.default_version()?,
    };
    let category = match &args.category {
        Some(value) => resolve_category(value, catalog)?,
        None => config.default_category(catalog)?,
    };
    log::debug!(
        "initial selection: lang={} version={} category={}",
        language,
        version,
        category
    );
    Ok(Selection::new(language, version, category))
}

fn print_help(i18n: &I18n) {
    println!("{}", i18n.t("help_about"));
    println!();
    println!("{} cch [COMMAND]", i18n.t("help_label_usage"));
    println!();
    println!("{}", i18n.t("help_label_commands"));
    println!("  {}       {}", "browse".green(), i18n.t("help_browse"));
    println!("  {}         {}", "list".green(), i18n.t("help_list"));
    println!("  {}         {}", "copy".green(), i18n.t("help_copy"));
    println!("  {}   {}", "categories".green(), i18n.t("help_categories"));
    println!("  {}     {}", "versions".green(), i18n.t("help_versions"));
    println!();
    println!("{}", i18n.t("help_label_options"));
    println!("  -l, --lang <LANG>                 {}", i18n.t("help_opt_lang"));
    println!("  -g, --game-version <VERSION>      {}", i18n.t("help_opt_version"));
    println!("  -c, --category <CATEGORY>         {}", i18n.t("help_opt_category"));
    println!("  -h, --help                        Print help");
    println!();
    println!("{}", i18n.t("help_config_section"));
    println!("  - {}", i18n.t("help_config_language"));
    println!("  - {}", i18n.t("help_config_tui_mode"));
}
