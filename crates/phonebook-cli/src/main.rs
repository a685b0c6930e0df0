mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{backup, contacts, menu, Context};
use crate::error::{exit_code_for, report_error};
use phonebook_config as config;
use phonebook_store::{paths, ContactService};

#[derive(Debug, Parser)]
#[command(name = "phonebook", version, about = "phonebook CLI")]
struct Cli {
    /// Phone book file (overrides `book_path` from the config)
    #[arg(long, global = true)]
    book: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive menu (default)
    Menu,
    Add(contacts::AddContactArgs),
    Edit(contacts::EditContactArgs),
    List,
    Search(contacts::SearchArgs),
    Show(contacts::ShowArgs),
    Backup(backup::BackupArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        book,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let book_path = paths::resolve_book_path(book, app_config.book_path.clone())
        .with_context(|| "resolve phone book path")?;
    debug!(path = %book_path.display(), "phone book path resolved");

    let mut service = ContactService::open(&book_path)
        .with_context(|| format!("open phone book {}", book_path.display()))?;
    debug!(contacts = service.contacts().len(), "phone book loaded");

    let mut ctx = Context {
        service: &mut service,
        json,
        config: &app_config,
    };

    match command.unwrap_or(Command::Menu) {
        Command::Menu => menu::run(&mut ctx),
        Command::Add(args) => contacts::add_contact(&mut ctx, args),
        Command::Edit(args) => contacts::edit_contact(&mut ctx, args),
        Command::List => contacts::list_contacts(&mut ctx),
        Command::Search(args) => contacts::search_contacts(&mut ctx, args),
        Command::Show(args) => contacts::show_contact(&mut ctx, args),
        Command::Backup(args) => backup::backup(&mut ctx, args),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
