//! # CLI Layer
//!
//! This module is **one possible UI client** for libris. It is the only place
//! that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Flow
//!
//! 1. Parse arguments via clap, install logging
//! 2. Resolve the data dir and build the API, loading the saved catalog for
//!    commands that read it
//! 3. Dispatch to a `handle_*` function
//! 4. Print the `CmdResult`, autosave when the catalog changed
//!
//! Catalog rejections are returned as errors; `main` prints them and exits
//! with status 1. The menu shell prints them itself and carries on.

use super::logging;
use super::render::{print_result, render_messages, render_tallies};
use super::setup::{
    print_grouped_help, print_help_for_command, CatalogCommands, Cli, Commands, DataCommands,
    MiscCommands, ReportCommands,
};
use super::shell;
use clap::Parser;
use libris::api::{CmdMessage, CmdResult, ConfigAction, LibrisApi};
use libris::error::Result;
use libris::init::{initialize, open, resolve_data_dir};
use libris::session::{ScriptedSession, TerminalSession};
use libris::store::fs::FileStore;
use tracing::warn;

struct AppContext {
    api: LibrisApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return handle_help(command.as_deref());
    }

    let mut ctx = init_context(&cli, loads_catalog(cli.command.as_ref()))?;

    match cli.command {
        Some(Commands::Catalog(cmd)) => match cmd {
            CatalogCommands::AddBook { title, author, id } => {
                handle_add_book(&mut ctx, &title, &author, id)
            }
            CatalogCommands::AddSubscriber {
                first_name,
                last_name,
            } => handle_add_subscriber(&mut ctx, &first_name, &last_name),
            CatalogCommands::Borrow { subscriber, book } => {
                handle_borrow(&mut ctx, subscriber, book)
            }
        },
        Some(Commands::Report(cmd)) => match cmd {
            ReportCommands::Books => handle_list_books(&ctx),
            ReportCommands::Subscribers => handle_list_subscribers(&ctx),
            ReportCommands::SortBooks => handle_sort_books(&mut ctx),
            ReportCommands::SortSubscribers => handle_sort_subscribers(&mut ctx),
            ReportCommands::Group { table } => handle_group(&mut ctx, table),
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Save => handle_save(&mut ctx),
            DataCommands::Load => handle_load(&mut ctx),
            DataCommands::Clear => handle_clear(&mut ctx),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
            MiscCommands::Shell => handle_shell(&mut ctx),
            MiscCommands::Help { command } => handle_help(command.as_deref()),
        },
        None => handle_shell(&mut ctx),
    }
}

fn init_context(cli: &Cli, load_catalog: bool) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = if load_catalog {
        initialize(&data_dir)?
    } else {
        open(&data_dir)?
    };
    Ok(AppContext { api: ctx.api })
}

/// Commands that only touch the data files or `config.json` skip the startup
/// load, so they keep working when a data file is corrupt. The shell loads on
/// its own and only warns.
fn loads_catalog(command: Option<&Commands>) -> bool {
    !matches!(
        command,
        None | Some(Commands::Data(DataCommands::Load | DataCommands::Clear))
            | Some(Commands::Misc(
                MiscCommands::Config { .. } | MiscCommands::Shell | MiscCommands::Help { .. }
            ))
    )
}

/// Prints the result and persists it if it changed the catalog.
fn finish(ctx: &mut AppContext, result: CmdResult) -> Result<()> {
    print_result(&result);
    ctx.api.autosave(&result)
}

fn handle_add_book(ctx: &mut AppContext, title: &str, author: &str, id: i32) -> Result<()> {
    let result = ctx.api.add_book(title, author, id)?;
    finish(ctx, result)
}

fn handle_add_subscriber(ctx: &mut AppContext, first_name: &str, last_name: &str) -> Result<()> {
    let result = ctx.api.add_subscriber(first_name, last_name)?;
    finish(ctx, result)
}

fn handle_borrow(
    ctx: &mut AppContext,
    subscriber: Option<String>,
    book: Option<String>,
) -> Result<()> {
    let result = match (subscriber, book) {
        (Some(s), Some(b)) => ctx.api.borrow_book(&mut ScriptedSession::new([s, b]))?,
        _ => ctx.api.borrow_book(&mut TerminalSession::stdio())?,
    };
    finish(ctx, result)
}

fn handle_list_books(ctx: &AppContext) -> Result<()> {
    print_result(&ctx.api.list_books()?);
    Ok(())
}

fn handle_list_subscribers(ctx: &AppContext) -> Result<()> {
    print_result(&ctx.api.list_subscribers()?);
    Ok(())
}

fn handle_sort_books(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.sort_books()?;
    finish(ctx, result)
}

fn handle_sort_subscribers(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.sort_subscribers()?;
    finish(ctx, result)
}

fn handle_group(ctx: &mut AppContext, table: bool) -> Result<()> {
    let result = ctx.api.group_subscribers()?;
    if table {
        print!("{}", render_tallies(&result.tallies));
        return ctx.api.autosave(&result);
    }
    finish(ctx, result)
}

fn handle_save(ctx: &mut AppContext) -> Result<()> {
    print_result(&ctx.api.save()?);
    Ok(())
}

fn handle_load(ctx: &mut AppContext) -> Result<()> {
    print_result(&ctx.api.load()?);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    print_result(&ctx.api.clear()?);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = ctx.api.configure(action)?;
    print_result(&result);
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    if let Err(e) = ctx.api.load() {
        warn!(error = %e, "saved catalog could not be loaded");
        let notice = CmdMessage::warning(format!(
            "Could not load saved data: {}. Starting with an empty catalog.",
            e
        ));
        print!("{}", render_messages(&[notice]));
    }
    let mut session = TerminalSession::stdio();
    let mut stdout = std::io::stdout();
    shell::run(&mut ctx.api, &mut session, &mut stdout)
}

fn handle_help(command: Option<&str>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(cmd),
        None => print_grouped_help(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loads(args: &[&str]) -> bool {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        loads_catalog(cli.command.as_ref())
    }

    #[test]
    fn repair_commands_skip_the_startup_load() {
        let cases: [&[&str]; 5] = [
            &["libris", "clear"],
            &["libris", "load"],
            &["libris", "config", "books-file", "books.json"],
            &["libris", "shell"],
            &["libris"],
        ];
        for args in cases {
            assert!(!loads(args), "{:?}", args);
        }
    }

    #[test]
    fn catalog_commands_load_first() {
        let cases: [&[&str]; 4] = [
            &["libris", "books"],
            &["libris", "save"],
            &["libris", "add-book", "Dune", "Herbert", "1"],
            &["libris", "group"],
        ];
        for args in cases {
            assert!(loads(args), "{:?}", args);
        }
    }
}
