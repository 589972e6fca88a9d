//! # Libris CLI
//!
//! The binary is intentionally thin: everything user-facing lives in `cli/`,
//! and this file only runs it and maps failure to an exit code.
//!
//! - `cli/setup.rs`: clap argument definitions
//! - `cli/commands.rs`: context wiring and one handler per subcommand
//! - `cli/shell.rs`: the numbered menu loop
//! - `cli/render.rs`: turning `CmdResult` values into terminal text
//! - `cli/logging.rs`: tracing subscriber setup

use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
