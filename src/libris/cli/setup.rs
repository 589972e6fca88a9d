use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("LIBRIS_GIT_HASH");
    const IS_RELEASE: &str = env!("LIBRIS_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "libris",
    bin_name = "libris",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Console catalog manager for library books and subscribers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the data files and config.json (defaults to $LIBRIS_HOME)
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Catalog,
    Report,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Catalog => "Catalog Commands:",
            CommandGroup::Report => "Listing & Sorting:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add-book" | "add-subscriber" | "borrow" => Some(CommandGroup::Catalog),
            "books" | "subscribers" | "sort-books" | "sort-subscribers" | "group" => {
                Some(CommandGroup::Report)
            }
            "save" | "load" | "clear" => Some(CommandGroup::Data),
            "config" | "shell" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Catalog,
            CommandGroup::Report,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("libris {version}\n"));
    output.push_str("Console catalog manager for library books and subscribers\n");
    output.push('\n');
    output.push_str("Usage: libris [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<18} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -d, --data-dir <PATH>  Directory holding the data files\n");
    output.push_str("  -v, --verbose          Verbose output\n");
    output.push_str("  -h, --help             Print help\n");
    output.push_str("  -V, --version          Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name, falling back to the grouped overview
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Catalog(CatalogCommands),

    #[command(flatten)]
    Report(ReportCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// Add a book (titles are unique, ignoring case)
    #[command(alias = "ab", display_order = 1)]
    AddBook {
        title: String,
        author: String,
        /// Numeric book id
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },

    /// Add a subscriber (names are unique, ignoring case)
    #[command(alias = "as", display_order = 2)]
    AddSubscriber { first_name: String, last_name: String },

    /// Let a subscriber borrow a book
    #[command(display_order = 3)]
    Borrow {
        /// Subscriber number as listed by `subscribers` (prompts when omitted)
        #[arg(long, short = 's', requires = "book", allow_negative_numbers = true)]
        subscriber: Option<String>,

        /// Book number as listed by `books`
        #[arg(long, short = 'b', requires = "subscriber", allow_negative_numbers = true)]
        book: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// List books
    #[command(alias = "lb", display_order = 10)]
    Books,

    /// List subscribers
    #[command(alias = "ls", display_order = 11)]
    Subscribers,

    /// Sort books by title and list them
    #[command(display_order = 12)]
    SortBooks,

    /// Sort subscribers by last and first name and list them
    #[command(display_order = 13)]
    SortSubscribers,

    /// Order subscribers by number of borrowed books
    #[command(display_order = 14)]
    Group {
        /// Show the counts as an aligned table
        #[arg(long)]
        table: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Write the catalog to the data files
    #[command(display_order = 20)]
    Save,

    /// Reload the catalog from the data files
    #[command(display_order = 21)]
    Load,

    /// Empty both data files
    #[command(display_order = 22)]
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (books-file, subscribers-file, library-name, autosave)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive menu (the default when no command is given)
    #[command(display_order = 31)]
    Shell,

    /// Print help for libris or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_book() {
        let cli =
            Cli::try_parse_from(["libris", "add-book", "Dune", "Frank Herbert", "7"]).unwrap();
        match cli.command {
            Some(Commands::Catalog(CatalogCommands::AddBook { title, author, id })) => {
                assert_eq!(title, "Dune");
                assert_eq!(author, "Frank Herbert");
                assert_eq!(id, 7);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_non_numeric_book_id() {
        assert!(Cli::try_parse_from(["libris", "add-book", "Dune", "Herbert", "seven"]).is_err());
    }

    #[test]
    fn borrow_flags_come_in_pairs() {
        assert!(Cli::try_parse_from(["libris", "borrow", "--subscriber", "1"]).is_err());
        let cli = Cli::try_parse_from(["libris", "borrow", "-s", "1", "-b", "2"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Catalog(CatalogCommands::Borrow { .. }))
        ));
    }

    #[test]
    fn aliases_resolve() {
        let cli = Cli::try_parse_from(["libris", "ls"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Report(ReportCommands::Subscribers))
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["libris", "books", "--data-dir", "/tmp/x", "-v"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }

    #[test]
    fn grouped_help_lists_every_visible_command() {
        let help = get_grouped_help();
        for name in ["add-book", "borrow", "sort-books", "group", "clear", "shell"] {
            assert!(help.contains(name), "missing {} in help", name);
        }
        assert!(help.contains("Catalog Commands:"));
    }
}
