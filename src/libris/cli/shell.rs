//! # Menu Shell
//!
//! The interactive numbered menu. Every choice maps onto one API call, and
//! every error is printed and swallowed so the loop keeps running until the
//! user picks `0` or the input ends.
//!
//! The shell writes to any `Write` and reads through a [`Session`], which keeps
//! it testable with a [`ScriptedSession`](libris::session::ScriptedSession).

use super::render::{render_error, render_listing, render_messages};
use libris::api::{CmdResult, LibrisApi};
use libris::error::{LibrisError, Result};
use libris::session::{parse_selection, Session};
use libris::store::DataStore;
use std::io::Write;
use tracing::{debug, warn};

const MENU: &str = "\
Library Management System
 1. Add book
 2. Add subscriber
 3. Display books
 4. Display subscribers
 5. Sort books by title
 6. Group subscribers by borrowed books
 7. Borrow a book
 8. Save data
 9. Load data
10. Sort subscribers by name
11. Clear data files
 0. Exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddBook,
    AddSubscriber,
    ListBooks,
    ListSubscribers,
    SortBooks,
    Group,
    Borrow,
    Save,
    Load,
    SortSubscribers,
    Clear,
    Exit,
}

impl MenuChoice {
    fn from_number(n: i64) -> Option<Self> {
        let choice = match n {
            1 => MenuChoice::AddBook,
            2 => MenuChoice::AddSubscriber,
            3 => MenuChoice::ListBooks,
            4 => MenuChoice::ListSubscribers,
            5 => MenuChoice::SortBooks,
            6 => MenuChoice::Group,
            7 => MenuChoice::Borrow,
            8 => MenuChoice::Save,
            9 => MenuChoice::Load,
            10 => MenuChoice::SortSubscribers,
            11 => MenuChoice::Clear,
            0 => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// What a single menu step produced.
enum Step {
    Done(CmdResult),
    /// Input ran out mid-question
    Eof,
}

pub fn run<S, T, W>(api: &mut LibrisApi<S>, session: &mut T, out: &mut W) -> Result<()>
where
    S: DataStore,
    T: Session,
    W: Write,
{
    loop {
        write!(out, "\n{}", MENU)?;
        out.flush()?;

        let Some(line) = session.prompt_line("Choose an option: ")? else {
            debug!("input closed, leaving shell");
            return Ok(());
        };

        let choice = match parse_selection(&line) {
            Ok(n) => MenuChoice::from_number(n),
            Err(e) => {
                write!(out, "{}", render_error(&e))?;
                continue;
            }
        };
        let Some(choice) = choice else {
            writeln!(out, "Invalid option. Please try again.")?;
            continue;
        };
        if choice == MenuChoice::Exit {
            writeln!(out, "Exiting...")?;
            return Ok(());
        }

        match dispatch(api, session, choice) {
            Ok(Step::Done(result)) => {
                write!(out, "{}", render_listing(&result))?;
                write!(out, "{}", render_messages(&result.messages))?;
            }
            Ok(Step::Eof) => return Ok(()),
            Err(e) => {
                if !e.is_rejection() {
                    warn!(error = %e, ?choice, "menu action failed");
                }
                write!(out, "{}", render_error(&e))?;
            }
        }
    }
}

fn dispatch<S: DataStore, T: Session>(
    api: &mut LibrisApi<S>,
    session: &mut T,
    choice: MenuChoice,
) -> Result<Step> {
    let result = match choice {
        MenuChoice::AddBook => {
            let Some(title) = session.prompt_line("Enter book title: ")? else {
                return Ok(Step::Eof);
            };
            let Some(author) = session.prompt_line("Enter book author: ")? else {
                return Ok(Step::Eof);
            };
            let Some(id) = session.prompt_line("Enter book ID: ")? else {
                return Ok(Step::Eof);
            };
            let id = parse_book_id(&id)?;
            api.add_book(title.trim(), author.trim(), id)?
        }
        MenuChoice::AddSubscriber => {
            let Some(first) = session.prompt_line("Enter subscriber first name: ")? else {
                return Ok(Step::Eof);
            };
            let Some(last) = session.prompt_line("Enter subscriber last name: ")? else {
                return Ok(Step::Eof);
            };
            api.add_subscriber(first.trim(), last.trim())?
        }
        MenuChoice::ListBooks => api.list_books()?,
        MenuChoice::ListSubscribers => api.list_subscribers()?,
        MenuChoice::SortBooks => api.sort_books()?,
        MenuChoice::SortSubscribers => api.sort_subscribers()?,
        MenuChoice::Group => api.group_subscribers()?,
        MenuChoice::Borrow => api.borrow_book(session)?,
        MenuChoice::Save => api.save()?,
        MenuChoice::Load => api.load()?,
        MenuChoice::Clear => api.clear()?,
        MenuChoice::Exit => CmdResult::default(),
    };
    Ok(Step::Done(result))
}

fn parse_book_id(input: &str) -> Result<i32> {
    let n = parse_selection(input)?;
    i32::try_from(n).map_err(|_| LibrisError::InputFormat(input.trim().to_string()))
}
