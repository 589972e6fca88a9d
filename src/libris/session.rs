//! # Interactive Session
//!
//! The borrow workflow and the menu shell need to ask the user questions. They
//! do so through the [`Session`] trait so the catalog never touches stdin or
//! stdout directly.
//!
//! - [`TerminalSession`]: line-based prompts over any `BufRead`/`Write` pair,
//!   normally stdin/stdout.
//! - [`ScriptedSession`]: replays canned answers. Used when selections arrive
//!   as CLI flags, and by tests.
//!
//! Reads are line-based: whatever follows the number on the same line is
//! dropped with it, so a malformed answer never leaks into the next prompt.

use crate::error::{LibrisError, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub trait Session {
    /// Shows `options` numbered from 1 and reads the user's pick.
    ///
    /// The returned number is not range-checked; that is the caller's job.
    fn prompt_selection(&mut self, label: &str, options: &[String]) -> Result<i64>;

    /// Reads one line of free text. `None` means the input is exhausted.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Parses a 1-based selection. Only the first token counts.
pub fn parse_selection(input: &str) -> Result<i64> {
    let token = input.split_whitespace().next().unwrap_or("");
    token
        .parse::<i64>()
        .map_err(|_| LibrisError::InputFormat(token.to_string()))
}

pub struct TerminalSession<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalSession<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Session for TerminalSession<R, W> {
    fn prompt_selection(&mut self, label: &str, options: &[String]) -> Result<i64> {
        writeln!(self.output, "Select a {}:", label)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, option)?;
        }
        write!(self.output, "Enter the number of the {}: ", label)?;
        self.output.flush()?;

        match self.read_line()? {
            Some(line) => parse_selection(&line),
            None => Err(LibrisError::InputFormat(String::new())),
        }
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }
}

/// A session that answers from a queue of prepared lines.
#[derive(Debug, Default)]
pub struct ScriptedSession {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedSession {
    pub fn new<I, T>(answers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Labels of every prompt issued so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Session for ScriptedSession {
    fn prompt_selection(&mut self, label: &str, _options: &[String]) -> Result<i64> {
        self.prompts.push(label.to_string());
        match self.answers.pop_front() {
            Some(answer) => parse_selection(&answer),
            None => Err(LibrisError::InputFormat(String::new())),
        }
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_leading_number_and_drops_the_rest() {
        assert_eq!(parse_selection("2").unwrap(), 2);
        assert_eq!(parse_selection("  3 and more ").unwrap(), 3);
        assert_eq!(parse_selection("-1").unwrap(), -1);
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = parse_selection("two").unwrap_err();
        assert!(matches!(err, LibrisError::InputFormat(ref s) if s == "two"));
        assert!(matches!(
            parse_selection("").unwrap_err(),
            LibrisError::InputFormat(_)
        ));
    }

    #[test]
    fn terminal_session_lists_options_one_based() {
        let input = Cursor::new("2\n");
        let mut session = TerminalSession::new(input, Vec::new());
        let options = vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()];

        let picked = session.prompt_selection("subscriber", &options).unwrap();
        assert_eq!(picked, 2);

        let out = String::from_utf8(session.into_output()).unwrap();
        assert!(out.contains("Select a subscriber:"));
        assert!(out.contains("1. Ada Lovelace"));
        assert!(out.contains("2. Alan Turing"));
        assert!(out.contains("Enter the number of the subscriber: "));
    }

    #[test]
    fn malformed_line_does_not_corrupt_the_next_prompt() {
        let input = Cursor::new("abc 7\n1\n");
        let mut session = TerminalSession::new(input, Vec::new());
        let options = vec!["Dune by Herbert".to_string()];

        assert!(session.prompt_selection("book", &options).is_err());
        assert_eq!(session.prompt_selection("book", &options).unwrap(), 1);
    }

    #[test]
    fn terminal_session_reports_end_of_input() {
        let mut session = TerminalSession::new(Cursor::new(""), Vec::new());
        assert_eq!(session.prompt_line("> ").unwrap(), None);
        assert!(session.prompt_selection("book", &[]).is_err());
    }

    #[test]
    fn scripted_session_records_prompts() {
        let mut session = ScriptedSession::new(["1", "x"]);
        assert_eq!(session.prompt_selection("subscriber", &[]).unwrap(), 1);
        assert!(session.prompt_selection("book", &[]).is_err());
        assert_eq!(session.prompts(), ["subscriber", "book"]);
        assert_eq!(session.remaining(), 0);
    }
}
