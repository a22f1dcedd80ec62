//! Blocking prompts.
//!
//! [`TerminalPrompt`] drives the real terminal through `inquire` and hides
//! the password as it is typed. [`LinePrompt`] reads plain lines from any
//! reader, which is what tests use.

use std::io::{BufRead, Write};

use inquire::{Password, PasswordDisplayMode, Text};

use crate::errors::AutholasResult;

/// Something that can ask the user a question and return the answer.
pub trait Prompt {
    /// Show `query` and return the line the user typed, without the line ending.
    fn ask(&mut self, query: &str) -> AutholasResult<String>;

    /// Like [`Prompt::ask`], but the answer must not be echoed.
    fn ask_password(&mut self, query: &str) -> AutholasResult<String>;
}

/// A [`Prompt`] on the interactive terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, query: &str) -> AutholasResult<String> {
        Ok(Text::new(query.trim_end()).prompt()?)
    }

    fn ask_password(&mut self, query: &str) -> AutholasResult<String> {
        let password = Password::new(query.trim_end())
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Hidden)
            .prompt()?;
        Ok(password)
    }
}

/// A [`Prompt`] over any reader/writer pair.
///
/// Input is read verbatim, passwords included.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, query: &str) -> AutholasResult<String> {
        write!(self.output, "{query}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(trimmed.to_string())
    }

    fn ask_password(&mut self, query: &str) -> AutholasResult<String> {
        self.ask(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_one_line_per_question() {
        let mut output = Vec::new();
        let mut prompt = LinePrompt::new(Cursor::new("alice\r\nhunter2\n"), &mut output);

        assert_eq!(prompt.ask("Username: ").unwrap(), "alice");
        assert_eq!(prompt.ask_password("Password: ").unwrap(), "hunter2");
        drop(prompt);

        assert_eq!(String::from_utf8(output).unwrap(), "Username: Password: ");
    }

    #[test]
    fn keeps_inner_whitespace() {
        let mut prompt = LinePrompt::new(Cursor::new(" pass word \n"), Vec::new());
        assert_eq!(prompt.ask_password("Password: ").unwrap(), " pass word ");
    }

    #[test]
    fn eof_yields_empty_answer() {
        let mut prompt = LinePrompt::new(Cursor::new(""), Vec::new());
        assert_eq!(prompt.ask("Press Enter to exit...").unwrap(), "");
    }
}
