//! # Prompts
//!
//! A [`Prompt`] asks one question and hands back either the line the user
//! typed or [`Input::Cancelled`]. Cancellation is a value, not an error: the
//! session simply abandons whatever operation was in progress.
//!
//! ```rust,no_run
//! use invtrack_cli::{Input, Prompt, TerminalPrompt};
//!
//! let mut prompt = TerminalPrompt::stdio();
//! if let Input::Provided(name) = prompt.ask("Item name:") {
//!     println!("You typed: {name}");
//! }
//! ```

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// What a single question produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Provided(String),
    /// No input was given (end of input, closed terminal, unrecoverable read error).
    Cancelled,
}

impl Input {
    pub fn into_option(self) -> Option<String> {
        match self {
            Input::Provided(answer) => Some(answer),
            Input::Cancelled => None,
        }
    }
}

/// Shown when a line is not valid UTF-8.
pub const UNREADABLE_INPUT: &str = "Couldn't read that input, try again.";

pub trait Prompt {
    fn ask(&mut self, question: &str) -> Input;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn ask(&mut self, question: &str) -> Input {
        (**self).ask(question)
    }
}

/// Line-oriented prompt over any reader/writer pair.
///
/// The question is written without a trailing newline and flushed, then one
/// line is read. The line terminator is stripped; everything else, including
/// surrounding spaces, is passed through untouched.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn ask(&mut self, question: &str) -> Input {
        loop {
            if let Err(e) = write!(self.output, "{question} ").and_then(|_| self.output.flush()) {
                tracing::warn!(error = %e, "failed to write prompt");
            }

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Input::Cancelled,
                Ok(_) => {
                    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
                    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
                    return Input::Provided(trimmed.to_string());
                }
                // The offending line has been consumed; ask again.
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    tracing::warn!(error = %e, "unreadable input line");
                    let _ = writeln!(self.output, "{UNREADABLE_INPUT}");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "couldn't read line; treating as cancelled");
                    return Input::Cancelled;
                }
            }
        }
    }
}

/// Prompt fed from a fixed list of answers, for tests and scripted runs.
///
/// Once the answers run out every further question is cancelled.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Input>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| Input::Provided(a.into())).collect(),
            asked: Vec::new(),
        }
    }

    /// Queue an explicit cancellation after the answers given so far.
    pub fn then_cancel(mut self) -> Self {
        self.answers.push_back(Input::Cancelled);
        self
    }

    pub fn then_answer(mut self, answer: impl Into<String>) -> Self {
        self.answers.push_back(Input::Provided(answer.into()));
        self
    }

    /// Every question asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Input {
        self.asked.push(question.to_string());
        self.answers.pop_front().unwrap_or(Input::Cancelled)
    }
}
