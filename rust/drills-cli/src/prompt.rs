//! Whitespace-token input with optional prompts.
//!
//! Values may be typed one per line or several on a line (`7 3 2 5`); each
//! request consumes the next token.

use crate::error::CliError;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
    echo: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompts are written to `output` before each read.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
            echo: true,
        }
    }

    /// Like [`Prompter::new`] but never writes prompt text.
    pub fn quiet(input: R, output: W) -> Self {
        Self {
            echo: false,
            ..Self::new(input, output)
        }
    }

    pub fn echoes(&self) -> bool {
        self.echo
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write `text` if prompting is enabled.
    pub fn say(&mut self, text: &str) -> Result<(), CliError> {
        if self.echo {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Next whitespace-separated token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>, CliError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Show `prompt` and read one integer for `field`.
    pub fn ask_i64(&mut self, prompt: &str, field: &'static str) -> Result<i64, CliError> {
        self.say(prompt)?;
        let token = self
            .next_token()?
            .ok_or(CliError::UnexpectedEof { field })?;
        token
            .parse::<i64>()
            .map_err(|_| CliError::InvalidNumber { field, input: token })
    }
}
