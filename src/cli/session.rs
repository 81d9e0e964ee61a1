//! Interactive line-based session.
//!
//! Reads one command per line, runs it against the address book and writes
//! the result. `hello`, `close` and `exit` are handled here; everything else
//! goes through the `CommandProcessor`.

use crate::book::AddressBook;
use crate::commands::CommandProcessor;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_INPUT: &str = "Error: Input is not valid UTF-8.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `close` or `exit`
    Exit,
    /// Input ran out
    EndOfInput,
}

/// A REPL over any line source and output sink.
pub struct Session<'a, R, W> {
    processor: &'a CommandProcessor,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(processor: &'a CommandProcessor, input: R, output: W) -> Self {
        Self {
            processor,
            input,
            output,
        }
    }

    /// Run until `close`/`exit` or end of input.
    ///
    /// A line that is not valid UTF-8 is rejected with a message and the
    /// session carries on with the next line.
    pub fn run(&mut self, book: &mut AddressBook) -> io::Result<SessionEnd> {
        writeln!(self.output, "{}", GREETING)?;

        let mut raw = Vec::new();
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            raw.clear();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                writeln!(self.output)?;
                debug!("Input closed");
                return Ok(SessionEnd::EndOfInput);
            }

            let Ok(line) = std::str::from_utf8(&raw) else {
                warn!(bytes = raw.len(), "Skipping line that is not valid UTF-8");
                writeln!(self.output, "{}", INVALID_INPUT)?;
                continue;
            };

            let mut words = line.split_whitespace();
            let Some(command) = words.next() else {
                continue;
            };
            let command = command.to_lowercase();
            let args: Vec<String> = words.map(str::to_string).collect();

            match command.as_str() {
                "close" | "exit" => {
                    writeln!(self.output, "{}", FAREWELL)?;
                    return Ok(SessionEnd::Exit);
                }
                "hello" => writeln!(self.output, "How can I help you?")?,
                _ => {
                    let reply = self.processor.execute(&command, &args, book);
                    writeln!(self.output, "{}", reply)?;
                }
            }
        }
    }
}
