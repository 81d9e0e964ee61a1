//! User-facing commands.
//!
//! Each command receives its whitespace-split arguments and the address book,
//! and returns the message to display. Handlers report failures as
//! `BookError`; `CommandProcessor::execute` is the one place where those
//! errors become display strings.

mod birthdays;
mod clock;
mod contacts;

pub use birthdays::{AddBirthdayCommand, BirthdaysCommand, ShowBirthdayCommand};
pub use clock::{Clock, FixedClock, SystemClock};
pub use contacts::{
    AddContactCommand, ChangeContactCommand, DeleteContactCommand, RemovePhoneCommand,
    ShowAllCommand, ShowPhoneCommand,
};

use crate::book::AddressBook;
use crate::error::{BookError, BookResult};
use std::collections::HashMap;
use tracing::{debug, warn};

/// A single command bound to a name in the `CommandProcessor`.
pub trait CommandHandler {
    /// Run the command and produce the message for the user.
    fn handle(&self, args: &[String], book: &mut AddressBook) -> BookResult<String>;
}

/// Explicit table from command name to handler.
#[derive(Default)]
pub struct CommandProcessor {
    commands: HashMap<&'static str, Box<dyn CommandHandler>>,
}

impl CommandProcessor {
    /// Create a processor with no commands registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with every built-in command registered.
    ///
    /// `clock` supplies "today" for the `birthdays` command and
    /// `window_days` is its lookahead.
    pub fn with_default_commands(clock: Box<dyn Clock>, window_days: u32) -> Self {
        let mut processor = Self::new();
        processor.register_command("add", AddContactCommand);
        processor.register_command("change", ChangeContactCommand);
        processor.register_command("phone", ShowPhoneCommand);
        processor.register_command("remove-phone", RemovePhoneCommand);
        processor.register_command("delete", DeleteContactCommand);
        processor.register_command("all", ShowAllCommand);
        processor.register_command("add-birthday", AddBirthdayCommand);
        processor.register_command("show-birthday", ShowBirthdayCommand);
        processor.register_command("birthdays", BirthdaysCommand::new(clock, window_days));
        processor
    }

    /// Bind `handler` to `name`, replacing any previous binding.
    pub fn register_command(&mut self, name: &'static str, handler: impl CommandHandler + 'static) {
        self.commands.insert(name, Box::new(handler));
    }

    /// Registered command names, sorted.
    pub fn command_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Run a command and return its typed outcome.
    pub fn try_execute(
        &self,
        command: &str,
        args: &[String],
        book: &mut AddressBook,
    ) -> BookResult<String> {
        let handler = self
            .commands
            .get(command)
            .ok_or_else(|| BookError::UnknownCommand(command.to_string()))?;
        debug!(command, args = args.len(), "Executing command");
        handler.handle(args, book)
    }

    /// Run a command and render any failure as its user message.
    pub fn execute(&self, command: &str, args: &[String], book: &mut AddressBook) -> String {
        match self.try_execute(command, args, book) {
            Ok(message) => message,
            Err(e) => {
                warn!(command, error = ?e, "Command failed");
                e.to_string()
            }
        }
    }
}

/// Fetch a required positional argument.
pub(crate) fn required_arg(args: &[String], index: usize) -> BookResult<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(BookError::NotEnoughArguments)
}
