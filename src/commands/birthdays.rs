//! Birthday commands.

use super::contacts::find_mut;
use super::{required_arg, Clock, CommandHandler};
use crate::book::AddressBook;
use crate::error::BookResult;

/// `add-birthday <name> <DD.MM.YYYY>`
pub struct AddBirthdayCommand;

impl CommandHandler for AddBirthdayCommand {
    fn handle(&self, args: &[String], book: &mut AddressBook) -> BookResult<String> {
        let name = required_arg(args, 0)?;
        let birthday = required_arg(args, 1)?;

        find_mut(book, name)?.set_birthday(birthday)?;
        Ok(format!("Birthday for {} set to {}.", name, birthday))
    }
}

/// `show-birthday <name>`
pub struct ShowBirthdayCommand;

impl CommandHandler for ShowBirthdayCommand {
    fn handle(&self, args: &[String], book: &mut AddressBook) -> BookResult<String> {
        let name = required_arg(args, 0)?;

        match book.find(name).and_then(|record| record.birthday()) {
            Some(birthday) => Ok(format!("Birthday for {}: {}", name, birthday)),
            None => Ok(format!(
                "Birthday for {} is not set or contact not found.",
                name
            )),
        }
    }
}

/// `birthdays` - who to congratulate over the coming days.
pub struct BirthdaysCommand {
    clock: Box<dyn Clock>,
    window_days: u32,
}

impl BirthdaysCommand {
    pub fn new(clock: Box<dyn Clock>, window_days: u32) -> Self {
        Self { clock, window_days }
    }
}

impl CommandHandler for BirthdaysCommand {
    fn handle(&self, _args: &[String], book: &mut AddressBook) -> BookResult<String> {
        let upcoming = book.upcoming_birthdays_within(self.clock.today(), self.window_days);
        if upcoming.is_empty() {
            return Ok("No upcoming birthdays.".to_string());
        }

        Ok(upcoming
            .iter()
            .map(|entry| format!("{} - {}", entry.name, entry.birthday))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::FixedClock;
    use crate::domain::ValidationError;
    use crate::error::BookError;
    use crate::models::Record;
    use chrono::NaiveDate;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn book_with(names: &[&str]) -> AddressBook {
        names.iter().map(|n| Record::new(*n).unwrap()).collect()
    }

    fn birthdays_on(d: u32, m: u32, y: i32) -> BirthdaysCommand {
        let today = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        BirthdaysCommand::new(Box::new(FixedClock::new(today)), 7)
    }

    #[test]
    fn test_add_and_show_birthday() {
        let mut book = book_with(&["Alice"]);

        let msg = AddBirthdayCommand
            .handle(&args(&["Alice", "12.05.1990"]), &mut book)
            .unwrap();
        assert_eq!(msg, "Birthday for Alice set to 12.05.1990.");

        let msg = ShowBirthdayCommand.handle(&args(&["Alice"]), &mut book).unwrap();
        assert_eq!(msg, "Birthday for Alice: 12.05.1990");
    }

    #[test]
    fn test_add_birthday_errors() {
        let mut book = book_with(&["Alice"]);

        let err = AddBirthdayCommand
            .handle(&args(&["Alice"]), &mut book)
            .unwrap_err();
        assert_eq!(err, BookError::NotEnoughArguments);

        let err = AddBirthdayCommand
            .handle(&args(&["Bob", "12.05.1990"]), &mut book)
            .unwrap_err();
        assert_eq!(err, BookError::NotFound("Bob".to_string()));

        let err = AddBirthdayCommand
            .handle(&args(&["Alice", "1990-05-12"]), &mut book)
            .unwrap_err();
        assert_eq!(
            err,
            BookError::Validation(ValidationError::InvalidDateFormat("1990-05-12".to_string()))
        );
    }

    #[test]
    fn test_show_birthday_not_set() {
        let mut book = book_with(&["Alice"]);
        let expected = "Birthday for Alice is not set or contact not found.";
        assert_eq!(
            ShowBirthdayCommand.handle(&args(&["Alice"]), &mut book).unwrap(),
            expected
        );
    }

    #[test]
    fn test_birthdays_lists_in_store_order() {
        let mut book = book_with(&["Alice", "Bob", "Carol"]);
        book.find_mut("Alice").unwrap().set_birthday("16.05.1990").unwrap();
        book.find_mut("Bob").unwrap().set_birthday("12.05.1985").unwrap();
        book.find_mut("Carol").unwrap().set_birthday("01.09.1970").unwrap();

        let msg = birthdays_on(10, 5, 2024).handle(&[], &mut book).unwrap();
        assert_eq!(msg, "Alice - 16.05.2024\nBob - 13.05.2024");
    }

    #[test]
    fn test_birthdays_empty() {
        let mut book = AddressBook::new();
        let msg = birthdays_on(10, 5, 2024).handle(&[], &mut book).unwrap();
        assert_eq!(msg, "No upcoming birthdays.");
    }
}
