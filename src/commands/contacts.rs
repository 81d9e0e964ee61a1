//! Contact and phone commands.

use super::{required_arg, CommandHandler};
use crate::book::AddressBook;
use crate::error::{BookError, BookResult};
use crate::models::Record;

/// `add <name> [phone]` - create a contact or add a phone to an existing one.
///
/// The phone is validated before anything is stored, so an invalid number
/// never leaves a half-created contact behind.
pub struct AddContactCommand;

impl CommandHandler for AddContactCommand {
    fn handle(&self, args: &[String], book: &mut AddressBook) -> BookResult<String> {
        let name = required_arg(args, 0)?;
        let phone = args.get(1).map(String::as_str);

        if let Some(record) = book.find_mut(name) {
            if let Some(phone) = phone {
                record.add_phone(phone)?;
            }
            return Ok(format!("Contact {} updated.", name));
        }

        let mut record = Record::new(name)?;
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        let message = format!("Contact {} added.", record.name());
        book.add_record(record);
        Ok(message)
    }
}

/// `change <name> <old> <new>` - replace one phone number.
pub struct ChangeContactCommand;

impl CommandHandler for ChangeContactCommand {
    fn handle(&self, args: &[String], book: &mut AddressBook) -> BookResult<String> {
        let name = required_arg(args, 0)?;
        let old_phone = required_arg(args, 1)?;
        let new_phone = required_arg(args, 2)?;

        let record = find_mut(book, name)?;
        record.edit_phone(old_phone, new_phone)?;
        Ok(format!(
            "Phone number for {} changed from {} to {}.",
            name, old_phone, new_phone
        ))
    }
}

/// `phone <name>` - list a contact's phone numbers.
pub struct ShowPhoneCommand;

impl CommandHandler for ShowPhoneCommand {
    fn handle(&self, args: &[String], book: &mut AddressBook) -> BookResult<String> {
        let name = required_arg(args, 0)?;
        let record = book
            .find(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        Ok(format!("Phones for {}: {}", name, record.joined_phones(", ")))
    }
}

/// `remove-phone <name> <phone>`
pub struct RemovePhoneCommand;

impl CommandHandler for RemovePhoneCommand {
    fn handle(&self, args: &[String], book: &mut AddressBook) -> BookResult<String> {
        let name = required_arg(args, 0)?;
        let phone = required_arg(args, 1)?;

        let record = find_mut(book, name)?;
        if record.find_phone(phone).is_none() {
            return Err(BookError::PhoneNotFound(phone.to_string()));
        }
        record.remove_phone(phone);
        Ok(format!("Phone {} removed from {}.", phone, name))
    }
}

/// `delete <name>`
pub struct DeleteContactCommand;

impl CommandHandler for DeleteContactCommand {
    fn handle(&self, args: &[String], book: &mut AddressBook) -> BookResult<String> {
        let name = required_arg(args, 0)?;
        book.delete(name)
            .map(|_| format!("Contact {} deleted.", name))
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }
}

/// `all` - every contact, one per line.
pub struct ShowAllCommand;

impl CommandHandler for ShowAllCommand {
    fn handle(&self, _args: &[String], book: &mut AddressBook) -> BookResult<String> {
        if book.is_empty() {
            return Ok("No contacts saved.".to_string());
        }
        Ok(book.describe())
    }
}

pub(super) fn find_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))
}
