pub mod book;
pub mod contact;
pub mod search;

use crate::errors::AppError;

/// Menu actions, numbered as they appear on screen.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    ListContacts,
    AddContact,
    EditContact,
    SearchContacts,
    SaveAndExit,
}

impl Command {
    pub fn from_menu(choice: &str) -> Result<Self, AppError> {
        match choice {
            "1" => Ok(Command::ListContacts),
            "2" => Ok(Command::AddContact),
            "3" => Ok(Command::EditContact),
            "4" => Ok(Command::SearchContacts),
            "5" => Ok(Command::SaveAndExit),
            _ => Err(AppError::ParseCommand(choice.to_string())),
        }
    }
}
