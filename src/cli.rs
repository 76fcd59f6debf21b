pub mod command;
pub mod run;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

pub const MENU: [&str; 6] = [
    "Выберите действие:",
    "1. Вывод контактов",
    "2. Добавление контакта",
    "3. Редактирование контакта",
    "4. Поиск контакта",
    "5. Выход",
];

/// Prompts for the six contact fields, in field order.
pub const NEW_CONTACT_PROMPTS: [&str; 6] = [
    "Введите фамилию: ",
    "Введите имя: ",
    "Введите отчество: ",
    "Введите название организации: ",
    "Введите рабочий телефон: ",
    "Введите личный телефон (сотовый): ",
];

pub const EDIT_CONTACT_PROMPTS: [&str; 6] = [
    "Введите новую фамилию: ",
    "Введите новое имя: ",
    "Введите новое отчество: ",
    "Введите новое название организации: ",
    "Введите новый рабочий телефон: ",
    "Введите новый личный телефон (сотовый): ",
];

/// Line-oriented dialogue over any reader/writer pair.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    // OUTPUT FUNCTIONS
    pub fn show_menu(&mut self) -> Result<(), AppError> {
        for line in MENU {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }

    pub fn say(&mut self, message: impl Display) -> Result<(), AppError> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }

    pub fn show_entries<'a>(
        &mut self,
        entries: impl IntoIterator<Item = (usize, &'a Contact)>,
    ) -> Result<(), AppError> {
        for (i, contact) in entries {
            writeln!(self.writer, "{i}. {contact}")?;
        }
        Ok(())
    }

    // INPUT FUNCTIONS

    /// Prints `text` without a newline and returns the reply minus its line ending.
    pub fn prompt(&mut self, text: &str) -> Result<String, AppError> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(AppError::InputClosed);
        }

        let trimmed_len = input.trim_end_matches(['\n', '\r']).len();
        input.truncate(trimmed_len);
        Ok(input)
    }

    /// Numbers beyond `i64` saturate; only non-numeric replies are errors.
    pub fn prompt_as_int(&mut self, text: &str) -> Result<i64, AppError> {
        let value = self.prompt(text)?;

        match value.trim().parse::<i64>() {
            Ok(number) => Ok(number),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(e.into()),
            },
        }
    }

    pub fn prompt_contact(&mut self, prompts: &[&str; 6]) -> Result<Contact, AppError> {
        let [last, first, middle, org, work, personal] = prompts;

        Ok(Contact::new(
            self.prompt(last)?,
            self.prompt(first)?,
            self.prompt(middle)?,
            self.prompt(org)?,
            self.prompt(work)?,
            self.prompt(personal)?,
        ))
    }
}
