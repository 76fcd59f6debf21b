use crate::{
    cli::{Console, EDIT_CONTACT_PROMPTS, NEW_CONTACT_PROMPTS, command::Cli},
    prelude::{AppError, Command, ContactBook, ContactStore, CsvStorage},
};
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead, Write};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    let storage = CsvStorage::new(Some(cli.file.as_path()))?;
    tracing::info!("Contacts file: {}", storage.path().display());

    // Without --load every run starts empty and the save replaces the old file.
    let mut book = if cli.load {
        ContactBook::from_contacts(storage.load()?)
    } else {
        ContactBook::new()
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    run_session(&mut book, &mut console, &storage)
}

/// Menu loop; returns after a successful save.
pub fn run_session<R, W>(
    book: &mut ContactBook,
    console: &mut Console<R, W>,
    storage: &dyn ContactStore,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    loop {
        console.show_menu()?;
        let choice = console.prompt("Введите номер действия: ")?;

        let command = match Command::from_menu(&choice) {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!("{e}");
                console.say(
                    "Некорректный выбор. Пожалуйста, выберите существующий номер действия.",
                )?;
                continue;
            }
        };

        match command {
            Command::ListContacts => {
                console.say("Список контактов:")?;
                console.show_entries(book.list())?;
            }

            Command::AddContact => {
                let contact = console.prompt_contact(&NEW_CONTACT_PROMPTS)?;
                book.add_contact(contact);
                console.say("Контакт успешно добавлен.")?;
            }

            Command::EditContact => {
                let index = console
                    .prompt_as_int("Введите номер контакта, который необходимо отредактировать: ")?;

                if let Err(e) = book.position(index) {
                    tracing::debug!("{e}");
                    console.say("Некорректный номер контакта.")?;
                    continue;
                }

                let updated = console.prompt_contact(&EDIT_CONTACT_PROMPTS)?;
                book.edit_contact(index, updated)?;
                console.say("Контакт успешно отредактирован.")?;
            }

            Command::SearchContacts => {
                let term = console.prompt("Введите имя или номер телефона для поиска: ")?;
                let found = book.search(&term);

                if found.is_empty() {
                    console.say("Контакт не найден")?;
                } else {
                    console.say("Найденные контакты:")?;
                    console.show_entries(found)?;
                }
            }

            Command::SaveAndExit => {
                storage.save(book.contact_list())?;
                console.say(format!(
                    "Контакты успешно сохранены в файл {}.",
                    storage.path().display()
                ))?;
                console.say("Данные сохранены. Программа завершена.")?;
                return Ok(());
            }
        }
    }
}
