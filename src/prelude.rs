pub use crate::cli::{Console, run::{run_app, run_session}};
pub use crate::domain::{
    Command,
    book::{ContactBook, Numbered},
    contact::{CSV_HEADER, Contact},
    search::search_by_last_name_or_phone,
};
pub use crate::errors::AppError;
pub use crate::storage::{ContactStore, stores::{CsvStorage, DEFAULT_CSV_PATH}};
