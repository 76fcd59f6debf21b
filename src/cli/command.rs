use clap::{Parser, builder::BoolishValueParser};
use std::path::PathBuf;

/// Every option has a default, so a bare invocation starts an empty book
/// that is written to ./contacts.csv on exit.
#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Interactive contact book")]
pub struct Cli {
    /// CSV file written on exit (a directory gets contacts.csv appended)
    #[arg(long, env = "CONTACTS_FILE", default_value = "contacts.csv")]
    pub file: PathBuf,

    /// Load existing contacts from the CSV file before the session starts
    #[arg(long, env = "CONTACTS_LOAD", value_parser = BoolishValueParser::new())]
    pub load: bool,
}
