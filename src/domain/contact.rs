use std::fmt;

use serde::{Deserialize, Serialize};

/// CSV column labels, in the same order as the `Contact` fields.
pub const CSV_HEADER: [&str; 6] = [
    "Last Name",
    "First Name",
    "Middle Name",
    "Organization",
    "Work Phone",
    "Personal Phone",
];

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "Last Name")]
    pub last_name: String,

    #[serde(rename = "First Name")]
    pub first_name: String,

    #[serde(rename = "Middle Name")]
    pub middle_name: String,

    #[serde(rename = "Organization")]
    pub organization: String,

    #[serde(rename = "Work Phone")]
    pub work_phone: String,

    #[serde(rename = "Personal Phone")]
    pub personal_phone: String,
}

impl Contact {
    pub fn new(
        last_name: String,
        first_name: String,
        middle_name: String,
        organization: String,
        work_phone: String,
        personal_phone: String,
    ) -> Self {
        Contact {
            last_name,
            first_name,
            middle_name,
            organization,
            work_phone,
            personal_phone,
        }
    }

    /// Literal, case-sensitive match against the last name or the personal phone.
    pub fn matches(&self, term: &str) -> bool {
        self.last_name.contains(term) || self.personal_phone.contains(term)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Фамилия: {}, Имя: {}, Отчество: {}, Организация: {}, Рабочий телефон: {}, Личный телефон: {}",
            self.last_name,
            self.first_name,
            self.middle_name,
            self.organization,
            self.work_phone,
            self.personal_phone
        )
    }
}
