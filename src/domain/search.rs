use crate::prelude::Contact;

/// Linear scan keeping store order.
pub fn search_by_last_name_or_phone<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    contacts.iter().filter(|c| c.matches(term)).collect()
}
