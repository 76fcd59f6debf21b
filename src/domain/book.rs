use super::search::search_by_last_name_or_phone;
use crate::prelude::{AppError, Contact};
use std::slice;

/// In-memory contacts, in insertion order. Positions shown to the user are 1-based.
#[derive(Debug, Default)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn add_contact(&mut self, contact: Contact) {
        tracing::debug!("Adding contact #{}", self.contacts.len() + 1);
        self.contacts.push(contact);
    }

    /// Converts a 1-based display number into a position in the book.
    pub fn position(&self, index: i64) -> Result<usize, AppError> {
        let out_of_range = AppError::IndexOutOfRange {
            index,
            len: self.contacts.len(),
        };

        let Some(position) = index.checked_sub(1).and_then(|i| usize::try_from(i).ok()) else {
            return Err(out_of_range);
        };

        if position < self.contacts.len() {
            Ok(position)
        } else {
            Err(out_of_range)
        }
    }

    /// Replaces the whole contact shown as number `index`.
    pub fn edit_contact(&mut self, index: i64, updated: Contact) -> Result<(), AppError> {
        let position = self.position(index)?;
        tracing::debug!("Replacing contact #{index}");
        self.contacts[position] = updated;
        Ok(())
    }

    pub fn list(&self) -> Numbered<slice::Iter<'_, Contact>> {
        Numbered::new(self.contacts.iter())
    }

    /// Matches are numbered from 1 within the result, not by their place in the book.
    pub fn search(&self, term: &str) -> Vec<(usize, &Contact)> {
        Numbered::new(search_by_last_name_or_phone(&self.contacts, term).into_iter()).collect()
    }
}

/// Pairs each contact with its 1-based display number.
pub struct Numbered<I> {
    inner: I,
    idx: usize,
}

impl<I> Numbered<I> {
    pub fn new(inner: I) -> Self {
        Self { inner, idx: 0 }
    }
}

impl<'a, I> Iterator for Numbered<I>
where
    I: Iterator<Item = &'a Contact>,
{
    type Item = (usize, &'a Contact);

    fn next(&mut self) -> Option<Self::Item> {
        let contact = self.inner.next()?;
        self.idx += 1;
        Some((self.idx, contact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(fields: [&str; 6]) -> Contact {
        let [last, first, middle, org, work, personal] = fields.map(str::to_string);
        Contact::new(last, first, middle, org, work, personal)
    }

    fn ivanov() -> Contact {
        contact(["Ivanov", "Ivan", "Ivanovich", "Acme", "111", "222"])
    }

    fn petrov() -> Contact {
        contact(["Petrov", "Petr", "Petrovich", "Beta", "333", "444"])
    }

    #[test]
    fn list_follows_insertion_order() {
        let mut book = ContactBook::new();
        book.add_contact(ivanov());
        book.add_contact(petrov());
        book.add_contact(ivanov());

        let listed: Vec<(usize, &Contact)> = book.list().collect();

        assert_eq!(
            listed,
            vec![(1, &ivanov()), (2, &petrov()), (3, &ivanov())]
        );
    }

    #[test]
    fn list_is_restartable_and_sees_updates() {
        let mut book = ContactBook::new();
        assert_eq!(book.list().count(), 0);

        book.add_contact(ivanov());
        assert_eq!(book.list().count(), 1);

        book.add_contact(petrov());
        assert_eq!(book.list().last(), Some((2, &petrov())));
    }

    #[test]
    fn edit_replaces_only_the_target() -> Result<(), AppError> {
        let mut book = ContactBook::from_contacts(vec![ivanov(), ivanov(), ivanov()]);

        book.edit_contact(2, petrov())?;

        assert_eq!(book.contact_list(), &[ivanov(), petrov(), ivanov()]);
        Ok(())
    }

    #[test]
    fn edit_out_of_range_leaves_book_unchanged() {
        let mut book = ContactBook::from_contacts(vec![ivanov()]);

        for index in [0, -1, 2, 99, i64::MIN, i64::MAX] {
            let result = book.edit_contact(index, petrov());
            assert!(matches!(
                result,
                Err(AppError::IndexOutOfRange { len: 1, .. })
            ));
        }

        assert_eq!(book.contact_list(), &[ivanov()]);
    }

    #[test]
    fn edit_on_empty_book_is_rejected() {
        let mut book = ContactBook::new();

        assert!(book.edit_contact(1, petrov()).is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn search_renumbers_matches() {
        let book = ContactBook::from_contacts(vec![ivanov(), petrov(), ivanov()]);

        let found = book.search("Ivanov");

        assert_eq!(found, vec![(1, &ivanov()), (2, &ivanov())]);
    }

    #[test]
    fn search_with_empty_term_returns_all() {
        let book = ContactBook::from_contacts(vec![ivanov(), petrov()]);

        assert_eq!(book.search("").len(), book.len());
    }

    #[test]
    fn scenario_add_edit_search() -> Result<(), AppError> {
        let mut book = ContactBook::new();
        book.add_contact(ivanov());

        let first = book.list().next().map(|(i, c)| format!("{i}. {c}"));
        assert!(first.is_some_and(|line| line.starts_with("1. Фамилия: Ivanov, ")));

        book.edit_contact(1, petrov())?;
        assert_eq!(book.list().next(), Some((1, &petrov())));

        assert_eq!(book.search("Petrov").len(), 1);
        assert!(book.search("zzz").is_empty());

        assert!(book.edit_contact(99, ivanov()).is_err());
        assert_eq!(book.contact_list(), &[petrov()]);
        Ok(())
    }
}
