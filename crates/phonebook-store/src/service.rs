use crate::error::{Result, StoreError};
use crate::ContactStore;
use phonebook_core::{apply_edit, build_contact, matches_query, Contact, ContactEdit, ContactNew};
use std::path::Path;

/// Add, edit and search over one loaded phone book.
///
/// Each mutation validates its input first, then updates the in-memory
/// collection and rewrites the book; a failure at any step leaves both
/// untouched.
pub struct ContactService {
    store: ContactStore,
}

impl ContactService {
    pub fn new(store: ContactStore) -> Self {
        Self { store }
    }

    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(ContactStore::open(path)?))
    }

    pub fn contacts(&self) -> &[Contact] {
        self.store.contacts()
    }

    pub fn get(&self, index: usize) -> Result<&Contact> {
        self.store.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.store.len(),
        })
    }

    pub fn add_contact(&mut self, input: ContactNew) -> Result<&Contact> {
        let contact = build_contact(input)?;
        self.store.append(contact)
    }

    pub fn edit_contact(&mut self, index: usize, edit: &ContactEdit) -> Result<&Contact> {
        let updated = apply_edit(self.get(index)?, edit)?;
        self.store.replace(index, updated)
    }

    pub fn search_contacts(&self, query: &str) -> Vec<&Contact> {
        self.search_indexed(query)
            .into_iter()
            .map(|(_, contact)| contact)
            .collect()
    }

    /// Like [`search_contacts`](Self::search_contacts), keeping each hit's
    /// position in the book.
    pub fn search_indexed(&self, query: &str) -> Vec<(usize, &Contact)> {
        self.store
            .contacts()
            .iter()
            .enumerate()
            .filter(|(_, contact)| matches_query(contact, query))
            .collect()
    }

    pub fn backup_to(&self, path: &Path) -> Result<()> {
        self.store.backup_to(path)
    }
}
