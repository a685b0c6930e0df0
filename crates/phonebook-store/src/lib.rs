pub mod backup;
pub mod error;
pub mod file;
pub mod paths;
pub mod service;

pub use file::{load, save};
pub use service::ContactService;

use crate::error::{Result, StoreError};
use phonebook_core::Contact;
use std::path::{Path, PathBuf};

/// The loaded phone book: contacts in insertion order plus the file they
/// are persisted to. Every mutation rewrites the whole file.
pub struct ContactStore {
    path: PathBuf,
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn open(path: &Path) -> Result<Self> {
        let contacts = file::load(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            contacts,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn save(&self) -> Result<()> {
        file::save(&self.path, &self.contacts)
    }

    pub fn append(&mut self, contact: Contact) -> Result<&Contact> {
        self.contacts.push(contact);
        if let Err(err) = self.save() {
            self.contacts.pop();
            return Err(err);
        }
        let index = self.contacts.len() - 1;
        Ok(&self.contacts[index])
    }

    pub fn replace(&mut self, index: usize, contact: Contact) -> Result<&Contact> {
        let len = self.contacts.len();
        let slot = self
            .contacts
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        let previous = std::mem::replace(slot, contact);
        if let Err(err) = self.save() {
            self.contacts[index] = previous;
            return Err(err);
        }
        Ok(&self.contacts[index])
    }

    pub fn backup_to(&self, path: &Path) -> Result<()> {
        backup::backup_to(&self.path, path)
    }
}
