use crate::domain::Contact;
use serde::Serialize;

/// A contact paired with its 1-based position in the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactListItemDto<'a> {
    pub number: usize,
    #[serde(flatten)]
    pub contact: &'a Contact,
}

impl<'a> ContactListItemDto<'a> {
    pub fn from_index(index: usize, contact: &'a Contact) -> Self {
        Self {
            number: index + 1,
            contact,
        }
    }
}
