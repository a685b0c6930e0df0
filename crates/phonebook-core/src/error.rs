use crate::domain::{ContactField, PhoneKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid {kind} phone number: {value:?}")]
    InvalidFormat { kind: PhoneKind, value: String },
    #[error("malformed record: expected 6 fields, found {fields}")]
    MalformedRecord { fields: usize },
    #[error("{0} is required")]
    RequiredFieldMissing(ContactField),
    #[error("{0} must not contain ','")]
    FieldContainsDelimiter(ContactField),
}
