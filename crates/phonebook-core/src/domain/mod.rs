pub mod contact;
pub mod phone;

pub use contact::{Contact, ContactField};
pub use phone::{normalize_landline, normalize_mobile, PhoneKind};
