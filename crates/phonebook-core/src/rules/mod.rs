pub mod search;
pub mod validation;

pub use search::matches_query;
pub use validation::{apply_edit, build_contact, ContactEdit, ContactNew};
