pub mod domain;
pub mod dto;
pub mod error;
pub mod record;
pub mod rules;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use record::{decode, encode, FIELD_SEPARATOR};
pub use rules::*;
