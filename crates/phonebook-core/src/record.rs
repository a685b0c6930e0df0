//! Line codec for the phone book file.
//!
//! One contact per line, six comma-joined fields in a fixed order. Values are
//! not escaped, so a comma inside a field produces a line that no longer
//! decodes; [`Contact::validate`] keeps such values out of the book.
use crate::domain::Contact;
use crate::error::CoreError;

pub const FIELD_SEPARATOR: char = ',';

pub fn encode(contact: &Contact) -> String {
    let mut line = contact.to_string();
    line.push('\n');
    line
}

pub fn decode(line: &str) -> Result<Contact, CoreError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [last_name, first_name, patronymic, organization, work_phone, personal_phone] =
        parts.as_slice()
    else {
        return Err(CoreError::MalformedRecord {
            fields: parts.len(),
        });
    };

    Ok(Contact {
        last_name: (*last_name).to_string(),
        first_name: (*first_name).to_string(),
        patronymic: (*patronymic).to_string(),
        organization: (*organization).to_string(),
        work_phone: (*work_phone).to_string(),
        personal_phone: (*personal_phone).to_string(),
    })
}
