use crate::domain::phone::{
    LANDLINE_MAX_DIGITS, LANDLINE_MIN_DIGITS, MOBILE_DIGITS, MOBILE_PREFIX,
};
use crate::domain::PhoneKind;
use crate::error::CoreError;
use crate::record::FIELD_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub last_name: String,
    pub first_name: String,
    pub patronymic: String,
    pub organization: String,
    pub work_phone: String,
    pub personal_phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    LastName,
    FirstName,
    Patronymic,
    Organization,
    WorkPhone,
    PersonalPhone,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::LastName,
        ContactField::FirstName,
        ContactField::Patronymic,
        ContactField::Organization,
        ContactField::WorkPhone,
        ContactField::PersonalPhone,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::LastName => "last name",
            ContactField::FirstName => "first name",
            ContactField::Patronymic => "patronymic",
            ContactField::Organization => "organization",
            ContactField::WorkPhone => "work phone",
            ContactField::PersonalPhone => "personal phone",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Contact {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::LastName => &self.last_name,
            ContactField::FirstName => &self.first_name,
            ContactField::Patronymic => &self.patronymic,
            ContactField::Organization => &self.organization,
            ContactField::WorkPhone => &self.work_phone,
            ContactField::PersonalPhone => &self.personal_phone,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Checks the invariants a contact must satisfy before it is written.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.last_name.trim().is_empty() {
            return Err(CoreError::RequiredFieldMissing(ContactField::LastName));
        }
        if self.first_name.trim().is_empty() {
            return Err(CoreError::RequiredFieldMissing(ContactField::FirstName));
        }

        for field in ContactField::ALL {
            if self.field(field).contains(FIELD_SEPARATOR) {
                return Err(CoreError::FieldContainsDelimiter(field));
            }
        }

        if !is_canonical_mobile(&self.personal_phone) {
            return Err(CoreError::InvalidFormat {
                kind: PhoneKind::Mobile,
                value: self.personal_phone.clone(),
            });
        }

        let stray_work_phone = self.organization.is_empty() && !self.work_phone.is_empty();
        if stray_work_phone || !is_canonical_landline(&self.work_phone) {
            return Err(CoreError::InvalidFormat {
                kind: PhoneKind::Landline,
                value: self.work_phone.clone(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.last_name,
            self.first_name,
            self.patronymic,
            self.organization,
            self.work_phone,
            self.personal_phone
        )
    }
}

fn is_canonical_mobile(value: &str) -> bool {
    value
        .strip_prefix(MOBILE_PREFIX)
        .is_some_and(|digits| digits.len() == MOBILE_DIGITS && all_digits(digits))
}

// Empty is allowed: a work phone is optional even when an organization is set.
fn is_canonical_landline(value: &str) -> bool {
    value.is_empty()
        || ((LANDLINE_MIN_DIGITS..=LANDLINE_MAX_DIGITS).contains(&value.len())
            && all_digits(value))
}

fn all_digits(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_digit())
}
