use crate::domain::{normalize_landline, normalize_mobile, Contact, ContactField};
use crate::error::CoreError;

/// Raw field input for a new contact.
#[derive(Debug, Clone, Default)]
pub struct ContactNew {
    pub last_name: String,
    pub first_name: String,
    pub patronymic: String,
    pub organization: String,
    pub work_phone: String,
    pub personal_phone: String,
}

/// Per-field edit. `None` or a blank value keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ContactEdit {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub patronymic: Option<String>,
    pub organization: Option<String>,
    pub work_phone: Option<String>,
    pub personal_phone: Option<String>,
}

impl ContactEdit {
    pub fn is_empty(&self) -> bool {
        [
            &self.last_name,
            &self.first_name,
            &self.patronymic,
            &self.organization,
            &self.work_phone,
            &self.personal_phone,
        ]
        .iter()
        .all(|value| provided(value).is_none())
    }
}

pub fn build_contact(input: ContactNew) -> Result<Contact, CoreError> {
    let last_name = input.last_name.trim().to_string();
    if last_name.is_empty() {
        return Err(CoreError::RequiredFieldMissing(ContactField::LastName));
    }
    let first_name = input.first_name.trim().to_string();
    if first_name.is_empty() {
        return Err(CoreError::RequiredFieldMissing(ContactField::FirstName));
    }

    let organization = input.organization.trim().to_string();
    let personal_phone = normalize_mobile(&input.personal_phone)?;
    let work_phone = if organization.is_empty() {
        String::new()
    } else {
        normalize_landline(&input.work_phone)?
    };

    let contact = Contact {
        last_name,
        first_name,
        patronymic: input.patronymic.trim().to_string(),
        organization,
        work_phone,
        personal_phone,
    };
    contact.validate()?;
    Ok(contact)
}

pub fn apply_edit(current: &Contact, edit: &ContactEdit) -> Result<Contact, CoreError> {
    let organization =
        provided(&edit.organization).unwrap_or_else(|| current.organization.clone());

    let personal_phone = match provided(&edit.personal_phone) {
        Some(raw) => normalize_mobile(&raw)?,
        None => current.personal_phone.clone(),
    };

    // A work phone only exists alongside an organization.
    let work_phone = match provided(&edit.work_phone) {
        Some(raw) if !organization.is_empty() => normalize_landline(&raw)?,
        _ => current.work_phone.clone(),
    };

    let updated = Contact {
        last_name: provided(&edit.last_name).unwrap_or_else(|| current.last_name.clone()),
        first_name: provided(&edit.first_name).unwrap_or_else(|| current.first_name.clone()),
        patronymic: provided(&edit.patronymic).unwrap_or_else(|| current.patronymic.clone()),
        organization,
        work_phone,
        personal_phone,
    };
    updated.validate()?;
    Ok(updated)
}

fn provided(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::{apply_edit, build_contact, ContactEdit, ContactNew};
    use crate::domain::{Contact, ContactField, PhoneKind};
    use crate::error::CoreError;

    fn input() -> ContactNew {
        ContactNew {
            last_name: " Ivanov ".to_string(),
            first_name: "Ivan".to_string(),
            patronymic: "Ivanovich".to_string(),
            organization: "Acme".to_string(),
            work_phone: "8 (495) 222-33-44".to_string(),
            personal_phone: "+7 (999) 123 45 67".to_string(),
        }
    }

    fn existing() -> Contact {
        Contact {
            last_name: "Ivanov".to_string(),
            first_name: "Ivan".to_string(),
            patronymic: "Ivanovich".to_string(),
            organization: "Acme".to_string(),
            work_phone: "4952223344".to_string(),
            personal_phone: "+79991234567".to_string(),
        }
    }

    #[test]
    fn build_contact_normalizes_phones_and_trims_names() {
        let contact = build_contact(input()).expect("build");
        assert_eq!(contact, existing());
    }

    #[test]
    fn build_contact_requires_names() {
        let err = build_contact(ContactNew {
            last_name: "   ".to_string(),
            ..input()
        })
        .unwrap_err();
        assert_eq!(err, CoreError::RequiredFieldMissing(ContactField::LastName));

        let err = build_contact(ContactNew {
            first_name: String::new(),
            ..input()
        })
        .unwrap_err();
        assert_eq!(err, CoreError::RequiredFieldMissing(ContactField::FirstName));
    }

    #[test]
    fn build_contact_ignores_work_phone_without_organization() {
        let contact = build_contact(ContactNew {
            organization: String::new(),
            work_phone: "garbage".to_string(),
            ..input()
        })
        .expect("build");
        assert_eq!(contact.work_phone, "");
        assert_eq!(contact.organization, "");
    }

    #[test]
    fn build_contact_requires_work_phone_with_organization() {
        let err = build_contact(ContactNew {
            work_phone: String::new(),
            ..input()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidFormat {
                kind: PhoneKind::Landline,
                ..
            }
        ));
    }

    #[test]
    fn build_contact_rejects_bad_mobile() {
        let err = build_contact(ContactNew {
            personal_phone: "12345".to_string(),
            ..input()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidFormat {
                kind: PhoneKind::Mobile,
                ..
            }
        ));
    }

    #[test]
    fn build_contact_rejects_separator_in_fields() {
        let err = build_contact(ContactNew {
            patronymic: "a,b".to_string(),
            ..input()
        })
        .unwrap_err();
        assert_eq!(
            err,
            CoreError::FieldContainsDelimiter(ContactField::Patronymic)
        );
    }

    #[test]
    fn apply_edit_with_only_last_name_keeps_other_fields() {
        let before = existing();
        let edit = ContactEdit {
            last_name: Some("Petrov".to_string()),
            first_name: Some(String::new()),
            patronymic: Some("  ".to_string()),
            organization: None,
            work_phone: Some(String::new()),
            personal_phone: Some(String::new()),
        };
        let after = apply_edit(&before, &edit).expect("edit");
        assert_eq!(after.last_name, "Petrov");
        assert_eq!(after.first_name, before.first_name);
        assert_eq!(after.patronymic, before.patronymic);
        assert_eq!(after.organization, before.organization);
        assert_eq!(after.work_phone, before.work_phone);
        assert_eq!(after.personal_phone, before.personal_phone);
    }

    #[test]
    fn apply_edit_normalizes_new_phones() {
        let edit = ContactEdit {
            personal_phone: Some("8 912 000 11 22".to_string()),
            work_phone: Some("22-33-44".to_string()),
            ..Default::default()
        };
        let after = apply_edit(&existing(), &edit).expect("edit");
        assert_eq!(after.personal_phone, "+79120001122");
        assert_eq!(after.work_phone, "223344");
    }

    #[test]
    fn apply_edit_rejects_invalid_phone() {
        let edit = ContactEdit {
            personal_phone: Some("123".to_string()),
            ..Default::default()
        };
        assert!(apply_edit(&existing(), &edit).is_err());
    }

    #[test]
    fn apply_edit_ignores_work_phone_without_organization() {
        let before = Contact {
            organization: String::new(),
            work_phone: String::new(),
            ..existing()
        };
        let edit = ContactEdit {
            work_phone: Some("223344".to_string()),
            ..Default::default()
        };
        let after = apply_edit(&before, &edit).expect("edit");
        assert_eq!(after, before);
    }

    #[test]
    fn apply_edit_accepts_work_phone_with_new_organization() {
        let before = Contact {
            organization: String::new(),
            work_phone: String::new(),
            ..existing()
        };
        let edit = ContactEdit {
            organization: Some("Globex".to_string()),
            work_phone: Some("223344".to_string()),
            ..Default::default()
        };
        let after = apply_edit(&before, &edit).expect("edit");
        assert_eq!(after.organization, "Globex");
        assert_eq!(after.work_phone, "223344");
    }

    #[test]
    fn contact_edit_is_empty_treats_blank_as_absent() {
        assert!(ContactEdit::default().is_empty());
        let blank = ContactEdit {
            last_name: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(blank.is_empty());
        let filled = ContactEdit {
            patronymic: Some("Petrovich".to_string()),
            ..Default::default()
        };
        assert!(!filled.is_empty());
    }
}
