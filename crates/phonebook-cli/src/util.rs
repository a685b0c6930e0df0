use crate::error::invalid_input;
use anyhow::Result;
use phonebook_core::Contact;

/// Parses a 1-based contact number into a book index.
pub fn parse_contact_number(raw: &str) -> Result<usize> {
    let number: usize = raw
        .trim()
        .parse()
        .map_err(|_| invalid_input(format!("invalid contact number: {}", raw.trim())))?;
    number
        .checked_sub(1)
        .ok_or_else(|| invalid_input("invalid contact number: 0"))
}

pub fn format_contact_line(number: usize, contact: &Contact) -> String {
    let mut name = format!("{} {}", contact.last_name, contact.first_name);
    if !contact.patronymic.is_empty() {
        name.push(' ');
        name.push_str(&contact.patronymic);
    }

    let mut line = format!("{}. {}  {}", number, name, contact.personal_phone);
    if !contact.organization.is_empty() {
        line.push_str(&format!("  [{}", contact.organization));
        if !contact.work_phone.is_empty() {
            line.push_str(&format!(" {}", contact.work_phone));
        }
        line.push(']');
    }
    line
}

pub fn format_contact_detail(contact: &Contact) -> Vec<String> {
    let mut lines = vec![
        format!("last name: {}", contact.last_name),
        format!("first name: {}", contact.first_name),
    ];
    if !contact.patronymic.is_empty() {
        lines.push(format!("patronymic: {}", contact.patronymic));
    }
    if !contact.organization.is_empty() {
        lines.push(format!("organization: {}", contact.organization));
    }
    if !contact.work_phone.is_empty() {
        lines.push(format!("work phone: {}", contact.work_phone));
    }
    lines.push(format!("personal phone: {}", contact.personal_phone));
    lines
}
