use crate::domain::Contact;

/// Names match case-insensitively, the personal phone matches verbatim.
/// An empty query matches every contact.
pub fn matches_query(contact: &Contact, query: &str) -> bool {
    let folded = query.to_lowercase();
    contact.last_name.to_lowercase().contains(&folded)
        || contact.first_name.to_lowercase().contains(&folded)
        || contact.personal_phone.contains(query)
}
