use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MOBILE_PREFIX: &str = "+7";
pub const MOBILE_DIGITS: usize = 10;
pub const LANDLINE_MIN_DIGITS: usize = 5;
pub const LANDLINE_MAX_DIGITS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    Mobile,
    Landline,
}

impl fmt::Display for PhoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneKind::Mobile => f.write_str("mobile"),
            PhoneKind::Landline => f.write_str("landline"),
        }
    }
}

/// Canonicalizes a mobile number to `+7` followed by ten digits.
pub fn normalize_mobile(raw: &str) -> Result<String, CoreError> {
    let digits = significant_digits(raw);
    if digits.len() != MOBILE_DIGITS {
        return Err(invalid(PhoneKind::Mobile, raw));
    }
    Ok(format!("{MOBILE_PREFIX}{digits}"))
}

/// Canonicalizes a landline number to its bare digits (five to ten of them).
pub fn normalize_landline(raw: &str) -> Result<String, CoreError> {
    let digits = significant_digits(raw);
    if !(LANDLINE_MIN_DIGITS..=LANDLINE_MAX_DIGITS).contains(&digits.len()) {
        return Err(invalid(PhoneKind::Landline, raw));
    }
    Ok(digits.to_string())
}

// Only an 11-digit string carries a country/trunk digit; `+7` and `8` both
// reduce to a leading 7 or 8 once formatting is gone.
fn significant_digits(raw: &str) -> String {
    let digits: String = raw.chars().filter(|ch| ch.is_ascii_digit()).collect();
    if digits.len() == MOBILE_DIGITS + 1 && (digits.starts_with('7') || digits.starts_with('8')) {
        digits[1..].to_string()
    } else {
        digits
    }
}

fn invalid(kind: PhoneKind, raw: &str) -> CoreError {
    CoreError::InvalidFormat {
        kind,
        value: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_landline, normalize_mobile, PhoneKind};
    use crate::error::CoreError;

    #[test]
    fn normalize_mobile_strips_formatting_and_country_code() {
        let value = normalize_mobile("+7 (999) 123 45 67").unwrap();
        assert_eq!(value, "+79991234567");
    }

    #[test]
    fn normalize_mobile_drops_trunk_prefix() {
        let value = normalize_mobile("89991234567").unwrap();
        assert_eq!(value, "+79991234567");
    }

    #[test]
    fn normalize_mobile_accepts_bare_ten_digits() {
        let value = normalize_mobile("999-123-45-67").unwrap();
        assert_eq!(value, "+79991234567");
    }

    #[test]
    fn normalize_mobile_is_idempotent() {
        let once = normalize_mobile("8 (999) 123-45-67").unwrap();
        let twice = normalize_mobile(&once).unwrap();
        assert_eq!(once, "+79991234567");
        assert_eq!(twice, once);
    }

    #[test]
    fn normalize_mobile_rejects_short_numbers() {
        let err = normalize_mobile("12345").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidFormat {
                kind: PhoneKind::Mobile,
                value: "12345".to_string(),
            }
        );
    }

    #[test]
    fn normalize_mobile_rejects_foreign_eleven_digits() {
        assert!(normalize_mobile("19991234567").is_err());
        assert!(normalize_mobile("+7999123456789").is_err());
    }

    #[test]
    fn normalize_mobile_rejects_empty() {
        assert!(normalize_mobile("").is_err());
        assert!(normalize_mobile("   ").is_err());
    }

    #[test]
    fn normalize_landline_drops_trunk_prefix() {
        let value = normalize_landline("84952223344").unwrap();
        assert_eq!(value, "4952223344");
    }

    #[test]
    fn normalize_landline_keeps_short_numbers_unprefixed() {
        assert_eq!(normalize_landline("22-33-44").unwrap(), "223344");
        assert_eq!(normalize_landline("12345").unwrap(), "12345");
        assert_eq!(normalize_landline("+7 495 222 33 44").unwrap(), "4952223344");
    }

    #[test]
    fn normalize_landline_enforces_length_bounds() {
        assert!(normalize_landline("1234").is_err());
        assert!(normalize_landline("12345678901").is_err());
        assert!(normalize_landline("").is_err());
    }
}
