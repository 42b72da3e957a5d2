use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Validate a person's name: at least 2 characters.
pub fn validate_name(name: &str) -> Option<String> {
    if name.chars().count() < 2 {
        return Some("Name must be at least 2 characters".to_string());
    }
    None
}

/// Validate an email address against the usual `local@domain.tld` grammar.
pub fn validate_email(email: &str) -> Option<String> {
    let valid = !email.starts_with('.')
        && !email.contains("..")
        && email.len() <= 254
        && EMAIL_RE.is_match(email);
    if !valid {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

/// Validate a required text field with a minimum length.
pub fn validate_min_len(value: &str, field_name: &str, min_len: usize) -> Option<String> {
    if value.chars().count() < min_len {
        if min_len == 1 {
            return Some(format!("{field_name} is required"));
        }
        return Some(format!("{field_name} must be at least {min_len} characters"));
    }
    None
}
