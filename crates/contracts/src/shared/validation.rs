//! Field rules shared by the contact and quote forms.
//!
//! Each `check_*` function appends its message to a [`ValidationErrors`]
//! accumulator, so a form validator is just the rules called in order.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ValidationErrors;

pub const NAME_MESSAGE: &str = "Please enter a valid name";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const MESSAGE_MESSAGE: &str = "Please enter a message with at least 10 characters";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;
const PHONE_MIN_LEN: usize = 10;

/// The browser's whitespace set: ASCII blanks, the Unicode space separators,
/// line and paragraph separators, and the byte-order mark. Unlike `\s` in
/// `regex` it has U+FEFF and lacks U+0085.
const WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!("^[^{ws}@]+@[^{ws}@]+\\.[^{ws}@]+$", ws = WHITESPACE);
    Regex::new(&pattern).expect("email pattern is valid")
});

static PHONE_NOISE_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"[{ws}\-()]", ws = WHITESPACE);
    Regex::new(&pattern).expect("phone noise pattern is valid")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Removes whitespace, hyphens and parentheses.
pub fn clean_phone(phone: &str) -> String {
    PHONE_NOISE_RE.replace_all(phone, "").into_owned()
}

pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned = clean_phone(phone);
    PHONE_RE.is_match(&cleaned) && cleaned.len() >= PHONE_MIN_LEN
}

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

pub fn check_name(name: &str, errors: &mut ValidationErrors) {
    if trimmed_len(name) < NAME_MIN_CHARS {
        errors.push(NAME_MESSAGE);
    }
}

pub fn check_email(email: &str, errors: &mut ValidationErrors) {
    if email.is_empty() || !is_valid_email(email) {
        errors.push(EMAIL_MESSAGE);
    }
}

pub fn check_message(message: &str, errors: &mut ValidationErrors) {
    if trimmed_len(message) < MESSAGE_MIN_CHARS {
        errors.push(MESSAGE_MESSAGE);
    }
}

/// Phone is optional: an empty value is never an error.
pub fn check_phone(phone: &str, errors: &mut ValidationErrors) {
    if !phone.is_empty() && !is_valid_phone(phone) {
        errors.push(PHONE_MESSAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("sales@mobin-engineers.in"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn test_clean_phone() {
        assert_eq!(clean_phone("+1 234-567-8901"), "+12345678901");
        assert_eq!(clean_phone("(022) 555 0100"), "0225550100");
    }

    #[test]
    fn test_clean_phone_strips_browser_whitespace() {
        assert_eq!(clean_phone("+1 234 567 8901\u{feff}"), "+12345678901");
        assert!(is_valid_phone("+1 234 567 8901\u{feff}"));
        assert!(is_valid_phone("98765\u{a0}43210"));
        assert!(is_valid_phone("98765\u{3000}43210"));
        // NEL is not whitespace to the browser
        assert_eq!(clean_phone("98765\u{85}43210"), "98765\u{85}43210");
        assert!(!is_valid_phone("98765\u{85}43210"));
    }

    #[test]
    fn test_email_rejects_browser_whitespace() {
        assert!(!is_valid_email("a\u{feff}b@c.co"));
        assert!(!is_valid_email("ab@c.co\u{2028}"));
        assert!(is_valid_email("ab\u{85}x@c.co"));
    }

    #[test]
    fn test_phone_shapes() {
        assert!(is_valid_phone("+1 234-567-8901"));
        assert!(is_valid_phone("9876543210"));
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("0123456789"));
        assert!(!is_valid_phone("+91 98765 4321x"));
        // 17 digits exceeds the leading digit plus 15
        assert!(!is_valid_phone("12345678901234567"));
    }

    #[test]
    fn test_blank_phone_is_skipped_but_spaces_are_not() {
        let mut errors = ValidationErrors::new();
        check_phone("", &mut errors);
        assert!(errors.is_empty());

        check_phone("   ", &mut errors);
        assert_eq!(errors.messages, vec![PHONE_MESSAGE.to_string()]);
    }

    #[test]
    fn test_name_is_trimmed_before_counting() {
        let mut errors = ValidationErrors::new();
        check_name("  A  ", &mut errors);
        assert_eq!(errors.len(), 1);

        let mut errors = ValidationErrors::new();
        check_name(" Al ", &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_message_needs_ten_chars() {
        let mut errors = ValidationErrors::new();
        check_message("too short", &mut errors);
        assert_eq!(errors.messages, vec![MESSAGE_MESSAGE.to_string()]);

        let mut errors = ValidationErrors::new();
        check_message("long enough", &mut errors);
        assert!(errors.is_empty());
    }
}
