//! Format rules and password strength scoring.
//!
//! Everything here is a pure function of the input string. Uniqueness against
//! the store is layered on top by [`super::validator`].
//!
//! Lengths are counted in `char`s.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 20;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_LONG_LEN: usize = 12;

/// Strength at or above which a password earns the "Strong password!" message.
pub const PASSWORD_GOOD_STRENGTH: u8 = 3;

static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").unwrap());

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Labels indexed by strength level. Level 5 reuses the last one.
const STRENGTH_LABELS: [&str; 5] = ["", "Weak", "Fair", "Good", "Strong"];

pub const TOO_SHORT_LABEL: &str = "Too short";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsernameError {
    TooShort,
    TooLong,
    InvalidCharacters,
    Taken,
}

impl fmt::Display for UsernameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsernameError::TooShort => write!(
                f,
                "Username must be at least {} characters",
                USERNAME_MIN_LEN
            ),
            UsernameError::TooLong => {
                write!(f, "Username cannot exceed {} characters", USERNAME_MAX_LEN)
            }
            UsernameError::InvalidCharacters => {
                write!(f, "Only letters, numbers, and underscores allowed")
            }
            UsernameError::Taken => write!(f, "This username is already taken"),
        }
    }
}

impl std::error::Error for UsernameError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    InvalidFormat,
    AlreadyRegistered,
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailError::InvalidFormat => write!(f, "Please enter a valid email address"),
            EmailError::AlreadyRegistered => write!(f, "This email is already registered"),
        }
    }
}

impl std::error::Error for EmailError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    TooShort,
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordError::TooShort => write!(
                f,
                "Password must be at least {} characters",
                PASSWORD_MIN_LEN
            ),
        }
    }
}

impl std::error::Error for PasswordError {}

/// Checks length and charset of a non-empty username. Does not consult the
/// store.
pub fn check_username_format(value: &str) -> Result<(), UsernameError> {
    let len = value.chars().count();
    if len < USERNAME_MIN_LEN {
        return Err(UsernameError::TooShort);
    }
    if len > USERNAME_MAX_LEN {
        return Err(UsernameError::TooLong);
    }
    if !USERNAME_PATTERN.is_match(value) {
        return Err(UsernameError::InvalidCharacters);
    }
    Ok(())
}

/// `local@domain.tld`, where no part contains whitespace or `@`.
pub fn check_email_format(value: &str) -> Result<(), EmailError> {
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(EmailError::InvalidFormat)
    }
}

pub fn check_password_length(value: &str) -> Result<(), PasswordError> {
    if value.chars().count() < PASSWORD_MIN_LEN {
        Err(PasswordError::TooShort)
    } else {
        Ok(())
    }
}

/// Which strength criteria a password satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrengthChecks {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub special: bool,
}

impl StrengthChecks {
    pub fn of(value: &str) -> Self {
        Self {
            length: value.chars().count() >= PASSWORD_LONG_LEN,
            lowercase: value.chars().any(|c| c.is_ascii_lowercase()),
            uppercase: value.chars().any(|c| c.is_ascii_uppercase()),
            numbers: value.chars().any(|c| c.is_ascii_digit()),
            special: value.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    /// Number of satisfied criteria, 0..=5.
    pub fn count(&self) -> u8 {
        [
            self.length,
            self.lowercase,
            self.uppercase,
            self.numbers,
            self.special,
        ]
        .iter()
        .filter(|&&hit| hit)
        .count() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordStrength {
    pub level: u8,
    pub label: &'static str,
}

impl PasswordStrength {
    pub const NONE: PasswordStrength = PasswordStrength {
        level: 0,
        label: "",
    };

    pub const TOO_SHORT: PasswordStrength = PasswordStrength {
        level: 1,
        label: TOO_SHORT_LABEL,
    };

    pub fn from_level(level: u8) -> Self {
        Self {
            level,
            label: strength_label(level),
        }
    }
}

pub fn strength_label(level: u8) -> &'static str {
    let idx = (level as usize).min(STRENGTH_LABELS.len() - 1);
    STRENGTH_LABELS[idx]
}

/// Scores a password by the criteria it satisfies. Applies to passwords that
/// already meet the minimum length.
pub fn password_strength(value: &str) -> PasswordStrength {
    PasswordStrength::from_level(StrengthChecks::of(value).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_length_boundaries() {
        assert_eq!(check_username_format("ab"), Err(UsernameError::TooShort));
        assert!(check_username_format("abc").is_ok());
        assert!(check_username_format(&"a".repeat(20)).is_ok());
        assert_eq!(
            check_username_format(&"a".repeat(21)),
            Err(UsernameError::TooLong)
        );
    }

    #[test]
    fn username_charset() {
        assert!(check_username_format("Gwyn_01").is_ok());
        assert_eq!(
            check_username_format("gwyn-01"),
            Err(UsernameError::InvalidCharacters)
        );
        assert_eq!(
            check_username_format("gwyn 01"),
            Err(UsernameError::InvalidCharacters)
        );
        assert_eq!(
            check_username_format("héllo"),
            Err(UsernameError::InvalidCharacters)
        );
    }

    #[test]
    fn length_is_checked_before_charset() {
        assert_eq!(check_username_format("a!"), Err(UsernameError::TooShort));
        assert_eq!(
            check_username_format(&"!".repeat(25)),
            Err(UsernameError::TooLong)
        );
    }

    #[test]
    fn email_shape() {
        assert!(check_email_format("gwyn@example.com").is_ok());
        assert!(check_email_format("a@b.c").is_ok());
        assert!(check_email_format("first.last@sub.domain.org").is_ok());

        assert!(check_email_format("gwyn@example").is_err());
        assert!(check_email_format("gwyn.example.com").is_err());
        assert!(check_email_format("@example.com").is_err());
        assert!(check_email_format("gwyn@.com").is_err());
        assert!(check_email_format("gwyn@example.").is_err());
        assert!(check_email_format("gw yn@example.com").is_err());
        assert!(check_email_format("gwyn@@example.com").is_err());
    }

    #[test]
    fn password_minimum_length() {
        assert_eq!(check_password_length("short"), Err(PasswordError::TooShort));
        assert_eq!(check_password_length("1234567"), Err(PasswordError::TooShort));
        assert!(check_password_length("12345678").is_ok());
    }

    #[test]
    fn strength_scoring() {
        assert_eq!(password_strength("abcdefgh"), PasswordStrength::from_level(1));
        assert_eq!(password_strength("abcdefgh").label, "Weak");
        assert_eq!(password_strength("abcdEFGH").label, "Fair");
        assert_eq!(password_strength("abcdEF12").label, "Good");
        assert_eq!(password_strength("Str0ng!Pass").level, 4);
        assert_eq!(password_strength("Str0ng!Pass").label, "Strong");
    }

    #[test]
    fn level_five_reuses_strongest_label() {
        let strength = password_strength("Str0ng!Passw0rd");
        assert_eq!(strength.level, 5);
        assert_eq!(strength.label, "Strong");
    }

    #[test]
    fn non_ascii_counts_as_special() {
        let checks = StrengthChecks::of("pässword");
        assert!(checks.special);
        assert!(checks.lowercase);
    }

    #[test]
    fn adding_a_character_class_never_lowers_strength() {
        let base = "abcdefghijkl";
        let variants = ["abcdefghijk1", "abcdefghijkL", "abcdefghijk!"];
        let base_level = password_strength(base).level;
        for variant in variants {
            assert!(password_strength(variant).level >= base_level);
        }

        let mut value = String::from("aaaaaaaaaaaa");
        let mut last = password_strength(&value).level;
        for extra in ["1", "B", "#"] {
            value.push_str(extra);
            let level = password_strength(&value).level;
            assert!(level >= last);
            last = level;
        }
        assert_eq!(last, 5);
    }
}
