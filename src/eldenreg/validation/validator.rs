use super::rules::{
    check_email_format, check_password_length, check_username_format, password_strength,
    EmailError, PasswordStrength, UsernameError, PASSWORD_GOOD_STRENGTH,
};
use super::verdict::{Field, FieldVerdict, FormState, PasswordVerdict};
use crate::store::users::UserStore;
use crate::store::KeyValueStore;
use log::debug;

pub const USERNAME_AVAILABLE: &str = "Username is available!";
pub const EMAIL_VALID: &str = "Email is valid!";
pub const PASSWORD_STRONG: &str = "Strong password!";

/// Evaluates one username against the format rules and the store.
pub fn evaluate_username<B: KeyValueStore>(value: &str, store: &UserStore<B>) -> FieldVerdict {
    if value.is_empty() {
        return FieldVerdict::untouched();
    }
    if let Err(e) = check_username_format(value) {
        return FieldVerdict::invalid(e);
    }
    if store.username_exists(value) {
        return FieldVerdict::invalid(UsernameError::Taken);
    }
    FieldVerdict::valid(USERNAME_AVAILABLE)
}

pub fn evaluate_email<B: KeyValueStore>(value: &str, store: &UserStore<B>) -> FieldVerdict {
    if value.is_empty() {
        return FieldVerdict::untouched();
    }
    if let Err(e) = check_email_format(value) {
        return FieldVerdict::invalid(e);
    }
    if store.email_exists(value) {
        return FieldVerdict::invalid(EmailError::AlreadyRegistered);
    }
    FieldVerdict::valid(EMAIL_VALID)
}

/// Any password of minimum length is accepted, whatever its strength; only
/// the success message depends on strength.
pub fn evaluate_password(value: &str) -> PasswordVerdict {
    if value.is_empty() {
        return PasswordVerdict {
            field: FieldVerdict::untouched(),
            strength: PasswordStrength::NONE,
        };
    }
    if let Err(e) = check_password_length(value) {
        return PasswordVerdict {
            field: FieldVerdict::invalid(e),
            strength: PasswordStrength::TOO_SHORT,
        };
    }

    let strength = password_strength(value);
    let field = if strength.level >= PASSWORD_GOOD_STRENGTH {
        FieldVerdict::valid(PASSWORD_STRONG)
    } else {
        FieldVerdict::accepted()
    };
    PasswordVerdict { field, strength }
}

/// Holds the latest verdict for each field of the registration form.
///
/// Reads the store for uniqueness checks but never writes to it.
pub struct Validator<'s, B: KeyValueStore> {
    store: &'s UserStore<B>,
    state: FormState,
}

impl<'s, B: KeyValueStore> Validator<'s, B> {
    pub fn new(store: &'s UserStore<B>) -> Self {
        Self {
            store,
            state: FormState::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn validate_username(&mut self, value: &str) -> bool {
        self.state.username = evaluate_username(value, self.store);
        debug!(
            "event=validate field=username status={:?}",
            self.state.username.status
        );
        self.state.username.is_valid()
    }

    pub fn validate_email(&mut self, value: &str) -> bool {
        self.state.email = evaluate_email(value, self.store);
        debug!(
            "event=validate field=email status={:?}",
            self.state.email.status
        );
        self.state.email.is_valid()
    }

    pub fn validate_password(&mut self, value: &str) -> bool {
        self.state.password = evaluate_password(value);
        debug!(
            "event=validate field=password status={:?} strength={}",
            self.state.password.field.status, self.state.password.strength.level
        );
        self.state.password.is_valid()
    }

    /// Input/blur handling for a single field. The raw value is trimmed,
    /// password included.
    pub fn validate_field(&mut self, field: Field, raw: &str) -> bool {
        let value = raw.trim();
        match field {
            Field::Username => self.validate_username(value),
            Field::Email => self.validate_email(value),
            Field::Password => self.validate_password(value),
        }
    }

    /// Validates every field, even after one fails, so all diagnostics are
    /// refreshed. Username and email are trimmed; the password is taken as is.
    pub fn validate_all(&mut self, username: &str, email: &str, password: &str) -> bool {
        let username_valid = self.validate_username(username.trim());
        let email_valid = self.validate_email(email.trim());
        let password_valid = self.validate_password(password);

        username_valid && email_valid && password_valid
    }

    /// Clears all diagnostics and the strength meter. The store is untouched.
    pub fn reset(&mut self) {
        self.state = FormState::default();
    }
}
