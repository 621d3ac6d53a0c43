//! # Registration Form
//!
//! The orchestrator between a UI and the core. It holds the store and a
//! [`Validator`], forwards field events, and drives submission:
//!
//! ```text
//! raw fields ─► validate_all ─┬─ false ─► Rejected(FormState)
//!                             └─ true ──► delay ─► add_user ─► get_stats ─► reset ─► Registered
//! ```
//!
//! It renders nothing. A UI reads [`RegistrationForm::state`] after every
//! event and draws it however it likes.

use crate::error::Result;
use crate::model::{NewUser, UserRecord, UserStats};
use crate::store::users::UserStore;
use crate::store::KeyValueStore;
use crate::validation::{Field, FormState, Validator};
use std::thread;
use std::time::Duration;

/// Pause before persisting, standing in for network latency.
pub trait SubmitDelay {
    fn wait(&self);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl SubmitDelay for NoDelay {
    fn wait(&self) {}
}

#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

impl SubmitDelay for FixedDelay {
    fn wait(&self) {
        if !self.0.is_zero() {
            thread::sleep(self.0);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Registered { user: UserRecord, stats: UserStats },
    /// Validation failed; the store was not touched.
    Rejected(FormState),
}

pub struct RegistrationForm<'s, B: KeyValueStore> {
    store: &'s UserStore<B>,
    validator: Validator<'s, B>,
}

impl<'s, B: KeyValueStore> RegistrationForm<'s, B> {
    pub fn new(store: &'s UserStore<B>) -> Self {
        Self {
            store,
            validator: Validator::new(store),
        }
    }

    pub fn state(&self) -> &FormState {
        self.validator.state()
    }

    pub fn stats(&self) -> UserStats {
        self.store.get_stats()
    }

    /// An input or blur event on one field.
    pub fn input(&mut self, field: Field, raw: &str) -> bool {
        self.validator.validate_field(field, raw)
    }

    /// Validates everything and, if the form is valid, registers the user.
    ///
    /// A write failure is returned as an error and leaves the form state as it
    /// was, so the UI can show a failure without claiming success.
    pub fn submit(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
        delay: &dyn SubmitDelay,
    ) -> Result<SubmitOutcome> {
        if !self.validator.validate_all(username, email, password) {
            return Ok(SubmitOutcome::Rejected(self.validator.state().clone()));
        }

        delay.wait();

        let input = NewUser::new(username.trim(), email.trim(), password);
        let user = self.store.add_user(&input)?;
        let stats = self.store.get_stats();
        self.validator.reset();

        Ok(SubmitOutcome::Registered { user, stats })
    }

    pub fn reset(&mut self) {
        self.validator.reset();
    }
}
