//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI.
//!
//! It dispatches to `commands/*.rs` and returns structured `Result<CmdResult>`
//! values. It does no business logic, no I/O and no formatting.
//!
//! ## Generic Over KeyValueStore
//!
//! `RegistryApi<B: KeyValueStore>` is generic over the persistence backend:
//! - Production: `RegistryApi<FileKvStore>`
//! - Testing: `RegistryApi<InMemoryKvStore>`
//!
//! Interactive UIs that need field-by-field feedback borrow the store through
//! [`RegistryApi::form`] instead of going through `check`.

use crate::commands;
use crate::error::Result;
use crate::form::{RegistrationForm, SubmitDelay};
use crate::model::NewUser;
use crate::store::users::UserStore;
use crate::store::KeyValueStore;
use crate::validation::Field;
use std::path::PathBuf;

pub struct RegistryApi<B: KeyValueStore> {
    store: UserStore<B>,
    config_dir: PathBuf,
}

impl<B: KeyValueStore> RegistryApi<B> {
    pub fn new(store: UserStore<B>, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn register(&self, input: &NewUser, delay: &dyn SubmitDelay) -> Result<commands::CmdResult> {
        commands::register::run(&self.store, input, delay)
    }

    pub fn check(&self, inputs: &[(Field, String)]) -> Result<commands::CmdResult> {
        commands::check::run(&self.store, inputs)
    }

    pub fn list_users(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn clear(&self, confirmed: bool) -> Result<commands::CmdResult> {
        commands::clear::run(&self.store, confirmed)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn form(&self) -> RegistrationForm<'_, B> {
        RegistrationForm::new(&self.store)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
