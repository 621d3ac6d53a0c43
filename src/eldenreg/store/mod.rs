//! # Storage Layer
//!
//! Registration data lives under a single string key in a synchronous
//! key-value store. The [`KeyValueStore`] trait is that get/set-string API;
//! [`users::UserStore`] is the registry built on top of it.
//!
//! ## Design Rationale
//!
//! The raw backend is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryKvStore` (no filesystem needed, failures
//!   can be simulated)
//! - Keep the registry logic (uniqueness, append, stats) **decoupled** from
//!   where the bytes end up
//!
//! ## Implementations
//!
//! - [`fs::FileKvStore`]: Production file-based storage
//!   - One file per key: `<root>/<key>.json`
//!   - Keys are restricted to `[A-Za-z0-9_-]` so distinct keys never share a file
//!   - Writes are atomic (temp file, then rename)
//!
//! - [`memory::InMemoryKvStore`]: In-memory storage for testing
//!   - No persistence
//!   - Read and write failures can be switched on
//!
//! ## Storage Format
//!
//! The value under the users key is a JSON array of records:
//! ```text
//! [{"id": "...", "username": "...", "email": "...", "registeredAt": "..."}, ...]
//! ```
//! An absent key or an unparseable value reads as an empty list.
//!
//! ## Concurrency
//!
//! Every method takes `&self` and runs to completion synchronously. The
//! read-modify-write in `add_user` relies on there being a single writer; a
//! backend shared between writers would need a compare-and-swap around it.

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod users;

/// Synchronous string-keyed persistence.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when the key has never been set or was removed.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the whole value. MUST be atomic: readers see either the old
    /// value or the new one.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Checks that a storage key is non-empty and made only of ASCII letters,
/// digits, `_` and `-`.
pub fn check_key(key: &str) -> std::result::Result<(), String> {
    if key.is_empty() {
        return Err("Storage key cannot be empty".to_string());
    }
    match key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        Some(c) => Err(format!(
            "Storage key {:?} contains {:?}; use letters, digits, '_' or '-'",
            key, c
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_key_accepts_default_and_dashes() {
        assert!(check_key("eldenLord_users").is_ok());
        assert!(check_key("round-table-2").is_ok());
    }

    #[test]
    fn check_key_rejects_separators_and_empty() {
        assert!(check_key("").is_err());
        assert!(check_key("eldenLord.users").is_err());
        assert!(check_key("../outside").is_err());
        assert!(check_key("näme").is_err());
    }
}
