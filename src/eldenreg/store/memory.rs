use super::KeyValueStore;
use crate::error::{RegistryError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory key-value backend for testing.
///
/// Uses `RefCell` for interior mutability since the registry is
/// single-threaded, letting `KeyValueStore` use `&self` throughout.
#[derive(Default)]
pub struct InMemoryKvStore {
    items: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    simulate_read_error: RefCell<bool>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation (e.g. storage quota exceeded).
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Enable read error simulation.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// Test helper to put arbitrary (possibly malformed) data under a key.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for InMemoryKvStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if *self.simulate_read_error.borrow() {
            return Err(RegistryError::Store("Simulated read error".to_string()));
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RegistryError::Store("Simulated write error".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RegistryError::Store("Simulated write error".to_string()));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::clock::FixedClock;
    use crate::model::NewUser;
    use crate::store::users::UserStore;
    use chrono::{TimeZone, Utc};

    pub const TEST_KEY: &str = "eldenLord_users";

    pub fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }

    pub struct StoreFixture {
        pub store: UserStore<InMemoryKvStore>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: UserStore::new(InMemoryKvStore::new(), TEST_KEY)
                    .with_clock(Box::new(fixed_clock())),
            }
        }

        pub fn with_user(self, username: &str, email: &str) -> Self {
            self.store
                .add_user(&NewUser::new(username, email, "Str0ng!Pass"))
                .unwrap();
            self
        }

        pub fn with_users(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_user(
                    &format!("tarnished_{}", i + 1),
                    &format!("tarnished{}@example.com", i + 1),
                );
            }
            self
        }
    }
}
