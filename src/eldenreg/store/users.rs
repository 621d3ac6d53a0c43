//! The user registry: an append-only list of [`UserRecord`]s stored as one
//! JSON value under a single key.
//!
//! The registry enforces uniqueness only through the `*_exists` checks the
//! validator consults before submission; it does no format validation of its
//! own and trusts that `add_user` receives well-formed values.

use super::KeyValueStore;
use crate::clock::{Clock, SystemClock};
use crate::error::{RegistryError, Result};
use crate::model::{NewUser, UserRecord, UserStats};
use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use uuid::Uuid;

const ID_ENTROPY_CHARS: usize = 11;

pub struct UserStore<B: KeyValueStore> {
    backend: B,
    key: String,
    clock: Box<dyn Clock>,
}

impl<B: KeyValueStore> UserStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// All records in insertion order.
    ///
    /// Unreadable or unparseable data is logged and treated as an empty list;
    /// this never fails.
    pub fn get_users(&self) -> Vec<UserRecord> {
        let raw = match self.backend.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("event=users_read status=error key={} error={}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<UserRecord>>(&raw) {
            Ok(users) => users,
            Err(e) => {
                warn!(
                    "event=users_parse status=error key={} {}",
                    self.key,
                    parse_failure_fields(&e)
                );
                debug!("event=users_parse key={} detail={}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Appends a new record and writes the whole list back in one write.
    ///
    /// The password is ignored. Any failure to encode or write is returned as
    /// [`RegistryError::PersistenceWrite`].
    pub fn add_user(&self, input: &NewUser) -> Result<UserRecord> {
        let mut users = self.get_users();
        let now = self.clock.now();
        let record = UserRecord::new(
            generate_id(now),
            input.username.clone(),
            input.email.clone(),
            now,
        );
        users.push(record.clone());

        let encoded = serde_json::to_string(&users).map_err(|e| {
            error!("event=users_write status=error stage=encode error={}", e);
            RegistryError::PersistenceWrite(e.to_string())
        })?;
        self.backend.set_item(&self.key, &encoded).map_err(|e| {
            error!(
                "event=users_write status=error key={} error={}",
                self.key, e
            );
            RegistryError::PersistenceWrite(e.to_string())
        })?;

        info!(
            "event=user_registered status=ok id={} total={}",
            record.id,
            users.len()
        );
        Ok(record)
    }

    pub fn username_exists(&self, username: &str) -> bool {
        let needle = username.to_lowercase();
        self.get_users()
            .iter()
            .any(|u| u.username.to_lowercase() == needle)
    }

    pub fn email_exists(&self, email: &str) -> bool {
        let needle = email.to_lowercase();
        self.get_users()
            .iter()
            .any(|u| u.email.to_lowercase() == needle)
    }

    pub fn get_stats(&self) -> UserStats {
        UserStats::from_records(&self.get_users())
    }

    /// Removes every record. Support operation, not part of the normal flow.
    pub fn clear_all(&self) -> Result<()> {
        self.backend.remove_item(&self.key)?;
        info!("event=users_cleared status=ok key={}", self.key);
        Ok(())
    }
}

/// Where and how the stored value failed to parse. serde_json's message
/// quotes the offending input, which may be a username or email, so only
/// the category and position are kept.
fn parse_failure_fields(e: &serde_json::Error) -> String {
    format!(
        "category={:?} line={} column={}",
        e.classify(),
        e.line(),
        e.column()
    )
}

/// Base-36 milliseconds followed by random characters from a v4 UUID.
fn generate_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().max(0) as u64;
    let entropy = Uuid::new_v4().simple().to_string();
    format!("{}{}", to_base36(millis), &entropy[..ID_ENTROPY_CHARS])
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{fixed_clock, StoreFixture, TEST_KEY};
    use crate::store::memory::InMemoryKvStore;
    use std::collections::HashSet;

    #[test]
    fn parse_failure_fields_omit_stored_content() {
        let e = serde_json::from_str::<Vec<UserRecord>>(r#"["bob@example.com"]"#).unwrap_err();
        assert!(e.to_string().contains("bob@example.com"));

        let fields = parse_failure_fields(&e);
        assert!(!fields.contains("bob@example.com"));
        assert!(fields.starts_with("category=Data line=1 column="));
    }

    fn gwyn() -> NewUser {
        NewUser::new("gwyn01", "gwyn@example.com", "Str0ng!Pass")
    }

    #[test]
    fn empty_store_has_no_users() {
        let fixture = StoreFixture::new();
        assert!(fixture.store.get_users().is_empty());
    }

    #[test]
    fn add_then_stats() {
        let fixture = StoreFixture::new();
        let record = fixture.store.add_user(&gwyn()).unwrap();

        assert_eq!(record.username, "gwyn01");
        assert_eq!(record.registered_at, "2024-05-01T12:00:00.000Z");
        assert_eq!(
            fixture.store.get_stats(),
            UserStats {
                total_users: 1,
                latest_user: "gwyn01".to_string()
            }
        );
    }

    #[test]
    fn add_then_get_returns_input_as_last_record() {
        let fixture = StoreFixture::new().with_users(2);
        let record = fixture
            .store
            .add_user(&NewUser::new("Melina", "Melina@Roundtable.org", "abcdefgh"))
            .unwrap();

        let users = fixture.store.get_users();
        let last = users.last().unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(last.username, "Melina");
        assert_eq!(last.email, "Melina@Roundtable.org");
        assert_eq!(last.id, record.id);
    }

    #[test]
    fn password_is_never_persisted() {
        let fixture = StoreFixture::new();
        fixture.store.add_user(&gwyn()).unwrap();

        let raw = fixture.store.backend().raw(TEST_KEY).unwrap();
        assert!(!raw.contains("Str0ng!Pass"));
        assert!(!raw.contains("password"));
    }

    #[test]
    fn existence_checks_ignore_case() {
        let fixture = StoreFixture::new().with_user("bob", "Bob@Example.com");

        assert!(fixture.store.username_exists("Bob"));
        assert!(fixture.store.username_exists("BOB"));
        assert!(fixture.store.email_exists("bob@example.com"));
        assert!(!fixture.store.username_exists("bobby"));
        assert!(!fixture.store.email_exists("bob@example.org"));
    }

    #[test]
    fn username_exists_flips_after_insert() {
        let fixture = StoreFixture::new();
        for name in ["abc", "a_b_c_d_e_f_g_h_i_j_", "Z9_"] {
            assert!(!fixture.store.username_exists(name));
            fixture
                .store
                .add_user(&NewUser::new(name, format!("{}@x.io", name), "pw"))
                .unwrap();
            assert!(fixture.store.username_exists(name));
        }
    }

    #[test]
    fn stats_are_idempotent() {
        let fixture = StoreFixture::new().with_users(3);
        assert_eq!(fixture.store.get_stats(), fixture.store.get_stats());
        assert_eq!(fixture.store.get_stats().latest_user, "tarnished_3");
    }

    #[test]
    fn ids_are_unique_within_a_session() {
        let fixture = StoreFixture::new();
        let mut ids = HashSet::new();
        for i in 0..200 {
            let record = fixture
                .store
                .add_user(&NewUser::new(format!("user{}", i), format!("u{}@x.io", i), ""))
                .unwrap();
            assert!(ids.insert(record.id));
        }
    }

    #[test]
    fn unparseable_data_reads_as_empty() {
        let kv = InMemoryKvStore::new();
        kv.put_raw(TEST_KEY, "{not json");
        let store = UserStore::new(kv, TEST_KEY);

        assert!(store.get_users().is_empty());
        assert_eq!(store.get_stats().latest_user, "-");
    }

    #[test]
    fn wrong_shape_reads_as_empty() {
        let kv = InMemoryKvStore::new();
        kv.put_raw(TEST_KEY, r#"{"id": "x"}"#);
        let store = UserStore::new(kv, TEST_KEY);
        assert!(store.get_users().is_empty());
    }

    #[test]
    fn read_error_reads_as_empty() {
        let kv = InMemoryKvStore::new();
        kv.set_simulate_read_error(true);
        let store = UserStore::new(kv, TEST_KEY);

        assert!(store.get_users().is_empty());
        assert!(!store.username_exists("anyone"));
    }

    #[test]
    fn reads_records_written_by_other_clients() {
        let kv = InMemoryKvStore::new();
        kv.put_raw(
            TEST_KEY,
            r#"[{"id":"lq1x2abc","username":"Ranni","email":"ranni@moon.io","registeredAt":"2024-01-01T00:00:00.000Z"}]"#,
        );
        let store = UserStore::new(kv, TEST_KEY);

        assert!(store.username_exists("ranni"));
        assert_eq!(store.get_stats().latest_user, "Ranni");
    }

    #[test]
    fn write_failure_propagates_and_keeps_previous_data() {
        let fixture = StoreFixture::new().with_user("gwyn01", "gwyn@example.com");
        fixture.store.backend().set_simulate_write_error(true);

        let err = fixture
            .store
            .add_user(&NewUser::new("radahn", "radahn@x.io", "Str0ng!Pass"))
            .unwrap_err();

        assert!(err.is_persistence_write());
        assert_eq!(fixture.store.get_stats().total_users, 1);
        assert!(!fixture.store.username_exists("radahn"));
    }

    #[test]
    fn clear_all_removes_everything() {
        let fixture = StoreFixture::new().with_users(2);
        fixture.store.clear_all().unwrap();

        assert!(fixture.store.get_users().is_empty());
        assert_eq!(fixture.store.backend().raw(TEST_KEY), None);
    }

    #[test]
    fn generated_id_starts_with_base36_millis() {
        let now = fixed_clock().0;
        let id = generate_id(now);
        let prefix = to_base36(now.timestamp_millis() as u64);

        assert!(id.starts_with(&prefix));
        assert_eq!(id.len(), prefix.len() + ID_ENTROPY_CHARS);
    }

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
