use crate::api::RegistryApi;
use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::store::fs::FileKvStore;
use crate::store::users::UserStore;
use directories::ProjectDirs;
use log::warn;
use std::path::PathBuf;

/// Overrides the data directory when set.
pub const HOME_ENV: &str = "ELDENREG_HOME";

pub struct RegistryContext {
    pub api: RegistryApi<FileKvStore>,
    pub config: RegistryConfig,
    pub data_dir: PathBuf,
}

/// `$ELDENREG_HOME` if set and non-empty, otherwise the platform data directory.
pub fn resolve_data_dir(env_override: Option<String>) -> Result<PathBuf> {
    if let Some(home) = env_override.filter(|h| !h.trim().is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "eldenreg", "eldenreg")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RegistryError::Store("Could not determine data directory".to_string()))
}

pub fn initialize(data_dir: PathBuf) -> RegistryContext {
    let config = RegistryConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(
            "event=config_load status=error dir={} error={}",
            data_dir.display(),
            e
        );
        RegistryConfig::default()
    });

    let store = UserStore::new(FileKvStore::new(data_dir.clone()), config.storage_key.clone());
    let api = RegistryApi::new(store, data_dir.clone());

    RegistryContext {
        api,
        config,
        data_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::NoDelay;
    use crate::model::NewUser;
    use std::fs;

    #[test]
    fn env_override_wins() {
        let dir = resolve_data_dir(Some("/tmp/eldenreg-home".to_string())).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/eldenreg-home"));
    }

    #[test]
    fn blank_override_is_ignored() {
        let dir = resolve_data_dir(Some("  ".to_string()));
        if let Ok(dir) = dir {
            assert_ne!(dir, PathBuf::from("  "));
        }
    }

    #[test]
    fn uses_configured_storage_key() {
        let temp = tempfile::tempdir().unwrap();
        let mut config = RegistryConfig::default();
        config.set("storage-key", "roundtable").unwrap();
        config.save(temp.path()).unwrap();

        let ctx = initialize(temp.path().to_path_buf());
        ctx.api
            .register(&NewUser::new("gwyn01", "gwyn@example.com", "abcdefgh"), &NoDelay)
            .unwrap();

        assert!(temp.path().join("roundtable.json").exists());
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("config.json"), "{oops").unwrap();

        let ctx = initialize(temp.path().to_path_buf());
        assert_eq!(ctx.config, RegistryConfig::default());
    }
}
