use crate::commands::{CmdMessage, CmdResult};
use crate::config::RegistryConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = RegistryConfig::load(data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => return Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => result.add_message(match config.get(&key) {
            Some(value) => CmdMessage::info(value),
            None => unknown_key(&key),
        }),
        ConfigAction::Set(key, value) => {
            if let Err(reason) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(reason));
                return Ok(result);
            }
            config.save(data_dir)?;
            let stored = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
            result = result.with_config(config);
        }
    }
    Ok(result)
}

fn unknown_key(key: &str) -> CmdMessage {
    CmdMessage::error(format!("Unknown config key: {}", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_persists_value() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("submit-delay-ms".into(), "250".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "submit-delay-ms set to 250");

        let shown = run(dir.path(), ConfigAction::ShowKey("submit-delay-ms".into())).unwrap();
        assert_eq!(shown.messages[0].content, "250");
    }

    #[test]
    fn unknown_key_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("theme".into())).unwrap();
        assert!(result.has_errors());

        let result = run(dir.path(), ConfigAction::Set("theme".into(), "dark".into())).unwrap();
        assert!(result.has_errors());
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(RegistryConfig::default()));
    }
}
