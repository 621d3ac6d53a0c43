use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RegistryError, Result};
use crate::store::users::UserStore;
use crate::store::KeyValueStore;

pub fn run<B: KeyValueStore>(store: &UserStore<B>, confirmed: bool) -> Result<CmdResult> {
    if !confirmed {
        return Err(RegistryError::Api(
            "Refusing to clear all users without confirmation (pass --yes)".to_string(),
        ));
    }

    let removed = store.get_users().len();
    store.clear_all()?;

    let mut result = CmdResult::default().with_stats(store.get_stats());
    result.add_message(if removed == 0 {
        CmdMessage::warning("No registered users to remove")
    } else {
        CmdMessage::success(format!("Removed {} registered user(s)", removed))
    });
    Ok(result)
}
