use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::users::UserStore;
use crate::store::KeyValueStore;

pub fn run<B: KeyValueStore>(store: &UserStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_users(store.get_users()))
}
