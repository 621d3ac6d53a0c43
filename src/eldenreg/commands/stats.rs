use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::users::UserStore;
use crate::store::KeyValueStore;

pub fn run<B: KeyValueStore>(store: &UserStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(store.get_stats()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn empty_store_uses_sentinel() {
        let fixture = StoreFixture::new();
        let stats = run(&fixture.store).unwrap().stats.unwrap();
        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.latest_user, "-");
    }

    #[test]
    fn reports_latest_registration() {
        let fixture = StoreFixture::new().with_users(2).with_user("Malenia", "m@haligtree.org");
        let stats = run(&fixture.store).unwrap().stats.unwrap();
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.latest_user, "Malenia");
    }
}
