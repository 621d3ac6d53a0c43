use crate::commands::CmdResult;
use crate::error::Result;
use crate::form::RegistrationForm;
use crate::store::users::UserStore;
use crate::store::KeyValueStore;
use crate::validation::Field;

/// Replays field input events without submitting. Fields not given stay
/// untouched.
pub fn run<B: KeyValueStore>(store: &UserStore<B>, inputs: &[(Field, String)]) -> Result<CmdResult> {
    let mut form = RegistrationForm::new(store);
    for (field, raw) in inputs {
        form.input(*field, raw);
    }
    Ok(CmdResult::default().with_form(form.state().clone()))
}
