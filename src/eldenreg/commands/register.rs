use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::{RegistrationForm, SubmitDelay, SubmitOutcome};
use crate::model::NewUser;
use crate::store::users::UserStore;
use crate::store::KeyValueStore;

pub const REJECTED_MESSAGE: &str = "Registration rejected. Please fix the fields above.";

/// Validates and, if everything passes, registers a user.
///
/// A rejected form is not an error: the result carries the form diagnostics
/// and an error-level message, and no user is affected.
pub fn run<B: KeyValueStore>(
    store: &UserStore<B>,
    input: &NewUser,
    delay: &dyn SubmitDelay,
) -> Result<CmdResult> {
    let mut form = RegistrationForm::new(store);
    let outcome = form.submit(&input.username, &input.email, &input.password, delay)?;

    match outcome {
        SubmitOutcome::Registered { user, stats } => {
            let mut result = CmdResult::default().with_stats(stats);
            result.add_message(CmdMessage::success(format!(
                "Registration successful. Welcome, {}!",
                user.username
            )));
            Ok(result.with_affected_users(vec![user]))
        }
        SubmitOutcome::Rejected(state) => {
            let mut result = CmdResult::default().with_form(state);
            result.add_message(CmdMessage::error(REJECTED_MESSAGE));
            Ok(result)
        }
    }
}
