//! Field validation for the registration form.
//!
//! - [`rules`]: pure format checks and password strength scoring
//! - [`verdict`]: per-field results (`FieldVerdict`, `PasswordVerdict`, `FormState`)
//! - [`validator`]: the stateful `Validator`, which adds uniqueness checks
//!   against a [`UserStore`](crate::store::users::UserStore)
//!
//! A failed validation is never an error value: it is a verdict carrying an
//! error-level message.

pub mod rules;
pub mod validator;
pub mod verdict;

pub use rules::{PasswordStrength, StrengthChecks};
pub use validator::Validator;
pub use verdict::{Field, FieldStatus, FieldVerdict, FormState, PasswordVerdict, StrengthTier};
