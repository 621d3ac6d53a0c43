use super::rules::PasswordStrength;
use crate::commands::CmdMessage;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Username, Field::Email, Field::Password];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(Field::Username),
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

/// Per-field state. Every input or blur moves a field out of `Untouched`;
/// reset moves it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Invalid,
    Valid,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldVerdict {
    pub status: FieldStatus,
    pub message: Option<CmdMessage>,
}

impl FieldVerdict {
    /// Empty input: not valid, but nothing to complain about yet.
    pub fn untouched() -> Self {
        Self::default()
    }

    pub fn invalid(message: impl fmt::Display) -> Self {
        Self {
            status: FieldStatus::Invalid,
            message: Some(CmdMessage::error(message.to_string())),
        }
    }

    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            status: FieldStatus::Valid,
            message: Some(CmdMessage::success(message)),
        }
    }

    /// Accepted without a success message.
    pub fn accepted() -> Self {
        Self {
            status: FieldStatus::Valid,
            message: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == FieldStatus::Valid
    }

    /// Message text, or `""` when there is none.
    pub fn message_text(&self) -> &str {
        self.message
            .as_ref()
            .map(|m| m.content.as_str())
            .unwrap_or("")
    }
}

/// Colour band for the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthTier {
    pub fn for_level(level: u8) -> Self {
        match level {
            0 | 1 => StrengthTier::Weak,
            2 => StrengthTier::Fair,
            3 => StrengthTier::Good,
            _ => StrengthTier::Strong,
        }
    }
}

/// Number of bars in the strength meter.
pub const STRENGTH_BARS: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordVerdict {
    pub field: FieldVerdict,
    pub strength: PasswordStrength,
}

impl PasswordVerdict {
    pub fn is_valid(&self) -> bool {
        self.field.is_valid()
    }

    pub fn tier(&self) -> StrengthTier {
        StrengthTier::for_level(self.strength.level)
    }

    /// How many meter bars are lit.
    pub fn lit_bars(&self) -> u8 {
        self.strength.level.min(STRENGTH_BARS)
    }
}

/// Diagnostics for the whole form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub username: FieldVerdict,
    pub email: FieldVerdict,
    pub password: PasswordVerdict,
}

impl FormState {
    pub fn verdict(&self, field: Field) -> &FieldVerdict {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password.field,
        }
    }

    pub fn all_valid(&self) -> bool {
        self.username.is_valid() && self.email.is_valid() && self.password.is_valid()
    }

    pub fn is_pristine(&self) -> bool {
        *self == FormState::default()
    }
}
