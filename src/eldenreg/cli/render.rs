//! Terminal output. Layout math (widths, padding) happens here; colors come
//! from `colored`, which turns itself off when stdout is not a terminal.

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use eldenreg::api::{CmdMessage, MessageLevel};
use eldenreg::config::RegistryConfig;
use eldenreg::model::{UserRecord, UserStats};
use eldenreg::validation::verdict::STRENGTH_BARS;
use eldenreg::validation::{
    Field, FieldStatus, FieldVerdict, FormState, PasswordVerdict, StrengthTier,
};
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const FIELD_WIDTH: usize = 10;
const NAME_WIDTH: usize = 22;
const EMAIL_WIDTH: usize = 32;
const BAR_ON: &str = "■";
const BAR_OFF: &str = "□";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Prints the diagnostics for the given fields, in order.
pub(super) fn print_form(form: &FormState, fields: &[Field]) {
    for field in fields {
        println!("{}", field_line(*field, form.verdict(*field)));
        if *field == Field::Password && form.password.strength.level > 0 {
            println!("{}", strength_line(&form.password));
        }
    }
}

fn field_line(field: Field, verdict: &FieldVerdict) -> String {
    let label = pad_right(field.name(), FIELD_WIDTH);
    let detail: ColoredString = match verdict.status {
        FieldStatus::Untouched => "(empty)".dimmed(),
        FieldStatus::Invalid => format!("✘ {}", verdict.message_text()).red(),
        FieldStatus::Valid => match verdict.message_text() {
            "" => "✔ Accepted".green(),
            text => format!("✔ {}", text).green(),
        },
    };
    format!("  {}{}", label, detail)
}

/// Four-bar meter, e.g. `■■□□ Fair`.
pub(super) fn strength_line(verdict: &PasswordVerdict) -> String {
    let lit = verdict.lit_bars() as usize;
    let bars = format!(
        "{}{}",
        BAR_ON.repeat(lit),
        BAR_OFF.repeat(STRENGTH_BARS as usize - lit)
    );
    let text = format!("{} {}", bars, verdict.strength.label);
    let colored = match verdict.tier() {
        StrengthTier::Weak => text.red(),
        StrengthTier::Fair => text.yellow(),
        StrengthTier::Good | StrengthTier::Strong => text.green(),
    };
    format!("  {}{}", pad_right("strength", FIELD_WIDTH), colored)
}

pub(super) fn print_stats(stats: &UserStats) {
    println!("{} {}", "Total users:".bold(), stats.total_users);
    println!("{} {}", "Latest user:".bold(), stats.latest_user);
}

pub(super) fn print_users(users: &[UserRecord]) {
    if users.is_empty() {
        println!("No users registered.");
        return;
    }

    for (i, user) in users.iter().enumerate() {
        let idx = format!("{:>3}. ", i + 1);
        let registered = user
            .registered_at_utc()
            .map(format_time_ago)
            .unwrap_or_else(|| user.registered_at.clone());
        println!(
            "{}{}{}{}",
            idx.dimmed(),
            pad_right(&user.username, NAME_WIDTH).bold(),
            pad_right(&user.email, EMAIL_WIDTH),
            registered.dimmed()
        );
    }
}

pub(super) fn print_config(config: &RegistryConfig) {
    for key in RegistryConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width()).max(1);
    format!("{}{}", s, " ".repeat(padding))
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eldenreg::validation::PasswordStrength;

    #[test]
    fn pad_right_keeps_a_gap_for_long_values() {
        assert_eq!(pad_right("abc", 5), "abc  ");
        assert_eq!(pad_right("abcdef", 5), "abcdef ");
    }

    #[test]
    fn strength_line_lights_bars_by_level() {
        colored::control::set_override(false);
        let verdict = PasswordVerdict {
            field: FieldVerdict::accepted(),
            strength: PasswordStrength::from_level(2),
        };
        assert!(strength_line(&verdict).ends_with("■■□□ Fair"));
    }

    #[test]
    fn field_line_shows_message() {
        colored::control::set_override(false);
        let line = field_line(
            Field::Username,
            &FieldVerdict::invalid("This username is already taken"),
        );
        assert_eq!(line, "  username  ✘ This username is already taken");
    }
}
