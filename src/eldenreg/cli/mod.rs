//! # CLI Layer
//!
//! One possible UI client for eldenreg. This is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Decides process exit codes
//! - Handles argument parsing
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that call the API and print results
//! - `setup`: clap definitions
//! - `render`: output formatting

mod render;
mod setup;

use clap::Parser;
use eldenreg::api::ConfigAction;
use eldenreg::error::Result;
use eldenreg::form::{FixedDelay, NoDelay, SubmitDelay};
use eldenreg::init::{initialize, resolve_data_dir, RegistryContext, HOME_ENV};
use eldenreg::logging::{init_logging, resolve_level, LOG_ENV};
use eldenreg::model::NewUser;
use eldenreg::validation::Field;
use log::error;
use render::{print_config, print_form, print_messages, print_stats, print_users};
use setup::{Cli, Commands};
use std::process::ExitCode;

pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let env_level = std::env::var(LOG_ENV).ok();
    if let Err(e) = resolve_level(cli.verbose, env_level.as_deref()).and_then(init_logging) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let data_dir = resolve_data_dir(std::env::var(HOME_ENV).ok())?;
    let ctx = initialize(data_dir);

    match cli.command {
        Some(Commands::Register {
            username,
            email,
            password,
            no_delay,
        }) => handle_register(&ctx, NewUser::new(username, email, password), no_delay),
        Some(Commands::Check {
            username,
            email,
            password,
        }) => handle_check(&ctx, username, email, password),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Stats) | None => handle_stats(&ctx),
        Some(Commands::Clear { yes }) => handle_clear(&ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn handle_register(ctx: &RegistryContext, input: NewUser, no_delay: bool) -> Result<ExitCode> {
    let delay: Box<dyn SubmitDelay> = if no_delay {
        Box::new(NoDelay)
    } else {
        Box::new(FixedDelay::from_millis(ctx.config.submit_delay_ms))
    };

    let result = match ctx.api.register(&input, delay.as_ref()) {
        Ok(result) => result,
        Err(e) if e.is_persistence_write() => {
            error!("event=register status=error error={}", e);
            eprintln!("{}", REGISTRATION_FAILED);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e),
    };

    if let Some(form) = &result.form {
        print_form(form, &Field::ALL);
    }
    print_messages(&result.messages);
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }

    Ok(if result.affected_users.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn handle_check(
    ctx: &RegistryContext,
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<ExitCode> {
    let inputs: Vec<(Field, String)> = [
        (Field::Username, username),
        (Field::Email, email),
        (Field::Password, password),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field, v)))
    .collect();

    if inputs.is_empty() {
        println!("Nothing to check. Pass --username, --email and/or --password.");
        return Ok(ExitCode::SUCCESS);
    }

    let result = ctx.api.check(&inputs)?;
    let fields: Vec<Field> = inputs.iter().map(|(f, _)| *f).collect();
    let mut ok = true;
    if let Some(form) = &result.form {
        print_form(form, &fields);
        ok = fields.iter().all(|f| form.verdict(*f).is_valid());
    }

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn handle_list(ctx: &RegistryContext) -> Result<ExitCode> {
    let result = ctx.api.list_users()?;
    print_users(&result.listed_users);
    print_messages(&result.messages);
    Ok(ExitCode::SUCCESS)
}

fn handle_stats(ctx: &RegistryContext) -> Result<ExitCode> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_clear(ctx: &RegistryContext, yes: bool) -> Result<ExitCode> {
    let result = ctx.api.clear(yes)?;
    print_messages(&result.messages);
    Ok(ExitCode::SUCCESS)
}

fn handle_config(
    ctx: &RegistryContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<ExitCode> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);

    Ok(if result.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
