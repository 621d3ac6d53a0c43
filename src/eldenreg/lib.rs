//! # Eldenreg Architecture
//!
//! Eldenreg is a **UI-agnostic registration library**: field validation with
//! password strength scoring, plus a local registry of users. The bundled CLI
//! is one client of it; a browser front end or a TUI would be others.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Form (form.rs)             │
//! │  - register / check / list / stats / clear / config         │
//! │  - RegistrationForm: validate, delay, persist, reset        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (validation/, store/)                                 │
//! │  - Validator: format + uniqueness rules, strength scoring   │
//! │  - UserStore over a KeyValueStore (file or in-memory)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process, and carries no global state: the store is an explicit value
//! handed to the validator and the form.
//!
//! ## Error Model
//!
//! - Bad user input is a verdict, not an error (see [`validation`]).
//! - Unreadable stored data is logged and read as an empty registry.
//! - A failed write is [`error::RegistryError::PersistenceWrite`] and always
//!   reaches the caller.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`form`]: The registration form orchestrator
//! - [`validation`]: Field rules, verdicts and the `Validator`
//! - [`store`]: Key-value backends and the `UserStore`
//! - [`model`]: Core data types (`UserRecord`, `NewUser`, `UserStats`)
//! - [`clock`]: Time source for new records
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`logging`]: Logger bootstrap for binaries
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
