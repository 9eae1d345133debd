//! Loginflow - A terminal sign-in flow.
//!
//! This crate provides a splash, login, registration and main screen driven
//! by a validated navigation state machine, with clean architecture and a
//! TUI interface.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the navigation state machine and services.
pub mod application;
/// Domain layer containing entities, validation rules, errors, and ports.
pub mod domain;
/// Infrastructure layer containing configuration and adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "loginflow";
