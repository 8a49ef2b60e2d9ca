//! # Connect Four
//!
//! Rules engine for Connect Four with a terminal UI built on Ratatui and a
//! line-oriented headless mode.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, engine state machine
//! - [`ui`] — Terminal UI and headless adapters driving the engine
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed `tracing` subscriber
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
