//! Configuration, errors and terminal output shared by every command.

pub mod config;
pub mod error;
pub mod output;
