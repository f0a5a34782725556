//! CLI argument types, configuration, commands, and output rendering.

pub mod args;
pub mod commands;
pub mod config;
pub mod output;
