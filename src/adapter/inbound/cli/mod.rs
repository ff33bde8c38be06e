//! CLI module graph.

pub mod command;
pub mod config;
pub mod output;
pub mod provision;
pub mod serve;
pub mod stage;
