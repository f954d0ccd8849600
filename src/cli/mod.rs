//! Command-line interface: interactive play and batch simulation

pub mod commands;
pub mod output;
