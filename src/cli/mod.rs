/// CLI argument parsing and command handling - Gateway
mod args;
mod commands;

pub use args::{CartArgs, Cli, Commands, ProfileAction, ProfileUpdateArgs, SignupArgs};
pub use commands::{handle_command, run_init, show_version};
