mod args;
mod commands;
mod render;

pub use args::{Cli, Commands};
pub use commands::run;
