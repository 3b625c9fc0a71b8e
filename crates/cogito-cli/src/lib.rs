// NOTE: Command Organization Rationale
//
// Why one binary with scripted subcommands next to the browser?
// - The interactive browser is the product; list/random/categories expose
//   the same engine to pipes and scripts, so every filter behavior can be
//   exercised without a terminal
// - All subcommands resolve the collection source the same way
//   (flag > COGITO_SOURCE > config file > ./thoughts.json), so a shell
//   alias works identically for browsing and scripting

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod output;
pub mod ui;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
