//! Command-line interface.

mod args;
pub mod query;
pub mod validate;

pub use args::{Cli, Commands, QueryArgs, QueryCommand, ValidateArgs};
