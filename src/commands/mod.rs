//! Command implementations for the CLI

mod add;

pub use add::add;
