//! Implements the `/profile` command.

pub mod run;
pub mod ui;

pub use run::register;
