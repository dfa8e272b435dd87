//! Implements the `/inventory` command.

pub mod run;
pub mod ui;

pub use run::register;
