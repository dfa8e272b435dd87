//! Implements the `/give` command for gifting items.

pub mod run;

pub use run::register;
