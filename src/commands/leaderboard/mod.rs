//! Implements `/leaderboard` and `/ranks`.

pub mod run;
pub mod ui;

pub use run::{ranks_prefix, ranks_slash, register, register_ranks, run_prefix, run_slash};
