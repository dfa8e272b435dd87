//! Implements `/shop` (browse) and `/buy`.

pub mod run;
pub mod ui;

pub use run::{register, register_buy};
