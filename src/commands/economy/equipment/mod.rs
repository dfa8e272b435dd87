//! Implements `/equip`, `/unequip` and `/use`.

pub mod run;
pub mod ui;

pub use run::{register_equip, register_unequip, register_use};
