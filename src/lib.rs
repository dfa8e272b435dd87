// Library entry so integration tests and the binary share the same modules.
pub mod arena;
pub mod clock;
pub mod commands;
pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod handler;
pub mod model;
pub mod moderation;
pub mod services;
pub mod ui;

pub use model::AppState;
