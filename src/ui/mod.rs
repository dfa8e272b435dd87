//! Shared presentation helpers: styles and error rendering.

pub mod style;

use crate::error::{ArenaError, ServiceError};
use serenity::builder::CreateEmbed;
use tracing::error;

/// Maps a service failure to the embed shown to the member.
pub fn service_error_embed(err: &ServiceError) -> CreateEmbed {
    match err {
        ServiceError::Rule(rule) => style::error_embed(rule_title(rule), rule.to_string()),
        ServiceError::Storage(e) => {
            error!(target: "ui.error", error = %e, "storage failure while handling command");
            style::error_embed(
                "Something went wrong",
                "Your progress could not be saved. Please try again in a moment.",
            )
        }
    }
}

fn rule_title(rule: &ArenaError) -> &'static str {
    match rule {
        ArenaError::AttackerDefeated
        | ArenaError::DefenderDefeated
        | ArenaError::NotEnoughEnergy { .. }
        | ArenaError::OnCooldown { .. } => "Cannot Attack",
        ArenaError::SelfTarget | ArenaError::InvalidQuantity => "Not Allowed",
        ArenaError::NotBuyable(_)
        | ArenaError::NotEnoughGold { .. }
        | ArenaError::StackFull { .. } => "Purchase Failed",
        ArenaError::UnknownItem(_) => "Unknown Item",
        _ => "Item Error",
    }
}
