//! Central UI style constants and helpers.
pub const COLOR_PROFILE: u32 = 0x9B59B6; // Purple
pub const COLOR_DUEL: u32 = 0xE67E22; // Orange
pub const COLOR_VICTORY: u32 = 0x2ECC71; // Green
pub const COLOR_SHOP: u32 = 0xCD7F32; // Bronze
pub const COLOR_INFO: u32 = 0x3498DB; // Blue
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

pub const EMOJI_HEALTH: &str = "❤️";
pub const EMOJI_ENERGY: &str = "⚡";
pub const EMOJI_ATTACK: &str = "⚔️";
pub const EMOJI_DEFENSE: &str = "🛡️";
pub const EMOJI_SPEED: &str = "💨";
pub const EMOJI_GOLD: &str = "💰";
pub const EMOJI_LEVEL: &str = "⭐";
pub const EMOJI_RANK: &str = "🏆";

pub fn stat_pair(current: i64, max: i64) -> String {
    format!("`{}/{}`", current, max)
}

/// A base stat with its equipment modifier, e.g. `12 (10 +2)`.
pub fn stat_with_extra(effective: i64, base: i64, extra: i64) -> String {
    if extra == 0 {
        format!("`{}`", effective)
    } else {
        format!("`{}` ({} {:+})", effective, base, extra)
    }
}

use serenity::builder::CreateEmbed;

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}
