// src/commands/mod.rs
// This file declares the existence of our command modules.

pub mod duel;
pub mod economy;
pub mod leaderboard;
pub mod util;

use serenity::builder::CreateCommand;

/// Every slash command the bot registers with the guild.
pub fn registry() -> Vec<CreateCommand> {
    vec![
        economy::profile::run::register(),
        duel::run::register(),
        economy::shop::run::register(),
        economy::shop::run::register_buy(),
        economy::inventory::run::register(),
        economy::equipment::run::register_equip(),
        economy::equipment::run::register_unequip(),
        economy::equipment::run::register_use(),
        economy::give::run::register(),
        leaderboard::run::register(),
        leaderboard::run::register_ranks(),
    ]
}
