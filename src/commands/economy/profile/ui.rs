//! Handles all UI and embed creation for the `/profile` command.

use crate::arena::formulas::level_xp;
use crate::arena::{Actor, RankCatalog};
use crate::constants::{LEVEL_MAX, PLACEMENT_DUELS_MAX};
use crate::ui::style::*;
use chrono::{DateTime, Utc};
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

pub fn level_progress(actor: &Actor) -> String {
    if actor.level >= LEVEL_MAX {
        return format!("Level {} (max) · `{}` XP", actor.level, actor.xp);
    }
    let floor = level_xp(actor.level);
    let next = actor.next_level_xp();
    format!(
        "Level {} · `{}/{}` XP to level {}",
        actor.level,
        actor.xp - floor,
        next - floor,
        actor.level + 1
    )
}

pub fn rank_line(actor: &Actor, ranks: &RankCatalog) -> String {
    match actor.rank(ranks) {
        Some(rank) => format!("**{}** · `{}` Elo", rank.name, actor.elo),
        None => format!(
            "Unranked · placement `{}/{}`",
            actor.placement_duels, PLACEMENT_DUELS_MAX
        ),
    }
}

pub fn create_profile_embed(actor: &Actor, ranks: &RankCatalog, now: DateTime<Utc>) -> CreateEmbed {
    let equipped = if actor.items_equipped.is_empty() {
        "_Nothing equipped._".to_string()
    } else {
        actor
            .items_equipped
            .values()
            .map(|i| format!("{} **{}** ({})", i.emoji, i.name, i.bonus_summary()))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let cooldown = actor.attack_cooldown_remaining(now);
    let readiness = if actor.is_defeated() {
        "💀 Defeated, recovering".to_string()
    } else if cooldown.num_milliseconds() > 0 {
        format!("⏳ Ready to attack in `{}s`", cooldown.num_seconds().max(1))
    } else {
        "✅ Ready to attack".to_string()
    };

    CreateEmbed::new()
        .title(format!("{}'s Profile", actor.display_name))
        .color(COLOR_PROFILE)
        .description(readiness)
        .field(format!("{EMOJI_LEVEL} Progress"), level_progress(actor), false)
        .field(
            format!("{EMOJI_HEALTH} Health"),
            stat_pair(actor.health, actor.max_health()),
            true,
        )
        .field(
            format!("{EMOJI_ENERGY} Energy"),
            stat_pair(actor.energy, actor.max_energy()),
            true,
        )
        .field(format!("{EMOJI_GOLD} Gold"), format!("`{}`", actor.gold), true)
        .field(
            format!("{EMOJI_ATTACK} Attack"),
            stat_with_extra(actor.attack(), actor.attack_base, actor.attack_extra),
            true,
        )
        .field(
            format!("{EMOJI_DEFENSE} Defense"),
            stat_with_extra(actor.defense(), actor.defense_base, actor.defense_extra),
            true,
        )
        .field(
            format!("{EMOJI_SPEED} Speed"),
            stat_with_extra(actor.speed(), actor.speed_base, actor.speed_extra),
            true,
        )
        .field(format!("{EMOJI_RANK} Rank"), rank_line(actor, ranks), false)
        .field("🎽 Equipment", equipped, false)
        .footer(CreateEmbedFooter::new(format!(
            "Duels: {}W / {}L",
            actor.wins, actor.losses
        )))
}
