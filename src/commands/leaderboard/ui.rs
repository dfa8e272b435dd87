//! Handles the UI creation for the `/leaderboard` and `/ranks` commands.

use crate::arena::leaderboard::LeaderboardType;
use crate::arena::{Actor, RankCatalog};
use crate::constants::PLACEMENT_DUELS_MAX;
use crate::ui::style::*;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

/// Creates the embed for a given leaderboard type and its entries, best first.
pub fn create_leaderboard_embed(
    entries: &[Actor],
    board_type: LeaderboardType,
    ranks: &RankCatalog,
) -> CreateEmbed {
    let description_lines: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, actor)| {
            let place = i + 1;
            let medal = match place {
                1 => "🥇",
                2 => "🥈",
                3 => "🥉",
                _ => "🔹",
            };
            let suffix = match (board_type, actor.rank(ranks)) {
                (LeaderboardType::Elo, Some(rank)) => format!(" · {}", rank.name),
                (LeaderboardType::Elo, None) => " · Unranked".to_string(),
                _ => String::new(),
            };
            format!(
                "{} **{}**. {} - `{} {}`{}",
                medal,
                place,
                actor.display_name,
                board_type.score(actor),
                board_type.score_name(),
                suffix
            )
        })
        .collect();

    let description = if description_lines.is_empty() {
        "The leaderboard is currently empty.".to_string()
    } else {
        description_lines.join("\n")
    };

    CreateEmbed::new()
        .title(board_type.title())
        .description(description)
        .color(0xFFD700) // Gold
        .footer(CreateEmbedFooter::new(
            "Boards: elo, level, gold · e.g. leaderboard gold",
        ))
}

pub fn create_ranks_embed(ranks: &RankCatalog, current: Option<&Actor>) -> CreateEmbed {
    let current_index = current.and_then(|a| a.rank_index(ranks));
    let lines: Vec<String> = ranks
        .iter()
        .enumerate()
        .map(|(i, rank)| {
            let marker = if current_index == Some(i) { " ◀" } else { "" };
            format!(
                "**{}** · `{}+` Elo{}\n> {}",
                rank.name,
                rank.min_elo(),
                marker,
                rank.description
            )
        })
        .collect();

    let footer = match current {
        Some(actor) if current_index.is_none() => format!(
            "Complete {} placement duels to earn a rank ({}/{}).",
            PLACEMENT_DUELS_MAX, actor.placement_duels, PLACEMENT_DUELS_MAX
        ),
        Some(actor) => format!("Your rating: {} Elo", actor.elo),
        None => format!("Ranks unlock after {PLACEMENT_DUELS_MAX} duels."),
    };

    CreateEmbed::new()
        .title(format!("{EMOJI_RANK} Ranks"))
        .description(lines.join("\n"))
        .color(COLOR_INFO)
        .footer(CreateEmbedFooter::new(footer))
}
