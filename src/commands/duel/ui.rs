//! Embeds for attack results.

use crate::arena::RankCatalog;
use crate::arena::combat::{HitKind, RankChange, Side};
use crate::services::AttackReport;
use crate::ui::style::*;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

fn rank_note(change: RankChange, name: &str, rank: Option<String>) -> Option<String> {
    let rank = rank?;
    match change {
        RankChange::Unchanged => None,
        RankChange::Placed => Some(format!("📜 {name} finished placement and was ranked **{rank}**!")),
        RankChange::Promoted => Some(format!("📈 {name} was promoted to **{rank}**!")),
        RankChange::Demoted => Some(format!("📉 {name} dropped to **{rank}**.")),
    }
}

pub fn create_attack_embed(report: &AttackReport, ranks: &RankCatalog) -> CreateEmbed {
    let AttackReport {
        attacker,
        defender,
        outcome,
    } = report;

    let mut lines = vec![match outcome.kind {
        HitKind::Hit => format!(
            "{EMOJI_ATTACK} **{}** strikes **{}** for `{}` damage.",
            attacker.display_name, defender.display_name, outcome.effective_damage
        ),
        HitKind::Block => format!(
            "{EMOJI_DEFENSE} **{}** blocks the blow from **{}** completely.",
            defender.display_name, attacker.display_name
        ),
        HitKind::Recoil => format!(
            "↩️ **{}**'s guard holds; **{}** takes `{}` recoil damage.",
            defender.display_name, attacker.display_name, outcome.recoil_damage
        ),
    }];

    let mut color = COLOR_DUEL;
    if let Some(duel) = &outcome.duel {
        color = COLOR_VICTORY;
        let (winner, loser) = match duel.winner {
            Side::Attacker => (attacker, defender),
            Side::Defender => (defender, attacker),
        };
        lines.push(String::new());
        lines.push(format!(
            "🏁 **{}** defeats **{}**!",
            winner.display_name, loser.display_name
        ));
        lines.push(format!(
            "{EMOJI_GOLD} {} earns `{}` gold; {} loses `{}` gold.",
            winner.display_name, duel.gold_reward, loser.display_name, duel.gold_penalty
        ));
        lines.push(format!(
            "{EMOJI_RANK} Elo: {} `{:+}` ({}), {} `{:+}` ({})",
            winner.display_name,
            duel.winner_elo_change,
            winner.elo,
            loser.display_name,
            duel.loser_elo_change,
            loser.elo
        ));
        for (change, actor) in [(duel.winner_rank, winner), (duel.loser_rank, loser)] {
            let rank = actor.rank(ranks).map(|r| r.name);
            if let Some(note) = rank_note(change, &actor.display_name, rank) {
                lines.push(note);
            }
        }
    }

    CreateEmbed::new()
        .title(format!(
            "{} ⚔️ {}",
            attacker.display_name, defender.display_name
        ))
        .description(lines.join("\n"))
        .color(color)
        .field(
            format!("{EMOJI_HEALTH} {}", attacker.display_name),
            stat_pair(attacker.health, attacker.max_health()),
            true,
        )
        .field(
            format!("{EMOJI_HEALTH} {}", defender.display_name),
            stat_pair(defender.health, defender.max_health()),
            true,
        )
        .footer(CreateEmbedFooter::new(format!(
            "{} energy left: {}/{} · next attack in {}s",
            attacker.display_name,
            attacker.energy,
            attacker.max_energy(),
            attacker.attack_cooldown().num_seconds()
        )))
}
