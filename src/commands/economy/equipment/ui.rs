use crate::arena::{Actor, Item};
use crate::ui::style::*;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

fn stats_footer(actor: &Actor) -> CreateEmbedFooter {
    CreateEmbedFooter::new(format!(
        "HP {}/{} · EN {}/{} · ATK {} · DEF {} · SPD {}",
        actor.health,
        actor.max_health(),
        actor.energy,
        actor.max_energy(),
        actor.attack(),
        actor.defense(),
        actor.speed()
    ))
}

pub fn create_equip_embed(item: &Item, actor: &Actor, equipped: bool) -> CreateEmbed {
    let verb = if equipped { "equipped" } else { "unequipped" };
    CreateEmbed::new()
        .title(format!("Item {}", if equipped { "Equipped" } else { "Unequipped" }))
        .description(format!(
            "You {verb} {} **{}** ({}).",
            item.emoji,
            item.name,
            item.bonus_summary()
        ))
        .color(COLOR_PROFILE)
        .footer(stats_footer(actor))
}

pub fn create_use_embed(item: &Item, left: u32, actor: &Actor) -> CreateEmbed {
    CreateEmbed::new()
        .title("Item Used")
        .description(format!(
            "You used {} **{}** ({}). `{}` left.",
            item.emoji,
            item.name,
            item.bonus_summary(),
            left
        ))
        .color(COLOR_VICTORY)
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
}
