//! Handles all UI and embed creation for the `/inventory` command.

use crate::arena::{Actor, ItemKind};
use crate::constants::ITEMS_EQUIP_MAX;
use crate::ui::style::*;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

pub fn create_inventory_embed(actor: &Actor) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!("{}'s Inventory", actor.display_name))
        .color(COLOR_INFO);

    if actor.item_stacks.is_empty() {
        return embed
            .description("Your inventory is empty. Visit the `/shop`!")
            .footer(CreateEmbedFooter::new(format!("Gold: {}", actor.gold)));
    }

    for (kind, title) in [
        (ItemKind::Equippable, "🎽 Equipment"),
        (ItemKind::Consumable, "🧪 Consumables"),
        (ItemKind::Special, "✨ Special"),
    ] {
        let lines: Vec<String> = actor
            .item_stacks
            .values()
            .filter(|s| s.item.kind == kind)
            .map(|s| {
                let marker = if actor.is_equipped(&s.item.id) {
                    " *(equipped)*"
                } else {
                    ""
                };
                format!(
                    "{} **{}** x{}{}",
                    s.item.emoji, s.item.name, s.quantity, marker
                )
            })
            .collect();
        if !lines.is_empty() {
            embed = embed.field(title, lines.join("\n"), false);
        }
    }

    embed.footer(CreateEmbedFooter::new(format!(
        "Gold: {} · Equipped {}/{}",
        actor.gold,
        actor.items_equipped.len(),
        ITEMS_EQUIP_MAX
    )))
}
