//! Embeds for the shop listing and purchase receipts.

use crate::arena::inventory::Purchase;
use crate::arena::{Actor, Item, ItemCatalog, ItemKind};
use crate::ui::style::*;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

fn shop_line(item: &Item) -> String {
    format!(
        "{} **{}** `{}` {EMOJI_GOLD} {} · {}\n> {}",
        item.emoji,
        item.name,
        item.id,
        item.price,
        item.bonus_summary(),
        item.description
    )
}

pub fn create_shop_embed(catalog: &ItemCatalog, gold: i64) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("🛒 Arena Shop")
        .description(format!("You have `{gold}` gold."))
        .color(COLOR_SHOP);
    for (kind, title) in [
        (ItemKind::Equippable, "Equipment"),
        (ItemKind::Consumable, "Consumables"),
    ] {
        let lines: Vec<String> = catalog
            .all_items()
            .filter(|i| i.buyable && i.kind == kind)
            .map(shop_line)
            .collect();
        if !lines.is_empty() {
            embed = embed.field(title, lines.join("\n"), false);
        }
    }
    embed.footer(CreateEmbedFooter::new("Buy with /buy <item> [quantity]"))
}

pub fn create_purchase_embed(purchase: &Purchase, item: &Item, actor: &Actor) -> CreateEmbed {
    CreateEmbed::new()
        .title("Purchase Complete")
        .description(format!(
            "You bought **{}x** {} **{}** for `{}` gold.\nYou now own `{}`.",
            purchase.quantity, item.emoji, item.name, purchase.total_cost, purchase.owned
        ))
        .color(COLOR_SHOP)
        .footer(CreateEmbedFooter::new(format!(
            "Gold remaining: {}",
            actor.gold
        )))
}
