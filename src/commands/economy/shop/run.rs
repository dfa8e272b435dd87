//! Handles the command logic for `/shop` and `/buy`.

use super::ui::{create_purchase_embed, create_shop_embed};
use crate::AppState;
use crate::commands::util::{
    defer_slash, option_i64, option_str, parse_quantity, prefix_invoker, reply_prefix,
    reply_slash, slash_invoker, split_item_and_quantity,
};
use crate::services::MemberProfile;
use crate::ui::service_error_embed;
use crate::ui::style::error_embed;
use serenity::builder::{CreateCommand, CreateCommandOption, CreateEmbed};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("shop").description("Browse the items for sale.")
}

pub fn register_buy() -> CreateCommand {
    CreateCommand::new("buy")
        .description("Buy an item from the shop.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "item", "Item name or id.")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "quantity",
                "How many to buy. Defaults to 1.",
            )
            .required(false)
            .min_int_value(1),
        )
}

async fn shop(app_state: &AppState, member: &MemberProfile) -> CreateEmbed {
    match app_state.arena.profile(member).await {
        Ok(actor) => create_shop_embed(app_state.arena.items(), actor.gold),
        Err(e) => service_error_embed(&e),
    }
}

async fn buy(
    app_state: &AppState,
    member: &MemberProfile,
    item: &str,
    quantity: Option<u32>,
) -> CreateEmbed {
    let Some(quantity) = quantity else {
        return error_embed("Invalid Quantity", "Quantity must be a whole number of at least 1.");
    };
    match app_state.arena.buy(member, item, quantity).await {
        Ok((purchase, actor)) => match app_state.arena.items().get_item(&purchase.item_id) {
            Some(item) => create_purchase_embed(&purchase, item, &actor),
            None => error_embed("Unknown Item", purchase.item_id.clone()),
        },
        Err(e) => service_error_embed(&e),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    defer_slash(ctx, interaction).await;
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(member) = slash_invoker(interaction) else {
        return;
    };
    let embed = shop(&app_state, &member).await;
    reply_slash(ctx, interaction, embed).await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(member) = prefix_invoker(msg) else {
        return;
    };
    let embed = shop(&app_state, &member).await;
    reply_prefix(ctx, msg, embed).await;
}

pub async fn buy_slash(ctx: &Context, interaction: &CommandInteraction) {
    defer_slash(ctx, interaction).await;
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(member) = slash_invoker(interaction) else {
        return;
    };
    let item = option_str(interaction, "item").unwrap_or_default();
    let quantity = match option_i64(interaction, "quantity") {
        None => Some(1),
        Some(q) => u32::try_from(q).ok().filter(|q| *q > 0),
    };
    let embed = buy(&app_state, &member, item, quantity).await;
    reply_slash(ctx, interaction, embed).await;
}

pub async fn buy_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(member) = prefix_invoker(msg) else {
        return;
    };
    let (item, quantity) = split_item_and_quantity(&args);
    let embed = if item.is_empty() {
        error_embed("Missing Item", "Tell me what to buy, e.g. `buy health potion 2`.")
    } else {
        buy(&app_state, &member, &item, parse_quantity(quantity)).await
    };
    reply_prefix(ctx, msg, embed).await;
}
