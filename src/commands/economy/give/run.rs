//! Handles the command logic for `/give` and the `give` prefix command.

use crate::AppState;
use crate::commands::util::{
    defer_slash, member_profile, option_i64, option_str, option_user, parse_quantity,
    prefix_invoker, reply_prefix, reply_slash, slash_invoker, split_item_and_quantity,
    strip_mentions,
};
use crate::services::MemberProfile;
use crate::ui::service_error_embed;
use crate::ui::style::{COLOR_VICTORY, error_embed};
use serenity::builder::{CreateCommand, CreateCommandOption, CreateEmbed};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("give")
        .description("Give an item from your inventory to another member.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "user",
                "The member to give the item to.",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "item", "Item name or id.")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "quantity",
                "The amount to give. Defaults to 1.",
            )
            .required(false)
            .min_int_value(1),
        )
}

async fn give(
    app_state: &AppState,
    giver: &MemberProfile,
    receiver: &MemberProfile,
    item: &str,
    quantity: Option<u32>,
) -> CreateEmbed {
    let Some(quantity) = quantity else {
        return error_embed("Invalid Quantity", "Quantity must be a whole number of at least 1.");
    };
    match app_state.arena.gift(giver, receiver, item, quantity).await {
        Ok(item) => CreateEmbed::new()
            .title("Gift Sent")
            .description(format!(
                "**{}** gave **{}x** {} **{}** to **{}**.",
                giver.display_name, quantity, item.emoji, item.name, receiver.display_name
            ))
            .color(COLOR_VICTORY),
        Err(e) => service_error_embed(&e),
    }
}

fn usage() -> CreateEmbed {
    error_embed(
        "Give",
        "Mention a member and name the item, e.g. `give @user health potion 2`.",
    )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    defer_slash(ctx, interaction).await;
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(giver) = slash_invoker(interaction) else {
        return;
    };
    let item = option_str(interaction, "item").unwrap_or_default();
    let quantity = match option_i64(interaction, "quantity") {
        None => Some(1),
        Some(q) => u32::try_from(q).ok().filter(|q| *q > 0),
    };
    let embed = match (interaction.guild_id, option_user(interaction, "user")) {
        (Some(guild_id), Some(user)) if !user.bot => {
            let receiver = member_profile(guild_id, user, None);
            give(&app_state, &giver, &receiver, item, quantity).await
        }
        _ => usage(),
    };
    reply_slash(ctx, interaction, embed).await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(giver) = prefix_invoker(msg) else {
        return;
    };
    let rest = strip_mentions(&args);
    let (item, quantity) = split_item_and_quantity(&rest);
    let embed = match (msg.guild_id, msg.mentions.first()) {
        (Some(guild_id), Some(user)) if !user.bot && !item.is_empty() => {
            let receiver = member_profile(guild_id, user, None);
            give(&app_state, &giver, &receiver, &item, parse_quantity(quantity)).await
        }
        _ => usage(),
    };
    reply_prefix(ctx, msg, embed).await;
}
