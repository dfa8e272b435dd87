//! Handles the command logic for `/equip`, `/unequip` and `/use`.

use super::ui::{create_equip_embed, create_use_embed};
use crate::AppState;
use crate::commands::util::{
    defer_slash, option_str, prefix_invoker, reply_prefix, reply_slash, slash_invoker,
};
use crate::services::MemberProfile;
use crate::ui::service_error_embed;
use crate::ui::style::error_embed;
use serenity::builder::{CreateCommand, CreateCommandOption, CreateEmbed};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Action {
    Equip,
    Unequip,
    Use,
}

fn item_command(name: &str, description: &str) -> CreateCommand {
    CreateCommand::new(name).description(description).add_option(
        CreateCommandOption::new(CommandOptionType::String, "item", "Item name or id.")
            .required(true),
    )
}

pub fn register_equip() -> CreateCommand {
    item_command("equip", "Equip an item you own.")
}

pub fn register_unequip() -> CreateCommand {
    item_command("unequip", "Take off an equipped item.")
}

pub fn register_use() -> CreateCommand {
    item_command("use", "Use a consumable item.")
}

async fn apply(
    app_state: &AppState,
    member: &MemberProfile,
    action: Action,
    item: &str,
) -> CreateEmbed {
    if item.trim().is_empty() {
        return error_embed("Missing Item", "Name the item, e.g. `equip iron sword`.");
    }
    let arena = &app_state.arena;
    let result = match action {
        Action::Equip => arena
            .equip(member, item)
            .await
            .map(|(item, actor)| create_equip_embed(&item, &actor, true)),
        Action::Unequip => arena
            .unequip(member, item)
            .await
            .map(|(item, actor)| create_equip_embed(&item, &actor, false)),
        Action::Use => arena
            .consume(member, item)
            .await
            .map(|(item, left, actor)| create_use_embed(&item, left, &actor)),
    };
    result.unwrap_or_else(|e| service_error_embed(&e))
}

async fn slash(ctx: &Context, interaction: &CommandInteraction, action: Action) {
    defer_slash(ctx, interaction).await;
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(member) = slash_invoker(interaction) else {
        return;
    };
    let item = option_str(interaction, "item").unwrap_or_default();
    let embed = apply(&app_state, &member, action, item).await;
    reply_slash(ctx, interaction, embed).await;
}

async fn prefix(ctx: &Context, msg: &Message, args: Vec<&str>, action: Action) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(member) = prefix_invoker(msg) else {
        return;
    };
    let embed = apply(&app_state, &member, action, &args.join(" ")).await;
    reply_prefix(ctx, msg, embed).await;
}

pub async fn equip_slash(ctx: &Context, interaction: &CommandInteraction) {
    slash(ctx, interaction, Action::Equip).await;
}

pub async fn equip_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    prefix(ctx, msg, args, Action::Equip).await;
}

pub async fn unequip_slash(ctx: &Context, interaction: &CommandInteraction) {
    slash(ctx, interaction, Action::Unequip).await;
}

pub async fn unequip_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    prefix(ctx, msg, args, Action::Unequip).await;
}

pub async fn use_slash(ctx: &Context, interaction: &CommandInteraction) {
    slash(ctx, interaction, Action::Use).await;
}

pub async fn use_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    prefix(ctx, msg, args, Action::Use).await;
}
