//! Implements the `/inventory` command.

use super::ui::create_inventory_embed;
use crate::AppState;
use crate::commands::util::{
    defer_slash, prefix_invoker, reply_prefix, reply_slash, slash_invoker,
};
use crate::ui::service_error_embed;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("inventory").description("View the items you own.")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    defer_slash(ctx, interaction).await;
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(member) = slash_invoker(interaction) else {
        return;
    };
    let embed = match app_state.arena.profile(&member).await {
        Ok(actor) => create_inventory_embed(&actor),
        Err(e) => service_error_embed(&e),
    };
    reply_slash(ctx, interaction, embed).await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(member) = prefix_invoker(msg) else {
        return;
    };
    let embed = match app_state.arena.profile(&member).await {
        Ok(actor) => create_inventory_embed(&actor),
        Err(e) => service_error_embed(&e),
    };
    reply_prefix(ctx, msg, embed).await;
}
