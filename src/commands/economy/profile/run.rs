//! Implements the `/profile` command.

use super::ui::create_profile_embed;
use crate::AppState;
use crate::commands::util::{
    defer_slash, member_profile, option_user, prefix_invoker, reply_prefix, reply_slash,
    slash_invoker,
};
use crate::services::MemberProfile;
use crate::ui::service_error_embed;
use chrono::Utc;
use serenity::builder::{CreateCommand, CreateCommandOption, CreateEmbed};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("profile")
        .description("View your or another member's duel profile.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "The member to view.")
                .required(false),
        )
}

async fn build(app_state: &AppState, member: &MemberProfile) -> CreateEmbed {
    match app_state.arena.profile(member).await {
        Ok(actor) => create_profile_embed(&actor, app_state.arena.ranks(), Utc::now()),
        Err(e) => service_error_embed(&e),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    defer_slash(ctx, interaction).await;
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(invoker) = slash_invoker(interaction) else {
        return;
    };
    let target = match (interaction.guild_id, option_user(interaction, "user")) {
        (Some(guild_id), Some(user)) if !user.bot => member_profile(guild_id, user, None),
        _ => invoker,
    };
    let embed = build(&app_state, &target).await;
    reply_slash(ctx, interaction, embed).await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(invoker) = prefix_invoker(msg) else {
        return;
    };
    let target = match (msg.guild_id, msg.mentions.first()) {
        (Some(guild_id), Some(user)) if !user.bot => member_profile(guild_id, user, None),
        _ => invoker,
    };
    let embed = build(&app_state, &target).await;
    reply_prefix(ctx, msg, embed).await;
}
