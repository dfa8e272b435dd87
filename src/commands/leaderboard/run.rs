//! Implements the run logic for the `/leaderboard` and `/ranks` commands.

use super::ui::{create_leaderboard_embed, create_ranks_embed};
use crate::AppState;
use crate::arena::leaderboard::LeaderboardType;
use crate::commands::util::{
    defer_slash, option_str, prefix_invoker, reply_prefix, reply_slash, slash_invoker,
};
use crate::constants::LEADERBOARD_LIMIT;
use crate::services::MemberProfile;
use crate::ui::service_error_embed;
use serenity::builder::{CreateCommand, CreateCommandOption, CreateEmbed};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;
use std::str::FromStr;
use tracing::warn;

pub fn register() -> CreateCommand {
    CreateCommand::new("leaderboard")
        .description("View the server leaderboards.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "type", "Which board to show.")
                .required(false)
                .add_string_choice("Duel Rating", "elo")
                .add_string_choice("Level", "level")
                .add_string_choice("Wealth", "gold"),
        )
}

pub fn register_ranks() -> CreateCommand {
    CreateCommand::new("ranks").description("List the duel ranks and their Elo thresholds.")
}

async fn leaderboard(app_state: &AppState, guild_id: u64, board: Option<&str>) -> CreateEmbed {
    let board_type = board
        .and_then(|b| LeaderboardType::from_str(b).ok())
        .unwrap_or(LeaderboardType::Elo);
    match app_state
        .arena
        .leaderboard(guild_id, board_type, LEADERBOARD_LIMIT)
        .await
    {
        Ok(entries) => create_leaderboard_embed(&entries, board_type, app_state.arena.ranks()),
        Err(e) => service_error_embed(&e),
    }
}

async fn ranks(app_state: &AppState, member: &MemberProfile) -> CreateEmbed {
    let actor = match app_state.arena.profile(member).await {
        Ok(actor) => Some(actor),
        Err(e) => {
            warn!(target: "commands.ranks", error = %e, "could not load profile for rank listing");
            None
        }
    };
    create_ranks_embed(app_state.arena.ranks(), actor.as_ref())
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    defer_slash(ctx, interaction).await;
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(guild_id) = interaction.guild_id else {
        return;
    };
    let embed = leaderboard(&app_state, guild_id.get(), option_str(interaction, "type")).await;
    reply_slash(ctx, interaction, embed).await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(guild_id) = msg.guild_id else {
        return;
    };
    let embed = leaderboard(&app_state, guild_id.get(), args.first().copied()).await;
    reply_prefix(ctx, msg, embed).await;
}

pub async fn ranks_slash(ctx: &Context, interaction: &CommandInteraction) {
    defer_slash(ctx, interaction).await;
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(member) = slash_invoker(interaction) else {
        return;
    };
    let embed = ranks(&app_state, &member).await;
    reply_slash(ctx, interaction, embed).await;
}

pub async fn ranks_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(member) = prefix_invoker(msg) else {
        return;
    };
    let embed = ranks(&app_state, &member).await;
    reply_prefix(ctx, msg, embed).await;
}
