//! Handles the command logic for `/attack` and the `attack` prefix command.

use super::ui::create_attack_embed;
use crate::AppState;
use crate::commands::util::{
    defer_slash, member_profile, option_user, prefix_invoker, reply_prefix, reply_slash,
    slash_invoker,
};
use crate::services::MemberProfile;
use crate::ui::service_error_embed;
use crate::ui::style::error_embed;
use serenity::builder::{CreateCommand, CreateCommandOption, CreateEmbed};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("attack")
        .description("Attack another member of the server.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "The member to attack.")
                .required(true),
        )
}

async fn resolve(
    app_state: &AppState,
    attacker: &MemberProfile,
    defender: &MemberProfile,
) -> CreateEmbed {
    match app_state.arena.attack(attacker, defender).await {
        Ok(report) => create_attack_embed(&report, app_state.arena.ranks()),
        Err(e) => service_error_embed(&e),
    }
}

fn no_target() -> CreateEmbed {
    error_embed("No Target", "Mention a member (not a bot) to attack.")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    defer_slash(ctx, interaction).await;
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(attacker) = slash_invoker(interaction) else {
        return;
    };
    let embed = match (interaction.guild_id, option_user(interaction, "user")) {
        (Some(guild_id), Some(user)) if !user.bot => {
            let defender = member_profile(guild_id, user, None);
            resolve(&app_state, &attacker, &defender).await
        }
        _ => no_target(),
    };
    reply_slash(ctx, interaction, embed).await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(attacker) = prefix_invoker(msg) else {
        return;
    };
    let embed = match (msg.guild_id, msg.mentions.first()) {
        (Some(guild_id), Some(user)) if !user.bot => {
            let defender = member_profile(guild_id, user, None);
            resolve(&app_state, &attacker, &defender).await
        }
        _ => no_target(),
    };
    reply_prefix(ctx, msg, embed).await;
}
