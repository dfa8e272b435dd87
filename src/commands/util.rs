//! Shared helpers for reading command arguments and sending replies.

use crate::services::MemberProfile;
use serenity::builder::{CreateEmbed, CreateInteractionResponseFollowup, CreateMessage};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::model::id::GuildId;
use serenity::model::user::User;
use serenity::prelude::Context;

/// Builds the actor identity of a platform user, preferring the guild nickname.
pub fn member_profile(guild_id: GuildId, user: &User, nick: Option<&str>) -> MemberProfile {
    MemberProfile::new(
        guild_id.get(),
        user.id.get(),
        user.name.clone(),
        nick.unwrap_or_else(|| user.display_name()).to_string(),
    )
}

/// The invoking member of a slash command, if it was used inside a guild.
pub fn slash_invoker(interaction: &CommandInteraction) -> Option<MemberProfile> {
    let guild_id = interaction.guild_id?;
    let nick = interaction
        .member
        .as_ref()
        .and_then(|m| m.nick.as_deref());
    Some(member_profile(guild_id, &interaction.user, nick))
}

/// The author of a prefix command, if it was sent inside a guild.
pub fn prefix_invoker(msg: &Message) -> Option<MemberProfile> {
    let guild_id = msg.guild_id?;
    let nick = msg.member.as_ref().and_then(|m| m.nick.as_deref());
    Some(member_profile(guild_id, &msg.author, nick))
}

pub fn option_str<'a>(interaction: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_str())
}

pub fn option_i64(interaction: &CommandInteraction, name: &str) -> Option<i64> {
    interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_i64())
}

/// A user option, resolved from the interaction payload (no extra HTTP call).
pub fn option_user<'a>(interaction: &'a CommandInteraction, name: &str) -> Option<&'a User> {
    let id = interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_user_id())?;
    interaction.data.resolved.users.get(&id)
}

/// Parses a positive quantity argument; absent means 1.
pub fn parse_quantity(raw: Option<&str>) -> Option<u32> {
    match raw {
        None => Some(1),
        Some(s) => s.parse::<u32>().ok().filter(|q| *q > 0),
    }
}

/// Splits prefix arguments into an item name and an optional trailing quantity,
/// e.g. `health potion 3` → (`health potion`, `3`).
pub fn split_item_and_quantity<'a>(args: &[&'a str]) -> (String, Option<&'a str>) {
    match args.split_last() {
        Some((last, rest)) if !rest.is_empty() && last.chars().all(|c| c.is_ascii_digit()) => {
            (rest.join(" "), Some(*last))
        }
        _ => (args.join(" "), None),
    }
}

/// Drops leading mention tokens (`<@123>`) from prefix arguments.
pub fn strip_mentions<'a>(args: &[&'a str]) -> Vec<&'a str> {
    args.iter()
        .copied()
        .filter(|a| !(a.starts_with("<@") && a.ends_with('>')))
        .collect()
}

pub async fn defer_slash(ctx: &Context, interaction: &CommandInteraction) {
    if let Err(e) = interaction.defer(&ctx.http).await {
        tracing::debug!(target: "ui.defer", command = %interaction.data.name, error = ?e, "defer failed");
    }
}

/// Sends the embed as the follow-up to a deferred slash command.
pub async fn reply_slash(ctx: &Context, interaction: &CommandInteraction, embed: CreateEmbed) {
    let builder = CreateInteractionResponseFollowup::new().embed(embed);
    if let Err(e) = interaction.create_followup(&ctx.http, builder).await {
        tracing::error!(target: "ui.reply", command = %interaction.data.name, error = ?e, "followup failed");
    }
}

pub async fn reply_prefix(ctx: &Context, msg: &Message, embed: CreateEmbed) {
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    if let Err(e) = msg.channel_id.send_message(&ctx.http, builder).await {
        tracing::error!(target: "ui.reply", channel = msg.channel_id.get(), error = ?e, "send failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_parsing() {
        assert_eq!(parse_quantity(None), Some(1));
        assert_eq!(parse_quantity(Some("4")), Some(4));
        assert_eq!(parse_quantity(Some("0")), None);
        assert_eq!(parse_quantity(Some("-2")), None);
    }

    #[test]
    fn item_and_quantity_split() {
        assert_eq!(
            split_item_and_quantity(&["health", "potion", "3"]),
            ("health potion".to_string(), Some("3"))
        );
        assert_eq!(
            split_item_and_quantity(&["elixir"]),
            ("elixir".to_string(), None)
        );
        assert_eq!(split_item_and_quantity(&["7"]), ("7".to_string(), None));
    }

    #[test]
    fn mentions_are_stripped() {
        assert_eq!(
            strip_mentions(&["<@123>", "iron", "sword", "<@!456>"]),
            vec!["iron", "sword"]
        );
    }
}
