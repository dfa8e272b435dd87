use crate::arena::ActorKey;
use crate::arena::leveling::LevelUpResult;
use crate::commands::util::prefix_invoker;
use crate::ui::style::{COLOR_VICTORY, EMOJI_GOLD, EMOJI_LEVEL};
use crate::{AppState, commands};
use serenity::async_trait;
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::guild::Member;
use serenity::model::user::User;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::str::FromStr;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Profile,
    Attack,
    Shop,
    Buy,
    Inventory,
    Equip,
    Unequip,
    Use,
    Give,
    Leaderboard,
    Ranks,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "profile" | "p" => Ok(Command::Profile),
            "attack" | "duel" | "fight" => Ok(Command::Attack),
            "shop" => Ok(Command::Shop),
            "buy" => Ok(Command::Buy),
            "inventory" | "inv" | "i" => Ok(Command::Inventory),
            "equip" => Ok(Command::Equip),
            "unequip" => Ok(Command::Unequip),
            "use" => Ok(Command::Use),
            "give" | "gift" => Ok(Command::Give),
            "leaderboard" | "lb" => Ok(Command::Leaderboard),
            "ranks" => Ok(Command::Ranks),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler {
    pub allowed_guild_id: GuildId,
}

impl Handler {
    /// Removes a message containing a filtered word. Returns true if it was filtered.
    async fn moderate(&self, ctx: &Context, msg: &Message, app_state: &AppState) -> bool {
        let Some(word) = app_state.profanity.find_in(&msg.content) else {
            return false;
        };
        warn!(target: "moderation", member_id = msg.author.id.get(), word, "removing message");
        if let Err(e) = msg.delete(&ctx.http).await {
            error!(target: "moderation", error = ?e, "failed to delete message");
        }
        true
    }

    async fn award_activity(&self, ctx: &Context, msg: &Message, app_state: &AppState) {
        let Some(member) = prefix_invoker(msg) else {
            return;
        };
        match app_state.arena.award_message_xp(&member).await {
            Ok(Some(result)) if result.did_level_up() => {
                let builder = CreateMessage::new()
                    .embed(level_up_embed(&member.display_name, &result))
                    .reference_message(msg);
                if let Err(e) = msg.channel_id.send_message(&ctx.http, builder).await {
                    error!(target: "handler.level", error = ?e, "failed to announce level up");
                }
            }
            Ok(_) => {}
            Err(e) => error!(target: "handler.level", error = %e, "failed to award message xp"),
        }
    }
}

fn level_up_embed(name: &str, result: &LevelUpResult) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("{EMOJI_LEVEL} Level Up!"))
        .description(format!(
            "**{}** reached level **{}** and earned {EMOJI_GOLD} `{}` gold.",
            name, result.new_level, result.gold_awarded
        ))
        .color(COLOR_VICTORY)
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = &interaction else {
            return;
        };
        if command.guild_id != Some(self.allowed_guild_id) {
            return;
        }
        debug!(target: "handler", command = %command.data.name, user = command.user.id.get(), "slash command");
        match command.data.name.as_str() {
            "profile" => commands::economy::profile_slash(&ctx, command).await,
            "attack" => commands::duel::run::run_slash(&ctx, command).await,
            "shop" => commands::economy::shop_slash(&ctx, command).await,
            "buy" => commands::economy::buy_slash(&ctx, command).await,
            "inventory" => commands::economy::inventory_slash(&ctx, command).await,
            "equip" => commands::economy::equip_slash(&ctx, command).await,
            "unequip" => commands::economy::unequip_slash(&ctx, command).await,
            "use" => commands::economy::use_slash(&ctx, command).await,
            "give" => commands::economy::give_slash(&ctx, command).await,
            "leaderboard" => commands::leaderboard::run_slash(&ctx, command).await,
            "ranks" => commands::leaderboard::ranks_slash(&ctx, command).await,
            _ => {}
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.guild_id != Some(self.allowed_guild_id) || msg.author.bot {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        if self.moderate(&ctx, &msg, &app_state).await {
            return;
        }
        let prefix_string = app_state.prefix.read().await.clone();
        let Some(command_body) = msg.content.strip_prefix(&prefix_string) else {
            self.award_activity(&ctx, &msg, &app_state).await;
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
        let args_vec: Vec<&str> = args.collect();
        match command {
            Command::Profile => commands::economy::profile_prefix(&ctx, &msg, args_vec).await,
            Command::Attack => commands::duel::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Shop => commands::economy::shop_prefix(&ctx, &msg, args_vec).await,
            Command::Buy => commands::economy::buy_prefix(&ctx, &msg, args_vec).await,
            Command::Inventory => commands::economy::inventory_prefix(&ctx, &msg, args_vec).await,
            Command::Equip => commands::economy::equip_prefix(&ctx, &msg, args_vec).await,
            Command::Unequip => commands::economy::unequip_prefix(&ctx, &msg, args_vec).await,
            Command::Use => commands::economy::use_prefix(&ctx, &msg, args_vec).await,
            Command::Give => commands::economy::give_prefix(&ctx, &msg, args_vec).await,
            Command::Leaderboard => commands::leaderboard::run_prefix(&ctx, &msg, args_vec).await,
            Command::Ranks => commands::leaderboard::ranks_prefix(&ctx, &msg, args_vec).await,
            // Prefixed chatter still counts as activity.
            Command::Unknown => self.award_activity(&ctx, &msg, &app_state).await,
        }
    }

    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        _member: Option<Member>,
    ) {
        if guild_id != self.allowed_guild_id {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        let key = ActorKey::new(guild_id.get(), user.id.get());
        match app_state.arena.mark_departed(key).await {
            Ok(()) => info!(target: "handler", member_id = key.member_id, "member left; hidden from leaderboards"),
            Err(e) => error!(target: "handler", error = %e, "failed to mark member as departed"),
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(target: "handler", user = %ready.user.name, "connected and ready");
        let commands_to_register = commands::registry();
        let count = commands_to_register.len();
        match self
            .allowed_guild_id
            .set_commands(&ctx.http, commands_to_register)
            .await
        {
            Ok(_) => info!(target: "handler", count, "registered guild commands"),
            Err(e) => error!(target: "handler", error = ?e, "error creating guild commands"),
        }
    }
}
