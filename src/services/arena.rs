//! Arena service: loads actors, runs the gameplay rules under per-actor locks and saves the results.

use super::locks::ActorLocks;
use crate::arena::combat::{Attack, AttackOutcome};
use crate::arena::inventory::{Purchase, give_item};
use crate::arena::leaderboard::LeaderboardType;
use crate::arena::leveling::{LevelUpResult, grant_xp};
use crate::arena::{Actor, ActorKey, Item, ItemCatalog, RankCatalog};
use crate::clock::Clock;
use crate::constants::{MESSAGE_XP_COOLDOWN_SECS, MESSAGE_XP_MAX, MESSAGE_XP_MIN};
use crate::database::ActorStore;
use crate::error::{ArenaError, ServiceError};
use chrono::Duration;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Who is acting, as seen by the chat platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub key: ActorKey,
    pub name: String,
    pub display_name: String,
}

impl MemberProfile {
    pub fn new(
        guild_id: u64,
        member_id: u64,
        name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            key: ActorKey::new(guild_id, member_id),
            name: name.into(),
            display_name: display_name.into(),
        }
    }
}

/// Both actors after an attack, plus what happened.
#[derive(Debug, Clone)]
pub struct AttackReport {
    pub attacker: Actor,
    pub defender: Actor,
    pub outcome: AttackOutcome,
}

pub struct ArenaService {
    store: Arc<dyn ActorStore>,
    items: Arc<ItemCatalog>,
    ranks: Arc<RankCatalog>,
    clock: Arc<dyn Clock>,
    locks: ActorLocks,
}

impl ArenaService {
    pub fn new(
        store: Arc<dyn ActorStore>,
        items: Arc<ItemCatalog>,
        ranks: Arc<RankCatalog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            items,
            ranks,
            clock,
            locks: ActorLocks::new(),
        }
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    pub fn ranks(&self) -> &RankCatalog {
        &self.ranks
    }

    fn item(&self, query: &str) -> Result<Item, ArenaError> {
        self.items
            .find(query)
            .cloned()
            .ok_or_else(|| ArenaError::UnknownItem(query.trim().to_string()))
    }

    /// Loads an actor, creating it on first sight, refreshing names and applying regeneration.
    /// Must be called with the actor's lock held.
    async fn load_or_create(&self, member: &MemberProfile) -> Result<Actor, ServiceError> {
        let now = self.clock.now();
        let mut actor = match self.store.load(member.key).await? {
            Some(actor) => actor,
            None => {
                info!(target: "arena.actor", guild_id = member.key.guild_id, member_id = member.key.member_id, "creating actor");
                Actor::new(member.key, &member.name, &member.display_name, now)
            }
        };
        actor.name.clone_from(&member.name);
        actor.display_name.clone_from(&member.display_name);
        actor.is_member = true;
        actor.regenerate(now);
        Ok(actor)
    }

    /// Current state of a member's actor (created and saved if new).
    #[instrument(level = "debug", skip(self), fields(member_id = member.key.member_id))]
    pub async fn profile(&self, member: &MemberProfile) -> Result<Actor, ServiceError> {
        let _guard = self.locks.lock(member.key).await;
        let actor = self.load_or_create(member).await?;
        self.store.save(&actor).await?;
        Ok(actor)
    }

    /// Resolves one attack and persists both actors in a single write.
    #[instrument(level = "debug", skip(self), fields(attacker = attacker.key.member_id, defender = defender.key.member_id))]
    pub async fn attack(
        &self,
        attacker: &MemberProfile,
        defender: &MemberProfile,
    ) -> Result<AttackReport, ServiceError> {
        if attacker.key == defender.key {
            return Err(ArenaError::SelfTarget.into());
        }
        let _guards = self.locks.lock_many(&[attacker.key, defender.key]).await;
        let mut a = self.load_or_create(attacker).await?;
        let mut d = self.load_or_create(defender).await?;

        let now = self.clock.now();
        let remaining = a.attack_cooldown_remaining(now);
        if remaining > Duration::zero() {
            return Err(ArenaError::OnCooldown { remaining }.into());
        }

        let outcome = Attack::new(&mut a, &mut d).perform(&self.ranks, now)?;
        self.store.save_all(&[&a, &d]).await?;

        info!(
            target: "arena.combat",
            attacker = a.key.member_id,
            defender = d.key.member_id,
            kind = ?outcome.kind,
            damage = outcome.effective_damage,
            recoil = outcome.recoil_damage,
            fatal = outcome.is_fatal(),
            gold_reward = outcome.duel.as_ref().map_or(0, |r| r.gold_reward),
            gold_penalty = outcome.duel.as_ref().map_or(0, |r| r.gold_penalty),
            winner_elo_change = outcome.duel.as_ref().map_or(0, |r| r.winner_elo_change),
            loser_elo_change = outcome.duel.as_ref().map_or(0, |r| r.loser_elo_change),
            "attack resolved"
        );
        Ok(AttackReport {
            attacker: a,
            defender: d,
            outcome,
        })
    }

    #[instrument(level = "debug", skip(self), fields(member_id = member.key.member_id))]
    pub async fn buy(
        &self,
        member: &MemberProfile,
        item_query: &str,
        quantity: u32,
    ) -> Result<(Purchase, Actor), ServiceError> {
        let item = self.item(item_query)?;
        let _guard = self.locks.lock(member.key).await;
        let mut actor = self.load_or_create(member).await?;
        let purchase = actor.purchase(&item, quantity)?;
        self.store.save(&actor).await?;
        info!(target: "arena.shop", member_id = member.key.member_id, item = %item.id, quantity, cost = purchase.total_cost, "purchase");
        Ok((purchase, actor))
    }

    #[instrument(level = "debug", skip(self), fields(member_id = member.key.member_id))]
    pub async fn equip(
        &self,
        member: &MemberProfile,
        item_query: &str,
    ) -> Result<(Item, Actor), ServiceError> {
        let item = self.item(item_query)?;
        let _guard = self.locks.lock(member.key).await;
        let mut actor = self.load_or_create(member).await?;
        actor.equip(&item)?;
        self.store.save(&actor).await?;
        debug!(target: "arena.items", member_id = member.key.member_id, item = %item.id, "equipped");
        Ok((item, actor))
    }

    #[instrument(level = "debug", skip(self), fields(member_id = member.key.member_id))]
    pub async fn unequip(
        &self,
        member: &MemberProfile,
        item_query: &str,
    ) -> Result<(Item, Actor), ServiceError> {
        let item = self.item(item_query)?;
        let _guard = self.locks.lock(member.key).await;
        let mut actor = self.load_or_create(member).await?;
        let item = actor.unequip(&item.id)?;
        self.store.save(&actor).await?;
        debug!(target: "arena.items", member_id = member.key.member_id, item = %item.id, "unequipped");
        Ok((item, actor))
    }

    /// Uses one consumable; returns the item, units left and the updated actor.
    #[instrument(level = "debug", skip(self), fields(member_id = member.key.member_id))]
    pub async fn consume(
        &self,
        member: &MemberProfile,
        item_query: &str,
    ) -> Result<(Item, u32, Actor), ServiceError> {
        let item = self.item(item_query)?;
        let _guard = self.locks.lock(member.key).await;
        let mut actor = self.load_or_create(member).await?;
        let left = actor.consume(&item)?;
        self.store.save(&actor).await?;
        debug!(target: "arena.items", member_id = member.key.member_id, item = %item.id, left, "consumed");
        Ok((item, left, actor))
    }

    #[instrument(level = "debug", skip(self), fields(giver = giver.key.member_id, receiver = receiver.key.member_id))]
    pub async fn gift(
        &self,
        giver: &MemberProfile,
        receiver: &MemberProfile,
        item_query: &str,
        quantity: u32,
    ) -> Result<Item, ServiceError> {
        if giver.key == receiver.key {
            return Err(ArenaError::SelfTarget.into());
        }
        let item = self.item(item_query)?;
        let _guards = self.locks.lock_many(&[giver.key, receiver.key]).await;
        let mut from = self.load_or_create(giver).await?;
        let mut to = self.load_or_create(receiver).await?;
        give_item(&mut from, &mut to, &item, quantity)?;
        self.store.save_all(&[&from, &to]).await?;
        info!(target: "arena.items", giver = giver.key.member_id, receiver = receiver.key.member_id, item = %item.id, quantity, "gift");
        Ok(item)
    }

    /// Grants a fixed amount of XP, paying gold for every level reached.
    pub async fn grant_xp(
        &self,
        member: &MemberProfile,
        amount: i64,
    ) -> Result<(LevelUpResult, Actor), ServiceError> {
        let _guard = self.locks.lock(member.key).await;
        let mut actor = self.load_or_create(member).await?;
        let result = grant_xp(&mut actor, amount);
        self.store.save(&actor).await?;
        if result.did_level_up() {
            info!(target: "arena.level", member_id = member.key.member_id, level = result.new_level, gold = result.gold_awarded, "level up");
        }
        Ok((result, actor))
    }

    /// Chat activity XP: a random amount, at most once per cooldown window.
    /// Returns `None` while the window is still open.
    #[instrument(level = "debug", skip(self), fields(member_id = member.key.member_id))]
    pub async fn award_message_xp(
        &self,
        member: &MemberProfile,
    ) -> Result<Option<LevelUpResult>, ServiceError> {
        let _guard = self.locks.lock(member.key).await;
        let mut actor = self.load_or_create(member).await?;
        let now = self.clock.now();
        if let Some(last) = actor.messaged_at
            && now - last < Duration::seconds(MESSAGE_XP_COOLDOWN_SECS)
        {
            return Ok(None);
        }
        let amount = rand::rng().random_range(MESSAGE_XP_MIN..=MESSAGE_XP_MAX);
        actor.messaged_at = Some(now);
        let result = grant_xp(&mut actor, amount);
        self.store.save(&actor).await?;
        if result.did_level_up() {
            info!(target: "arena.level", member_id = member.key.member_id, level = result.new_level, gold = result.gold_awarded, "level up");
        }
        Ok(Some(result))
    }

    pub async fn leaderboard(
        &self,
        guild_id: u64,
        kind: LeaderboardType,
        limit: i64,
    ) -> Result<Vec<Actor>, ServiceError> {
        Ok(self.store.top(guild_id, kind, limit).await?)
    }

    /// Marks a member as having left the guild; their record is kept.
    pub async fn mark_departed(&self, key: ActorKey) -> Result<(), ServiceError> {
        let _guard = self.locks.lock(key).await;
        if let Some(mut actor) = self.store.load(key).await? {
            actor.is_member = false;
            self.store.save(&actor).await?;
        }
        Ok(())
    }
}
