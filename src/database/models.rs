//! Contains the row structs that map to the actor tables, and their conversion to [`Actor`].

use crate::arena::{Actor, ActorKey, ItemCatalog, ItemStack};
use sqlx::types::chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::warn;

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ActorRow {
    pub guild_id: i64,
    pub member_id: i64,
    pub name: String,
    pub display_name: String,
    pub is_member: bool,
    pub health: i64,
    pub health_max_base: i64,
    pub health_max_extra: i64,
    pub energy: i64,
    pub energy_max_base: i64,
    pub energy_max_extra: i64,
    pub attack_base: i64,
    pub attack_extra: i64,
    pub defense_base: i64,
    pub defense_extra: i64,
    pub speed_base: i64,
    pub speed_extra: i64,
    pub level: i32,
    pub xp: i64,
    pub gold: i64,
    pub attacked_at: Option<DateTime<Utc>>,
    pub defended_at: Option<DateTime<Utc>>,
    pub regenerated_at: DateTime<Utc>,
    pub messaged_at: Option<DateTime<Utc>>,
    pub elo: i32,
    pub wins: i32,
    pub losses: i32,
    pub placement_duels: i32,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ItemRow {
    pub member_id: i64,
    pub item_id: String,
    pub quantity: i32,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct EquipmentRow {
    pub member_id: i64,
    pub item_id: String,
}

impl From<&Actor> for ActorRow {
    fn from(a: &Actor) -> Self {
        Self {
            guild_id: a.key.guild_id as i64,
            member_id: a.key.member_id as i64,
            name: a.name.clone(),
            display_name: a.display_name.clone(),
            is_member: a.is_member,
            health: a.health,
            health_max_base: a.health_max_base,
            health_max_extra: a.health_max_extra,
            energy: a.energy,
            energy_max_base: a.energy_max_base,
            energy_max_extra: a.energy_max_extra,
            attack_base: a.attack_base,
            attack_extra: a.attack_extra,
            defense_base: a.defense_base,
            defense_extra: a.defense_extra,
            speed_base: a.speed_base,
            speed_extra: a.speed_extra,
            level: a.level,
            xp: a.xp,
            gold: a.gold,
            attacked_at: a.attacked_at,
            defended_at: a.defended_at,
            regenerated_at: a.regenerated_at,
            messaged_at: a.messaged_at,
            elo: a.elo,
            wins: a.wins,
            losses: a.losses,
            placement_duels: a.placement_duels,
        }
    }
}

impl ActorRow {
    /// Rebuilds an actor, resolving item ids against the catalog.
    /// Ids missing from the catalog are dropped with a warning.
    pub fn into_actor(
        self,
        items: impl IntoIterator<Item = ItemRow>,
        equipment: impl IntoIterator<Item = EquipmentRow>,
        catalog: &ItemCatalog,
    ) -> Actor {
        let key = ActorKey::new(self.guild_id as u64, self.member_id as u64);
        let mut item_stacks = BTreeMap::new();
        for row in items {
            match catalog.get_item(&row.item_id) {
                Some(item) if row.quantity > 0 => {
                    item_stacks.insert(
                        row.item_id,
                        ItemStack {
                            item: item.clone(),
                            quantity: row.quantity.unsigned_abs(),
                        },
                    );
                }
                Some(_) => {}
                None => {
                    warn!(target: "database", guild_id = key.guild_id, member_id = key.member_id, item_id = %row.item_id, "dropping unknown item stack");
                }
            }
        }
        let mut items_equipped = BTreeMap::new();
        for row in equipment {
            match catalog.get_item(&row.item_id) {
                Some(item) => {
                    items_equipped.insert(row.item_id, item.clone());
                }
                None => {
                    warn!(target: "database", guild_id = key.guild_id, member_id = key.member_id, item_id = %row.item_id, "dropping unknown equipped item");
                }
            }
        }
        let mut actor = Actor {
            key,
            name: self.name,
            display_name: self.display_name,
            is_member: self.is_member,
            health: self.health,
            health_max_base: self.health_max_base,
            health_max_extra: self.health_max_extra,
            energy: self.energy,
            energy_max_base: self.energy_max_base,
            energy_max_extra: self.energy_max_extra,
            attack_base: self.attack_base,
            attack_extra: self.attack_extra,
            defense_base: self.defense_base,
            defense_extra: self.defense_extra,
            speed_base: self.speed_base,
            speed_extra: self.speed_extra,
            level: self.level,
            xp: self.xp,
            gold: self.gold,
            attacked_at: self.attacked_at,
            defended_at: self.defended_at,
            regenerated_at: self.regenerated_at,
            messaged_at: self.messaged_at,
            elo: self.elo,
            wins: self.wins,
            losses: self.losses,
            placement_duels: self.placement_duels,
            item_stacks,
            items_equipped,
        };
        // Stored extras may predate a catalog change; the equipped items are authoritative.
        actor.recompute_item_extras();
        actor
    }
}
