//! Postgres-backed actor store. Item references are stored as ids and resolved
//! against the item catalog on load.

use super::ActorStore;
use super::init::DbPool;
use super::models::{ActorRow, EquipmentRow, ItemRow};
use crate::arena::leaderboard::LeaderboardType;
use crate::arena::{Actor, ActorKey, ItemCatalog};
use crate::error::StoreError;
use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

const ACTOR_COLUMNS: &str = "guild_id, member_id, name, display_name, is_member, \
    health, health_max_base, health_max_extra, energy, energy_max_base, energy_max_extra, \
    attack_base, attack_extra, defense_base, defense_extra, speed_base, speed_extra, \
    level, xp, gold, attacked_at, defended_at, regenerated_at, messaged_at, \
    elo, wins, losses, placement_duels";

// Item and equipment rows grouped by member id.
type ItemRowsByMember = (HashMap<i64, Vec<ItemRow>>, HashMap<i64, Vec<EquipmentRow>>);

pub struct PgStore {
    pool: DbPool,
    catalog: Arc<ItemCatalog>,
}

impl PgStore {
    pub fn new(pool: DbPool, catalog: Arc<ItemCatalog>) -> Self {
        Self { pool, catalog }
    }

    async fn write_actor(
        tx: &mut Transaction<'_, Postgres>,
        actor: &Actor,
    ) -> Result<(), sqlx::Error> {
        let row = ActorRow::from(actor);
        sqlx::query(
            r#"
            INSERT INTO actors (guild_id, member_id, name, display_name, is_member,
                health, health_max_base, health_max_extra, energy, energy_max_base, energy_max_extra,
                attack_base, attack_extra, defense_base, defense_extra, speed_base, speed_extra,
                level, xp, gold, attacked_at, defended_at, regenerated_at, messaged_at,
                elo, wins, losses, placement_duels)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28)
            ON CONFLICT (guild_id, member_id) DO UPDATE SET
                name = EXCLUDED.name,
                display_name = EXCLUDED.display_name,
                is_member = EXCLUDED.is_member,
                health = EXCLUDED.health,
                health_max_base = EXCLUDED.health_max_base,
                health_max_extra = EXCLUDED.health_max_extra,
                energy = EXCLUDED.energy,
                energy_max_base = EXCLUDED.energy_max_base,
                energy_max_extra = EXCLUDED.energy_max_extra,
                attack_base = EXCLUDED.attack_base,
                attack_extra = EXCLUDED.attack_extra,
                defense_base = EXCLUDED.defense_base,
                defense_extra = EXCLUDED.defense_extra,
                speed_base = EXCLUDED.speed_base,
                speed_extra = EXCLUDED.speed_extra,
                level = EXCLUDED.level,
                xp = EXCLUDED.xp,
                gold = EXCLUDED.gold,
                attacked_at = EXCLUDED.attacked_at,
                defended_at = EXCLUDED.defended_at,
                regenerated_at = EXCLUDED.regenerated_at,
                messaged_at = EXCLUDED.messaged_at,
                elo = EXCLUDED.elo,
                wins = EXCLUDED.wins,
                losses = EXCLUDED.losses,
                placement_duels = EXCLUDED.placement_duels
            "#,
        )
        .bind(row.guild_id)
        .bind(row.member_id)
        .bind(row.name)
        .bind(row.display_name)
        .bind(row.is_member)
        .bind(row.health)
        .bind(row.health_max_base)
        .bind(row.health_max_extra)
        .bind(row.energy)
        .bind(row.energy_max_base)
        .bind(row.energy_max_extra)
        .bind(row.attack_base)
        .bind(row.attack_extra)
        .bind(row.defense_base)
        .bind(row.defense_extra)
        .bind(row.speed_base)
        .bind(row.speed_extra)
        .bind(row.level)
        .bind(row.xp)
        .bind(row.gold)
        .bind(row.attacked_at)
        .bind(row.defended_at)
        .bind(row.regenerated_at)
        .bind(row.messaged_at)
        .bind(row.elo)
        .bind(row.wins)
        .bind(row.losses)
        .bind(row.placement_duels)
        .execute(&mut **tx)
        .await?;

        // Item collections are small; rewrite them wholesale.
        sqlx::query("DELETE FROM actor_items WHERE guild_id = $1 AND member_id = $2")
            .bind(row.guild_id)
            .bind(row.member_id)
            .execute(&mut **tx)
            .await?;
        for (item_id, stack) in &actor.item_stacks {
            let quantity = i32::try_from(stack.quantity)
                .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
            sqlx::query(
                "INSERT INTO actor_items (guild_id, member_id, item_id, quantity) VALUES ($1, $2, $3, $4)",
            )
            .bind(row.guild_id)
            .bind(row.member_id)
            .bind(item_id.as_str())
            .bind(quantity)
            .execute(&mut **tx)
            .await?;
        }
        sqlx::query("DELETE FROM actor_equipment WHERE guild_id = $1 AND member_id = $2")
            .bind(row.guild_id)
            .bind(row.member_id)
            .execute(&mut **tx)
            .await?;
        for item_id in actor.items_equipped.keys() {
            sqlx::query(
                "INSERT INTO actor_equipment (guild_id, member_id, item_id) VALUES ($1, $2, $3)",
            )
            .bind(row.guild_id)
            .bind(row.member_id)
            .bind(item_id.as_str())
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    /// Loads the item rows for a set of members of one guild, grouped by member.
    async fn item_rows(
        &self,
        guild_id: i64,
        member_ids: &[i64],
    ) -> Result<ItemRowsByMember, sqlx::Error> {
        let items = sqlx::query_as::<_, ItemRow>(
            "SELECT member_id, item_id, quantity FROM actor_items WHERE guild_id = $1 AND member_id = ANY($2)",
        )
        .bind(guild_id)
        .bind(member_ids)
        .fetch_all(&self.pool)
        .await?;
        let equipment = sqlx::query_as::<_, EquipmentRow>(
            "SELECT member_id, item_id FROM actor_equipment WHERE guild_id = $1 AND member_id = ANY($2)",
        )
        .bind(guild_id)
        .bind(member_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut items_by_member: HashMap<i64, Vec<ItemRow>> = HashMap::new();
        for row in items {
            items_by_member.entry(row.member_id).or_default().push(row);
        }
        let mut equipment_by_member: HashMap<i64, Vec<EquipmentRow>> = HashMap::new();
        for row in equipment {
            equipment_by_member
                .entry(row.member_id)
                .or_default()
                .push(row);
        }
        Ok((items_by_member, equipment_by_member))
    }

    fn assemble(
        &self,
        rows: Vec<ActorRow>,
        mut items: HashMap<i64, Vec<ItemRow>>,
        mut equipment: HashMap<i64, Vec<EquipmentRow>>,
    ) -> Vec<Actor> {
        rows.into_iter()
            .map(|row| {
                let member_id = row.member_id;
                row.into_actor(
                    items.remove(&member_id).unwrap_or_default(),
                    equipment.remove(&member_id).unwrap_or_default(),
                    &self.catalog,
                )
            })
            .collect()
    }
}

#[async_trait]
impl ActorStore for PgStore {
    #[instrument(level = "debug", skip(self), fields(guild_id = key.guild_id, member_id = key.member_id))]
    async fn load(&self, key: ActorKey) -> Result<Option<Actor>, StoreError> {
        let guild_id = key.guild_id as i64;
        let member_id = key.member_id as i64;
        let row = sqlx::query_as::<_, ActorRow>(&format!(
            "SELECT {ACTOR_COLUMNS} FROM actors WHERE guild_id = $1 AND member_id = $2"
        ))
        .bind(guild_id)
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let (items, equipment) = self.item_rows(guild_id, &[member_id]).await?;
        Ok(self.assemble(vec![row], items, equipment).pop())
    }

    async fn save(&self, actor: &Actor) -> Result<(), StoreError> {
        self.save_all(&[actor]).await
    }

    #[instrument(level = "debug", skip_all, fields(count = actors.len()))]
    async fn save_all(&self, actors: &[&Actor]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        for actor in actors {
            if let Err(e) = Self::write_actor(&mut tx, actor).await {
                tx.rollback().await.ok();
                return Err(e.into());
            }
        }
        tx.commit().await?;
        Ok(())
    }

    async fn top(
        &self,
        guild_id: u64,
        kind: LeaderboardType,
        limit: i64,
    ) -> Result<Vec<Actor>, StoreError> {
        let order = match kind {
            LeaderboardType::Elo => "elo DESC, member_id ASC",
            LeaderboardType::Level => "level DESC, xp DESC, member_id ASC",
            LeaderboardType::Gold => "gold DESC, member_id ASC",
        };
        let guild_id = guild_id as i64;
        let rows = sqlx::query_as::<_, ActorRow>(&format!(
            "SELECT {ACTOR_COLUMNS} FROM actors WHERE guild_id = $1 AND is_member ORDER BY {order} LIMIT $2"
        ))
        .bind(guild_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        let member_ids: Vec<i64> = rows.iter().map(|r| r.member_id).collect();
        let (items, equipment) = self.item_rows(guild_id, &member_ids).await?;
        Ok(self.assemble(rows, items, equipment))
    }
}
