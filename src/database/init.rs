//! Connection pool type and schema bootstrap for the Postgres store.

use sqlx::{Pool, Postgres};
use tracing::info;

/// A type alias for the database connection pool (`Pool<Postgres>`).
pub type DbPool = Pool<Postgres>;

const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS actors (
        guild_id BIGINT NOT NULL,
        member_id BIGINT NOT NULL,
        name TEXT NOT NULL,
        display_name TEXT NOT NULL,
        is_member BOOLEAN NOT NULL DEFAULT TRUE,
        health BIGINT NOT NULL,
        health_max_base BIGINT NOT NULL,
        health_max_extra BIGINT NOT NULL DEFAULT 0,
        energy BIGINT NOT NULL,
        energy_max_base BIGINT NOT NULL,
        energy_max_extra BIGINT NOT NULL DEFAULT 0,
        attack_base BIGINT NOT NULL,
        attack_extra BIGINT NOT NULL DEFAULT 0,
        defense_base BIGINT NOT NULL,
        defense_extra BIGINT NOT NULL DEFAULT 0,
        speed_base BIGINT NOT NULL,
        speed_extra BIGINT NOT NULL DEFAULT 0,
        level INTEGER NOT NULL DEFAULT 0,
        xp BIGINT NOT NULL DEFAULT 0,
        gold BIGINT NOT NULL DEFAULT 0,
        attacked_at TIMESTAMPTZ,
        defended_at TIMESTAMPTZ,
        regenerated_at TIMESTAMPTZ NOT NULL,
        messaged_at TIMESTAMPTZ,
        elo INTEGER NOT NULL,
        wins INTEGER NOT NULL DEFAULT 0,
        losses INTEGER NOT NULL DEFAULT 0,
        placement_duels INTEGER NOT NULL DEFAULT 0,
        PRIMARY KEY (guild_id, member_id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS actor_items (
        guild_id BIGINT NOT NULL,
        member_id BIGINT NOT NULL,
        item_id TEXT NOT NULL,
        quantity INTEGER NOT NULL CHECK (quantity > 0),
        PRIMARY KEY (guild_id, member_id, item_id),
        FOREIGN KEY (guild_id, member_id) REFERENCES actors (guild_id, member_id) ON DELETE CASCADE
    )"#,
    r#"CREATE TABLE IF NOT EXISTS actor_equipment (
        guild_id BIGINT NOT NULL,
        member_id BIGINT NOT NULL,
        item_id TEXT NOT NULL,
        PRIMARY KEY (guild_id, member_id, item_id),
        FOREIGN KEY (guild_id, member_id) REFERENCES actors (guild_id, member_id) ON DELETE CASCADE
    )"#,
];

/// Creates the tables if they do not exist yet.
pub async fn migrate(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!(target: "database", tables = SCHEMA.len(), "schema ready");
    Ok(())
}
