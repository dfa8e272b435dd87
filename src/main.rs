use anyhow::Context as _;
use guildmaster_bot::arena::{ItemCatalog, RankCatalog};
use guildmaster_bot::clock::SystemClock;
use guildmaster_bot::config::Config;
use guildmaster_bot::database::{self, ActorStore, MemoryStore, PgStore};
use guildmaster_bot::handler::Handler;
use guildmaster_bot::moderation::ProfanityFilter;
use guildmaster_bot::services::ArenaService;
use guildmaster_bot::AppState;
use serenity::model::gateway::GatewayIntents;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

struct Catalogs {
    items: ItemCatalog,
    ranks: RankCatalog,
    profanity: ProfanityFilter,
}

fn load_catalogs(config: &Config) -> anyhow::Result<Catalogs> {
    let Some(dir) = &config.data_dir else {
        return Ok(Catalogs {
            items: ItemCatalog::builtin().context("builtin item catalog")?,
            ranks: RankCatalog::builtin().context("builtin rank table")?,
            profanity: ProfanityFilter::builtin(),
        });
    };
    Ok(Catalogs {
        items: ItemCatalog::load(&dir.join("items.json"))?,
        ranks: RankCatalog::load(&dir.join("ranks.json"))?,
        profanity: ProfanityFilter::load(&dir.join("profanity.txt"))?,
    })
}

async fn connect_store(
    config: &Config,
    items: Arc<ItemCatalog>,
) -> anyhow::Result<Arc<dyn ActorStore>> {
    let Some(url) = &config.database_url else {
        warn!(target: "startup", "DATABASE_URL not set; progress is kept in memory only");
        return Ok(Arc::new(MemoryStore::new()));
    };
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(url)
        .await
        .context("failed to connect to the database")?;
    database::init::migrate(&pool)
        .await
        .context("failed to prepare the database schema")?;
    Ok(Arc::new(PgStore::new(pool, items)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_target(true)
        .init();

    let catalogs = load_catalogs(&config)?;
    info!(
        target: "startup",
        items = catalogs.items.len(),
        ranks = catalogs.ranks.len(),
        filtered_words = catalogs.profanity.len(),
        "catalogs loaded"
    );
    let items = Arc::new(catalogs.items);
    let ranks = Arc::new(catalogs.ranks);

    let store = connect_store(&config, items.clone()).await?;
    let arena = Arc::new(ArenaService::new(
        store,
        items,
        ranks,
        Arc::new(SystemClock),
    ));
    let app_state = Arc::new(AppState::new(
        arena,
        config.prefix.clone(),
        catalogs.profanity,
    ));

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler {
            allowed_guild_id: GuildId::new(config.guild_id),
        })
        .await
        .context("error creating the Discord client")?;

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    client.start().await.context("client error")?;
    Ok(())
}
