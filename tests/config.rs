use guildmaster_bot::config::{Config, ConfigError, DEFAULT_LOG_FILTER, DEFAULT_PREFIX};
use std::collections::HashMap;
use std::path::PathBuf;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn minimal_config_uses_defaults() {
    let config =
        Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc"), ("SERVER_ID", "1234")])).unwrap();
    assert_eq!(config.discord_token, "abc");
    assert_eq!(config.guild_id, 1234);
    assert_eq!(config.database_url, None);
    assert_eq!(config.prefix, DEFAULT_PREFIX);
    assert_eq!(config.data_dir, None);
    assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn optional_values_are_read() {
    let config = Config::from_lookup(lookup(&[
        ("DISCORD_TOKEN", "abc"),
        ("SERVER_ID", " 99 "),
        ("DATABASE_URL", "postgres://localhost/arena"),
        ("COMMAND_PREFIX", "$"),
        ("DATA_DIR", "/srv/arena"),
        ("RUST_LOG", "warn"),
    ]))
    .unwrap();
    assert_eq!(config.guild_id, 99);
    assert_eq!(
        config.database_url.as_deref(),
        Some("postgres://localhost/arena")
    );
    assert_eq!(config.prefix, "$");
    assert_eq!(config.data_dir, Some(PathBuf::from("/srv/arena")));
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn log_filter_wins_over_rust_log() {
    let config = Config::from_lookup(lookup(&[
        ("DISCORD_TOKEN", "abc"),
        ("SERVER_ID", "5"),
        ("LOG_FILTER", "debug"),
        ("RUST_LOG", "warn"),
    ]))
    .unwrap();
    assert_eq!(config.log_filter, "debug");
}

#[test]
fn missing_and_invalid_values_are_reported() {
    assert_eq!(
        Config::from_lookup(lookup(&[("SERVER_ID", "5")])),
        Err(ConfigError::Missing("DISCORD_TOKEN"))
    );
    assert_eq!(
        Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc"), ("SERVER_ID", "")])),
        Err(ConfigError::Missing("SERVER_ID"))
    );
    assert_eq!(
        Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc"), ("SERVER_ID", "guild")])),
        Err(ConfigError::Invalid {
            key: "SERVER_ID",
            value: "guild".into()
        })
    );
    assert_eq!(
        Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc"), ("SERVER_ID", "0")])),
        Err(ConfigError::Invalid {
            key: "SERVER_ID",
            value: "0".into()
        })
    );
}
