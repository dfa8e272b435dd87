use chrono::{DateTime, Duration, TimeZone, Utc};
use guildmaster_bot::arena::leveling::grant_xp;
use guildmaster_bot::arena::{Actor, ActorKey, ItemCatalog, RankCatalog};
use guildmaster_bot::constants::*;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

fn actor() -> Actor {
    Actor::new(ActorKey::new(1, 10), "hero", "Hero", start())
}

#[test]
fn new_actor_defaults() {
    let a = actor();
    assert_eq!(a.health, ACTOR_HEALTH_BASE);
    assert_eq!(a.max_health(), ACTOR_HEALTH_BASE);
    assert_eq!(a.energy, ACTOR_ENERGY_BASE);
    assert_eq!(a.elo, ELO_DEFAULT);
    assert_eq!(a.level, 0);
    assert!(a.is_member);
    assert!(a.item_stacks.is_empty());
}

#[test]
fn try_level_up_is_idempotent() {
    let mut a = actor();
    a.xp = 1000;
    assert!(a.try_level_up());
    let level = a.level;
    assert_eq!(level, 2);
    assert!(!a.try_level_up());
    assert!(!a.try_level_up());
    assert_eq!(a.level, level);
}

#[test]
fn grant_xp_pays_every_crossed_level() {
    let mut a = actor();
    let result = grant_xp(&mut a, 600);
    assert_eq!(result.old_level, 0);
    assert_eq!(result.new_level, 2);
    assert_eq!(result.gold_awarded, 200 + 300);
    assert_eq!(a.gold, 500);

    let again = grant_xp(&mut a, 1);
    assert!(!again.did_level_up());
    assert_eq!(again.gold_awarded, 0);
    assert_eq!(a.gold, 500);
}

#[test]
fn placement_gates_rank() {
    let ranks = RankCatalog::builtin().unwrap();
    let mut a = actor();
    a.wins = 5;
    a.losses = 4;
    assert!(a.rank(&ranks).is_none());
    a.losses = 5;
    let rank = a.rank(&ranks).expect("ranked after ten duels");
    assert_eq!(rank.name, "Platinum");
}

#[test]
fn negative_elo_falls_to_floor_rank() {
    let ranks = RankCatalog::builtin().unwrap();
    let mut a = actor();
    a.wins = 10;
    a.elo = -30;
    assert_eq!(a.rank_index(&ranks), Some(0));
}

#[test]
fn record_duel_between_equals() {
    let mut a = actor();
    assert!((a.expected_score(1500) - 0.5).abs() < 1e-9);
    assert_eq!(a.record_duel(1500, true), 16);
    assert_eq!(a.elo, 1516);
    assert_eq!(a.wins, 1);
    assert_eq!(a.placement_duels, 1);
    assert_eq!(a.record_duel(1500, false), -17);
    assert_eq!(a.losses, 1);
}

#[test]
fn placement_counter_caps() {
    let mut a = actor();
    for _ in 0..14 {
        a.record_duel(1500, true);
    }
    assert_eq!(a.placement_duels, PLACEMENT_DUELS_MAX);
    assert_eq!(a.duels(), 14);
}

#[test]
fn cooldown_shrinks_with_speed_but_not_below_minimum() {
    let mut a = actor();
    assert_eq!(a.attack_cooldown(), Duration::milliseconds(27_500));
    a.speed_extra = 100;
    assert_eq!(
        a.attack_cooldown(),
        Duration::milliseconds(ATTACK_COOLDOWN_MIN_MS)
    );

    a.speed_extra = 0;
    a.attacked_at = Some(start());
    assert!(!a.can_attack(start() + Duration::seconds(10)));
    assert_eq!(
        a.attack_cooldown_remaining(start() + Duration::seconds(10)),
        Duration::milliseconds(17_500)
    );
    assert!(a.can_attack(start() + Duration::seconds(28)));
}

#[test]
fn item_stats_keep_vitals_in_range() {
    let items = ItemCatalog::builtin().unwrap();
    let mut a = actor();
    let elixir = items.get_item("elixir").unwrap();
    let plate = items.get_item("plate_armor").unwrap();
    let charm = items.get_item("stamina_charm").unwrap();

    for (item, scale) in [
        (elixir, 1),
        (plate, 1),
        (elixir, 3),
        (charm, 1),
        (plate, -1),
        (elixir, -5),
        (charm, -1),
        (elixir, 2),
    ] {
        a.add_item_stats(item, scale);
        assert!(a.health >= 0 && a.health <= a.max_health());
        assert!(a.energy >= 0 && a.energy <= a.max_energy());
    }
    assert_eq!(a.health_max_extra, 0);
    assert_eq!(a.energy_max_extra, 0);
}

#[test]
fn regeneration_counts_whole_intervals_only() {
    let mut a = actor();
    a.health = 50;
    a.energy = 2;

    assert!(!a.regenerate(start() + Duration::seconds(REGEN_INTERVAL_SECS - 1)));
    assert_eq!(a.health, 50);

    let later = start() + Duration::seconds(2 * REGEN_INTERVAL_SECS + 100);
    assert!(a.regenerate(later));
    assert_eq!(a.health, 50 + 2 * HEALTH_REGEN_PER_TICK);
    assert_eq!(a.energy, 2 + 2 * ENERGY_REGEN_PER_TICK);
    // The unfinished interval carries over.
    assert_eq!(
        a.regenerated_at,
        start() + Duration::seconds(2 * REGEN_INTERVAL_SECS)
    );

    assert!(a.regenerate(start() + Duration::days(2)));
    assert_eq!(a.health, a.max_health());
    assert_eq!(a.energy, a.max_energy());
}
