use chrono::{Duration, TimeZone, Utc};
use guildmaster_bot::arena::leaderboard::LeaderboardType;
use guildmaster_bot::arena::{ActorKey, ItemCatalog, RankCatalog};
use guildmaster_bot::clock::ManualClock;
use guildmaster_bot::constants::{MESSAGE_XP_MAX, MESSAGE_XP_MIN};
use guildmaster_bot::database::{ActorStore, MemoryStore};
use guildmaster_bot::error::ArenaError;
use guildmaster_bot::services::{ArenaService, MemberProfile};
use std::sync::Arc;

const GUILD: u64 = 42;

struct Harness {
    service: Arc<ArenaService>,
    store: Arc<MemoryStore>,
    clock: Arc<ManualClock>,
}

fn harness() -> Harness {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 5, 4, 9, 0, 0).unwrap(),
    ));
    let service = Arc::new(ArenaService::new(
        store.clone(),
        Arc::new(ItemCatalog::builtin().unwrap()),
        Arc::new(RankCatalog::builtin().unwrap()),
        clock.clone(),
    ));
    Harness {
        service,
        store,
        clock,
    }
}

fn member(id: u64) -> MemberProfile {
    MemberProfile::new(GUILD, id, format!("user{id}"), format!("User {id}"))
}

#[tokio::test]
async fn profile_creates_and_persists_an_actor() {
    let h = harness();
    assert!(h.store.is_empty().await);
    let actor = h.service.profile(&member(1)).await.unwrap();
    assert_eq!(actor.display_name, "User 1");
    assert_eq!(h.store.len().await, 1);

    let renamed = MemberProfile::new(GUILD, 1, "user1", "Sir One");
    let actor = h.service.profile(&renamed).await.unwrap();
    assert_eq!(actor.display_name, "Sir One");
    assert_eq!(h.store.len().await, 1);
}

#[tokio::test]
async fn attack_is_saved_and_then_on_cooldown() {
    let h = harness();
    let (a, d) = (member(1), member(2));

    let report = h.service.attack(&a, &d).await.unwrap();
    assert_eq!(report.outcome.effective_damage, 5);
    let stored = h.store.load(d.key).await.unwrap().unwrap();
    assert_eq!(stored.health, 95);
    let stored = h.store.load(a.key).await.unwrap().unwrap();
    assert_eq!(stored.energy, 9);

    let err = h.service.attack(&a, &d).await.unwrap_err();
    assert!(matches!(err.rule(), Some(ArenaError::OnCooldown { .. })));
    // The rejected attack did not spend energy.
    let stored = h.store.load(a.key).await.unwrap().unwrap();
    assert_eq!(stored.energy, 9);

    h.clock.advance(Duration::seconds(28));
    h.service.attack(&a, &d).await.unwrap();
    let stored = h.store.load(d.key).await.unwrap().unwrap();
    assert_eq!(stored.health, 90);
}

#[tokio::test]
async fn self_attack_is_rejected() {
    let h = harness();
    let err = h.service.attack(&member(1), &member(1)).await.unwrap_err();
    assert_eq!(err.rule(), Some(&ArenaError::SelfTarget));
    assert!(h.store.is_empty().await);
}

/// Gives the member an iron sword (13 damage per hit against a fresh actor).
async fn arm(h: &Harness, m: &MemberProfile) {
    h.service.grant_xp(m, 1_600).await.unwrap();
    h.service.buy(m, "iron_sword", 1).await.unwrap();
    h.service.equip(m, "iron_sword").await.unwrap();
}

#[tokio::test]
async fn repeated_attacks_finish_a_duel() {
    let h = harness();
    let (a, d) = (member(1), member(2));
    arm(&h, &a).await;

    let mut fatal = None;
    for _ in 0..10 {
        let report = h.service.attack(&a, &d).await.unwrap();
        h.clock.advance(Duration::seconds(30));
        if report.outcome.is_fatal() {
            fatal = Some(report);
            break;
        }
    }
    let report = fatal.expect("eight hits of thirteen damage defeat a fresh actor");
    assert!(report.outcome.attacker_is_winner());
    assert_eq!(report.attacker.wins, 1);
    assert_eq!(report.defender.losses, 1);
    // Level 3 beats level 0: 40 base gold scaled by 1 - 3/15.
    assert_eq!(report.outcome.duel.as_ref().unwrap().gold_reward, 32);
    assert_eq!(report.attacker.gold, 300 + 32);

    let stored = h.store.load(d.key).await.unwrap().unwrap();
    assert_eq!(stored.elo, 1484);
    assert!(stored.is_defeated());

    let err = h.service.attack(&a, &d).await.unwrap_err();
    assert_eq!(err.rule(), Some(&ArenaError::DefenderDefeated));
}

#[tokio::test]
async fn defeated_actors_recover_over_time() {
    let h = harness();
    let (a, d) = (member(1), member(2));
    arm(&h, &a).await;
    for _ in 0..10 {
        let report = h.service.attack(&a, &d).await.unwrap();
        h.clock.advance(Duration::seconds(30));
        if report.outcome.is_fatal() {
            break;
        }
    }
    assert!(h.store.load(d.key).await.unwrap().unwrap().is_defeated());

    h.clock.advance(Duration::minutes(10));
    let actor = h.service.profile(&d).await.unwrap();
    assert!(!actor.is_defeated());
    assert_eq!(actor.health, 20);
}

#[tokio::test]
async fn shop_flow_through_the_service() {
    let h = harness();
    let m = member(1);
    let (level_up, actor) = h.service.grant_xp(&m, 600).await.unwrap();
    assert_eq!(level_up.new_level, 2);
    assert_eq!(actor.gold, 500);

    let (receipt, actor) = h.service.buy(&m, "Wooden Sword", 1).await.unwrap();
    assert_eq!(receipt.item_id, "wooden_sword");
    assert_eq!(actor.gold, 350);

    let (_, actor) = h.service.equip(&m, "wooden_sword").await.unwrap();
    assert_eq!(actor.attack(), 13);
    let (_, actor) = h.service.unequip(&m, "wooden sword").await.unwrap();
    assert_eq!(actor.attack(), 10);

    let (_, _) = h.service.buy(&m, "health_potion", 2).await.unwrap();
    let (item, left, _) = h.service.consume(&m, "health potion").await.unwrap();
    assert_eq!(item.id, "health_potion");
    assert_eq!(left, 1);

    let err = h.service.buy(&m, "dragon egg", 1).await.unwrap_err();
    assert_eq!(
        err.rule(),
        Some(&ArenaError::UnknownItem("dragon egg".into()))
    );

    let stored = h.store.load(m.key).await.unwrap().unwrap();
    assert_eq!(stored.gold, 250);
    assert_eq!(stored.item_quantity("health_potion"), 1);
}

#[tokio::test]
async fn gift_moves_items_between_members() {
    let h = harness();
    let (giver, receiver) = (member(1), member(2));
    h.service.grant_xp(&giver, 600).await.unwrap();
    h.service.buy(&giver, "energy_drink", 3).await.unwrap();

    let item = h
        .service
        .gift(&giver, &receiver, "Energy Drink", 2)
        .await
        .unwrap();
    assert_eq!(item.id, "energy_drink");
    let from = h.store.load(giver.key).await.unwrap().unwrap();
    let to = h.store.load(receiver.key).await.unwrap().unwrap();
    assert_eq!(from.item_quantity("energy_drink"), 1);
    assert_eq!(to.item_quantity("energy_drink"), 2);

    let err = h
        .service
        .gift(&giver, &giver, "energy_drink", 1)
        .await
        .unwrap_err();
    assert_eq!(err.rule(), Some(&ArenaError::SelfTarget));
}

#[tokio::test]
async fn message_xp_respects_its_cooldown() {
    let h = harness();
    let m = member(1);

    let first = h.service.award_message_xp(&m).await.unwrap().unwrap();
    assert!((MESSAGE_XP_MIN..=MESSAGE_XP_MAX).contains(&first.xp_gained));

    h.clock.advance(Duration::seconds(30));
    assert!(h.service.award_message_xp(&m).await.unwrap().is_none());

    h.clock.advance(Duration::seconds(31));
    let second = h.service.award_message_xp(&m).await.unwrap().unwrap();
    let stored = h.store.load(m.key).await.unwrap().unwrap();
    assert_eq!(stored.xp, first.xp_gained + second.xp_gained);
}

#[tokio::test]
async fn leaderboards_order_members_and_hide_departed_ones() {
    let h = harness();
    for (id, xp) in [(1, 50), (2, 2_000), (3, 700)] {
        h.service.grant_xp(&member(id), xp).await.unwrap();
    }
    // Another guild never shows up.
    h.service
        .grant_xp(&MemberProfile::new(7, 9, "x", "X"), 10_000)
        .await
        .unwrap();

    let board = h
        .service
        .leaderboard(GUILD, LeaderboardType::Level, 10)
        .await
        .unwrap();
    let ids: Vec<u64> = board.iter().map(|a| a.key.member_id).collect();
    assert_eq!(ids, vec![2, 3, 1]);

    let board = h
        .service
        .leaderboard(GUILD, LeaderboardType::Gold, 2)
        .await
        .unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].key.member_id, 2);

    h.service
        .mark_departed(ActorKey::new(GUILD, 2))
        .await
        .unwrap();
    let board = h
        .service
        .leaderboard(GUILD, LeaderboardType::Level, 10)
        .await
        .unwrap();
    let ids: Vec<u64> = board.iter().map(|a| a.key.member_id).collect();
    assert_eq!(ids, vec![3, 1]);

    // Coming back restores membership.
    h.service.profile(&member(2)).await.unwrap();
    let board = h
        .service
        .leaderboard(GUILD, LeaderboardType::Level, 10)
        .await
        .unwrap();
    assert_eq!(board.len(), 3);
}

#[tokio::test]
async fn concurrent_purchases_are_not_lost() {
    let h = harness();
    let m = member(1);
    h.service.grant_xp(&m, 600).await.unwrap();

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let service = h.service.clone();
        let m = m.clone();
        tasks.push(tokio::spawn(async move {
            service.buy(&m, "health_potion", 1).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let stored = h.store.load(m.key).await.unwrap().unwrap();
    assert_eq!(stored.item_quantity("health_potion"), 10);
    assert_eq!(stored.gold, 0);
}
