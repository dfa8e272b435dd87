use chrono::{DateTime, TimeZone, Utc};
use guildmaster_bot::arena::combat::logic::{gold_penalty, gold_reward, reward_modifier};
use guildmaster_bot::arena::combat::{Attack, HitKind, RankChange, Side};
use guildmaster_bot::arena::{Actor, ActorKey, RankCatalog};
use guildmaster_bot::constants::GOLD_PENALTY_MAX;
use guildmaster_bot::error::ArenaError;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap()
}

fn fighter(member_id: u64, attack: i64, defense: i64, health: i64, level: i32) -> Actor {
    let mut a = Actor::new(ActorKey::new(7, member_id), "f", "Fighter", now());
    a.attack_base = attack;
    a.defense_base = defense;
    a.health = health;
    a.energy = 5;
    a.level = level;
    a
}

#[test]
fn lethal_hit_pays_the_winner() {
    let ranks = RankCatalog::builtin().unwrap();
    let mut attacker = fighter(1, 10, 5, 20, 5);
    let mut defender = fighter(2, 1, 1, 3, 1);

    let outcome = Attack::new(&mut attacker, &mut defender)
        .perform(&ranks, now())
        .unwrap();

    assert_eq!(outcome.kind, HitKind::Hit);
    assert_eq!(outcome.effective_damage, 9);
    assert_eq!(defender.health, 0);
    assert!(outcome.is_fatal());
    assert!(outcome.attacker_is_winner());

    let duel = outcome.duel.as_ref().unwrap();
    assert_eq!(duel.level_difference, 4);
    assert!((duel.reward_modifier - (1.0 - 4.0 / 15.0)).abs() < 1e-9);
    assert_eq!(duel.gold_reward, 35);
    assert_eq!(duel.gold_penalty, 0);
    assert_eq!(attacker.gold, 35);
    assert_eq!(defender.gold, 0);

    assert_eq!(duel.winner_elo_change, 16);
    assert_eq!(duel.loser_elo_change, -16);
    assert_eq!((attacker.elo, defender.elo), (1516, 1484));
    assert_eq!((attacker.wins, attacker.losses), (1, 0));
    assert_eq!((defender.wins, defender.losses), (0, 1));

    assert_eq!(attacker.energy, 4);
    assert_eq!(attacker.attacked_at, Some(now()));
    assert_eq!(defender.defended_at, Some(now()));
}

#[test]
fn block_changes_nothing_but_energy() {
    let ranks = RankCatalog::builtin().unwrap();
    let mut attacker = fighter(1, 6, 5, 50, 0);
    let mut defender = fighter(2, 6, 6, 50, 0);
    attacker.gold = 100;
    defender.gold = 100;

    let outcome = Attack::new(&mut attacker, &mut defender)
        .perform(&ranks, now())
        .unwrap();

    assert_eq!(outcome.kind, HitKind::Block);
    assert!(!outcome.is_fatal());
    assert_eq!((outcome.effective_damage, outcome.recoil_damage), (0, 0));
    assert_eq!((attacker.health, defender.health), (50, 50));
    assert_eq!((attacker.gold, defender.gold), (100, 100));
    assert_eq!((attacker.elo, defender.elo), (1500, 1500));
    assert_eq!(attacker.duels() + defender.duels(), 0);
}

#[test]
fn recoil_can_defeat_the_attacker() {
    let ranks = RankCatalog::builtin().unwrap();
    let mut attacker = fighter(1, 2, 5, 3, 2);
    let mut defender = fighter(2, 4, 5, 40, 2);
    attacker.gold = 1000;

    let outcome = Attack::new(&mut attacker, &mut defender)
        .perform(&ranks, now())
        .unwrap();

    assert_eq!(outcome.kind, HitKind::Recoil);
    assert_eq!(outcome.recoil_damage, 3);
    assert_eq!(attacker.health, 0);
    assert_eq!(defender.health, 40);
    assert!(outcome.defender_is_winner());
    assert_eq!(outcome.winner(), Some(Side::Defender));

    let duel = outcome.duel.unwrap();
    // Equal levels: modifier 1.0, 2.5% of 1000 gold.
    assert_eq!(duel.gold_penalty, 25);
    assert_eq!(attacker.gold, 975);
    assert_eq!(defender.gold, duel.gold_reward);
    assert_eq!(defender.wins, 1);
    assert_eq!(attacker.losses, 1);
}

#[test]
fn non_lethal_recoil_is_not_a_duel() {
    let ranks = RankCatalog::builtin().unwrap();
    let mut attacker = fighter(1, 2, 5, 30, 0);
    let mut defender = fighter(2, 4, 5, 40, 0);
    let outcome = Attack::new(&mut attacker, &mut defender)
        .perform(&ranks, now())
        .unwrap();
    assert_eq!(attacker.health, 27);
    assert!(!outcome.is_fatal());
    assert_eq!(outcome.winner(), None);
}

#[test]
fn resolution_is_deterministic() {
    let ranks = RankCatalog::builtin().unwrap();
    let run = || {
        let mut a = fighter(1, 14, 3, 60, 3);
        let mut d = fighter(2, 9, 7, 60, 4);
        let outcome = Attack::new(&mut a, &mut d).perform(&ranks, now()).unwrap();
        (outcome, a, d)
    };
    let (first, a1, d1) = run();
    for _ in 0..5 {
        let (again, a2, d2) = run();
        assert_eq!(again, first);
        assert_eq!(a2, a1);
        assert_eq!(d2, d1);
    }
}

#[test]
fn rejected_attacks_leave_both_actors_untouched() {
    let ranks = RankCatalog::builtin().unwrap();

    let mut tired = fighter(1, 10, 5, 20, 0);
    tired.energy = 0;
    let mut target = fighter(2, 1, 1, 3, 0);
    let (before_a, before_d) = (tired.clone(), target.clone());
    let err = Attack::new(&mut tired, &mut target)
        .perform(&ranks, now())
        .unwrap_err();
    assert_eq!(
        err,
        ArenaError::NotEnoughEnergy {
            needed: 1,
            available: 0
        }
    );
    assert_eq!(tired, before_a);
    assert_eq!(target, before_d);

    let mut fallen = fighter(3, 10, 5, 0, 0);
    let err = Attack::new(&mut fallen, &mut target)
        .perform(&ranks, now())
        .unwrap_err();
    assert_eq!(err, ArenaError::AttackerDefeated);

    let mut healthy = fighter(4, 10, 5, 20, 0);
    let mut down = fighter(5, 1, 1, 0, 0);
    let err = Attack::new(&mut healthy, &mut down)
        .perform(&ranks, now())
        .unwrap_err();
    assert_eq!(err, ArenaError::DefenderDefeated);
    assert_eq!(healthy.energy, 5);
}

#[test]
fn gold_amounts_stay_in_bounds() {
    for level_difference in -40..=40 {
        let modifier = reward_modifier(level_difference);
        assert!((0.3..=1.6).contains(&modifier));
        for loser_level in [0, 1, 10, 99] {
            assert!(gold_reward(loser_level, modifier) >= 0);
        }
    }
    for gold in [-500, 0, 1, 39, 1_000, 16_000, 1_000_000] {
        for modifier in [0.5, 1.0, 1.5] {
            let penalty = gold_penalty(gold, modifier);
            assert!(penalty >= 0);
            assert!(penalty <= GOLD_PENALTY_MAX);
            assert!(penalty <= gold.max(0));
        }
    }
    assert_eq!(gold_penalty(1_000_000, 1.5), GOLD_PENALTY_MAX);
}

#[test]
fn losing_never_puts_gold_below_zero() {
    let ranks = RankCatalog::builtin().unwrap();
    let mut attacker = fighter(1, 30, 5, 20, 0);
    let mut defender = fighter(2, 1, 1, 10, 0);
    defender.gold = -20;
    let outcome = Attack::new(&mut attacker, &mut defender)
        .perform(&ranks, now())
        .unwrap();
    assert_eq!(outcome.duel.unwrap().gold_penalty, 0);
    assert_eq!(defender.gold, -20);
}

#[test]
fn tenth_duel_places_both_actors() {
    let ranks = RankCatalog::builtin().unwrap();
    let mut attacker = fighter(1, 30, 5, 20, 0);
    let mut defender = fighter(2, 1, 1, 10, 0);
    attacker.wins = 9;
    defender.losses = 9;

    let outcome = Attack::new(&mut attacker, &mut defender)
        .perform(&ranks, now())
        .unwrap();
    assert_eq!(outcome.rank_change(Side::Attacker), RankChange::Placed);
    assert_eq!(outcome.rank_change(Side::Defender), RankChange::Placed);
}

#[test]
fn crossing_a_threshold_promotes_and_demotes() {
    let ranks = RankCatalog::builtin().unwrap();
    let mut attacker = fighter(1, 30, 5, 20, 0);
    let mut defender = fighter(2, 1, 1, 10, 0);
    attacker.wins = 20;
    defender.wins = 20;
    attacker.elo = 1495;
    defender.elo = 1505;

    let outcome = Attack::new(&mut attacker, &mut defender)
        .perform(&ranks, now())
        .unwrap();
    assert_eq!(outcome.rank_change(Side::Attacker), RankChange::Promoted);
    assert_eq!(outcome.rank_change(Side::Defender), RankChange::Demoted);
}

#[test]
fn rank_change_classification() {
    assert_eq!(RankChange::between(None, None), RankChange::Unchanged);
    assert_eq!(RankChange::between(None, Some(3)), RankChange::Placed);
    assert_eq!(RankChange::between(Some(2), Some(3)), RankChange::Promoted);
    assert_eq!(RankChange::between(Some(3), Some(2)), RankChange::Demoted);
    assert_eq!(RankChange::between(Some(3), Some(3)), RankChange::Unchanged);
}
