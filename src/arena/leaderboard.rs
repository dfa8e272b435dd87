//! Contains the definitions and ordering of the different leaderboard types.

use super::actor::Actor;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardType {
    Elo,
    Level,
    Gold,
}

impl LeaderboardType {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Elo => "🏆 Duel Rating",
            Self::Level => "⭐ Level",
            Self::Gold => "💰 Wealth",
        }
    }

    pub fn score_name(&self) -> &'static str {
        match self {
            Self::Elo => "Elo",
            Self::Level => "Level",
            Self::Gold => "Gold",
        }
    }

    pub fn score(&self, actor: &Actor) -> i64 {
        match self {
            Self::Elo => actor.elo as i64,
            Self::Level => actor.level as i64,
            Self::Gold => actor.gold,
        }
    }

    /// Best-first ordering; level ties are broken by lifetime XP, then member id.
    pub fn compare(&self, a: &Actor, b: &Actor) -> Ordering {
        let primary = self.score(b).cmp(&self.score(a));
        let secondary = match self {
            Self::Level => b.xp.cmp(&a.xp),
            _ => Ordering::Equal,
        };
        primary
            .then(secondary)
            .then(a.key.member_id.cmp(&b.key.member_id))
    }
}

impl FromStr for LeaderboardType {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "elo" | "rank" | "duel" | "duels" => Ok(Self::Elo),
            "level" | "lvl" | "xp" => Ok(Self::Level),
            "gold" | "wealth" | "coins" => Ok(Self::Gold),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::ActorKey;
    use chrono::Utc;

    fn actor(member_id: u64, level: i32, xp: i64) -> Actor {
        let mut a = Actor::new(ActorKey::new(1, member_id), "a", "A", Utc::now());
        a.level = level;
        a.xp = xp;
        a
    }

    #[test]
    fn aliases_parse() {
        assert_eq!("RANK".parse::<LeaderboardType>(), Ok(LeaderboardType::Elo));
        assert_eq!("xp".parse::<LeaderboardType>(), Ok(LeaderboardType::Level));
        assert_eq!("wealth".parse::<LeaderboardType>(), Ok(LeaderboardType::Gold));
        assert!("karma".parse::<LeaderboardType>().is_err());
    }

    #[test]
    fn level_ties_break_on_xp_then_id() {
        let mut actors = vec![actor(3, 2, 600), actor(1, 2, 900), actor(2, 2, 600), actor(4, 5, 0)];
        actors.sort_by(|a, b| LeaderboardType::Level.compare(a, b));
        let ids: Vec<u64> = actors.iter().map(|a| a.key.member_id).collect();
        assert_eq!(ids, vec![4, 1, 2, 3]);
    }
}
