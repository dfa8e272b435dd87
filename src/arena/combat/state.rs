//! Result types produced by resolving an attack.

/// Which participant of an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Attacker,
    Defender,
}

/// How the exchange of blows went, before looking at who fell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    /// Attack beat defense; the defender took damage.
    Hit,
    /// Attack equalled defense; nobody took damage.
    Block,
    /// Defense beat attack; the attacker took the difference.
    Recoil,
}

/// Movement of one actor's rank caused by a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankChange {
    Unchanged,
    /// Placement duels just completed; a rank is now visible.
    Placed,
    Promoted,
    Demoted,
}

impl RankChange {
    pub fn between(before: Option<usize>, after: Option<usize>) -> Self {
        match (before, after) {
            (None, Some(_)) => RankChange::Placed,
            (Some(b), Some(a)) if a > b => RankChange::Promoted,
            (Some(b), Some(a)) if a < b => RankChange::Demoted,
            _ => RankChange::Unchanged,
        }
    }
}

/// Economy and rating consequences of a fatal attack.
#[derive(Debug, Clone, PartialEq)]
pub struct DuelResult {
    pub winner: Side,
    pub level_difference: i32,
    pub reward_modifier: f64,
    pub penalty_modifier: f64,
    pub gold_reward: i64,
    pub gold_penalty: i64,
    pub winner_elo_change: i32,
    pub loser_elo_change: i32,
    pub winner_rank: RankChange,
    pub loser_rank: RankChange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    pub kind: HitKind,
    pub effective_damage: i64,
    pub recoil_damage: i64,
    /// Present only when exactly one side fell.
    pub duel: Option<DuelResult>,
}

impl AttackOutcome {
    pub fn is_fatal(&self) -> bool {
        self.duel.is_some()
    }

    pub fn winner(&self) -> Option<Side> {
        self.duel.as_ref().map(|d| d.winner)
    }

    pub fn attacker_is_winner(&self) -> bool {
        self.winner() == Some(Side::Attacker)
    }

    pub fn defender_is_winner(&self) -> bool {
        self.winner() == Some(Side::Defender)
    }

    pub fn rank_change(&self, side: Side) -> RankChange {
        match &self.duel {
            Some(d) if d.winner == side => d.winner_rank,
            Some(d) => d.loser_rank,
            None => RankChange::Unchanged,
        }
    }
}
