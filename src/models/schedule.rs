//! Group-stage schedule (day -> matches) and knockout schedule (append-only rounds).

use crate::constants::{FIRST_KNOCKOUT_ROUND, GROUP_STAGE_DAYS};
use crate::models::game::{GameMatch, MatchRole};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Matches per group-stage day. Days 1..=6 always exist, possibly empty.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupStageSchedule {
    days: BTreeMap<u32, Vec<GameMatch>>,
}

impl Default for GroupStageSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupStageSchedule {
    pub fn new() -> Self {
        Self {
            days: (1..=GROUP_STAGE_DAYS).map(|d| (d, Vec::new())).collect(),
        }
    }

    /// Schedule a match on its `slot` day. Days outside 1..=6 are created on demand.
    pub fn insert(&mut self, game: GameMatch) {
        self.days.entry(game.slot).or_default().push(game);
    }

    pub fn day(&self, day: u32) -> Option<&[GameMatch]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    pub fn day_mut(&mut self, day: u32) -> Option<&mut Vec<GameMatch>> {
        self.days.get_mut(&day)
    }

    /// (day, matches) in day order.
    pub fn days(&self) -> impl Iterator<Item = (u32, &[GameMatch])> {
        self.days.iter().map(|(d, m)| (*d, m.as_slice()))
    }

    pub fn matches(&self) -> impl Iterator<Item = &GameMatch> {
        self.days.values().flatten()
    }

    pub fn is_day_played(&self, day: u32) -> bool {
        self.day(day)
            .map(|m| m.iter().all(GameMatch::is_played))
            .unwrap_or(false)
    }

    pub fn is_complete(&self) -> bool {
        self.matches().all(GameMatch::is_played)
    }
}

/// One knockout round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutRound {
    pub number: u32,
    pub matches: Vec<GameMatch>,
}

impl KnockoutRound {
    pub fn new(number: u32, matches: Vec<GameMatch>) -> Self {
        Self { number, matches }
    }

    pub fn is_played(&self) -> bool {
        self.matches.iter().all(GameMatch::is_played)
    }

    pub fn final_match(&self) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.role == MatchRole::Final)
    }

    /// A round is terminal once its final has been played.
    pub fn is_terminal(&self) -> bool {
        self.final_match().map(GameMatch::is_played).unwrap_or(false)
    }
}

/// Knockout rounds in play order; round `FIRST_KNOCKOUT_ROUND + i` lives at index `i`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutSchedule {
    rounds: Vec<KnockoutRound>,
}

impl KnockoutSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the next round must carry.
    pub fn next_round_number(&self) -> u32 {
        self.rounds
            .last()
            .map(|r| r.number + 1)
            .unwrap_or(FIRST_KNOCKOUT_ROUND)
    }

    /// Append a round. Returns false (and drops it) if its number is out of sequence.
    pub fn push(&mut self, round: KnockoutRound) -> bool {
        if round.number != self.next_round_number() {
            return false;
        }
        self.rounds.push(round);
        true
    }

    pub fn rounds(&self) -> &[KnockoutRound] {
        &self.rounds
    }

    pub fn round(&self, number: u32) -> Option<&KnockoutRound> {
        let offset = number.checked_sub(FIRST_KNOCKOUT_ROUND)?;
        self.rounds.get(offset as usize)
    }

    /// Latest round (the one being played or about to be played).
    pub fn current(&self) -> Option<&KnockoutRound> {
        self.rounds.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut KnockoutRound> {
        self.rounds.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }
}
