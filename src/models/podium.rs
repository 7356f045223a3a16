//! Podium: ranks 1-3 after the final and third-place match.

use crate::models::participant::Participant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Champion = 1,
    RunnerUp = 2,
    Third = 3,
}

impl Rank {
    pub const ALL: [Rank; 3] = [Rank::Champion, Rank::RunnerUp, Rank::Third];

    pub fn position(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rank::Champion => "Champion",
            Rank::RunnerUp => "Runner-up",
            Rank::Third => "Third place",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Podium {
    entries: BTreeMap<Rank, Participant>,
}

impl Podium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, rank: Rank, participant: Participant) {
        self.entries.insert(rank, participant);
    }

    pub fn get(&self, rank: Rank) -> Option<&Participant> {
        self.entries.get(&rank)
    }

    pub fn champion(&self) -> Option<&Participant> {
        self.get(Rank::Champion)
    }

    pub fn runner_up(&self) -> Option<&Participant> {
        self.get(Rank::RunnerUp)
    }

    pub fn third(&self) -> Option<&Participant> {
        self.get(Rank::Third)
    }

    /// (rank, participant) in rank order.
    pub fn entries(&self) -> impl Iterator<Item = (Rank, &Participant)> {
        self.entries.iter().map(|(r, p)| (*r, p))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        Rank::ALL.iter().all(|r| self.entries.contains_key(r))
    }

    pub fn has_placeholder(&self) -> bool {
        self.entries.values().any(Participant::is_placeholder)
    }
}
