//! Group, GroupId and group standings.

use crate::constants::GROUP_SIZE;
use crate::models::participant::Participant;
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based group index; displayed as a letter label ("Group A", ..., "Group Z", "Group AA", ...).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct GroupId(pub usize);

impl GroupId {
    /// Letter part of the label: A..Z, then AA, AB, ...
    pub fn letters(&self) -> String {
        let mut n = self.0 + 1;
        let mut letters = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(char::from(b'A' + rem as u8));
            n = (n - 1) / 26;
        }
        letters.iter().rev().collect()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group {}", self.letters())
    }
}

/// One participant's point total within its group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub participant: Participant,
    pub points: u32,
}

/// The two finishers advancing from a group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TopTwo {
    pub first: Participant,
    pub second: Participant,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    /// Members in assignment order.
    pub standings: Vec<Standing>,
    /// Set once when the top two are resolved; never recomputed.
    top_two: Option<TopTwo>,
}

impl Group {
    pub fn new(id: GroupId) -> Self {
        Self {
            id,
            standings: Vec::with_capacity(GROUP_SIZE),
            top_two: None,
        }
    }

    pub fn add_member(&mut self, participant: Participant) {
        self.standings.push(Standing {
            participant,
            points: 0,
        });
    }

    pub fn members(&self) -> impl Iterator<Item = &Participant> {
        self.standings.iter().map(|s| &s.participant)
    }

    pub fn len(&self) -> usize {
        self.standings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.standings.len() == GROUP_SIZE
    }

    pub fn contains(&self, participant: &Participant) -> bool {
        self.members().any(|p| p == participant)
    }

    pub fn points(&self, participant: &Participant) -> Option<u32> {
        self.standings
            .iter()
            .find(|s| &s.participant == participant)
            .map(|s| s.points)
    }

    /// Add points to a member's total.
    pub fn award(&mut self, participant: &Participant, points: u32) -> Result<(), TournamentError> {
        let standing = self
            .standings
            .iter_mut()
            .find(|s| &s.participant == participant)
            .ok_or_else(|| TournamentError::ParticipantNotFound(participant.name.clone()))?;
        standing.points += points;
        Ok(())
    }

    pub fn total_points(&self) -> u32 {
        self.standings.iter().map(|s| s.points).sum()
    }

    /// Standings sorted by points, descending. Equal points keep assignment order.
    pub fn ranked(&self) -> Vec<&Standing> {
        let mut ranked: Vec<&Standing> = self.standings.iter().collect();
        ranked.sort_by(|a, b| b.points.cmp(&a.points));
        ranked
    }

    /// Cached top two, if already resolved.
    pub fn top_two(&self) -> Option<&TopTwo> {
        self.top_two.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.top_two.is_some()
    }

    /// Store the resolved top two. Only the first call has any effect.
    pub(crate) fn resolve_once(&mut self, top_two: TopTwo) -> &TopTwo {
        self.top_two.get_or_insert(top_two)
    }
}
