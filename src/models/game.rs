//! Match (game), Score, result and role for group and knockout play.

use crate::models::group::GroupId;
use crate::models::participant::Participant;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which side of a match: the first-listed participant is `Home`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub fn add_goal(&mut self, side: Side) {
        match side {
            Side::Home => self.home += 1,
            Side::Away => self.away += 1,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.home == self.away
    }

    /// The side ahead, or None on a draw.
    pub fn leader(&self) -> Option<Side> {
        if self.home > self.away {
            Some(Side::Home)
        } else if self.away > self.home {
            Some(Side::Away)
        } else {
            None
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}

/// How a knockout match was decided.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Regulation,
    /// Regulation ended level; the shootout score decides.
    Penalties { shootout: Score },
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    #[default]
    Unplayed,
    Group {
        score: Score,
    },
    Knockout {
        score: Score,
        resolution: Resolution,
    },
}

impl MatchResult {
    pub fn is_played(&self) -> bool {
        !matches!(self, MatchResult::Unplayed)
    }

    /// Regulation score, if played.
    pub fn score(&self) -> Option<Score> {
        match self {
            MatchResult::Unplayed => None,
            MatchResult::Group { score } | MatchResult::Knockout { score, .. } => Some(*score),
        }
    }

    /// Winning side. None if unplayed or a group-stage draw.
    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchResult::Unplayed => None,
            MatchResult::Group { score } => score.leader(),
            MatchResult::Knockout {
                score,
                resolution: Resolution::Regulation,
            } => score.leader(),
            MatchResult::Knockout {
                resolution: Resolution::Penalties { shootout },
                ..
            } => shootout.leader(),
        }
    }
}

/// Semantic meaning of a knockout match, independent of its bracket position.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRole {
    #[default]
    Normal,
    ThirdPlace,
    Final,
}

/// A single match between two participants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub home: Participant,
    pub away: Participant,
    /// Owning group (group-stage matches only).
    pub group: Option<GroupId>,
    /// Day (1..=6) in the group stage, round number (7 onwards) in the knockout stage.
    pub slot: u32,
    pub role: MatchRole,
    pub result: MatchResult,
}

impl GameMatch {
    pub fn group_stage(group: GroupId, home: Participant, away: Participant, day: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            home,
            away,
            group: Some(group),
            slot: day,
            role: MatchRole::Normal,
            result: MatchResult::Unplayed,
        }
    }

    pub fn knockout(home: Participant, away: Participant, round: u32, role: MatchRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            home,
            away,
            group: None,
            slot: round,
            role,
            result: MatchResult::Unplayed,
        }
    }

    pub fn is_played(&self) -> bool {
        self.result.is_played()
    }

    pub fn participant(&self, side: Side) -> &Participant {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// (winner, loser) once the match has a decisive result.
    pub fn outcome(&self) -> Option<(&Participant, &Participant)> {
        match self.result.winner()? {
            Side::Home => Some((&self.home, &self.away)),
            Side::Away => Some((&self.away, &self.home)),
        }
    }

    /// Short label used in logs and error messages, e.g. `[Group A] - X v. Y`.
    pub fn describe(&self) -> String {
        let tag = match (self.group, self.role) {
            (Some(group), _) => group.to_string(),
            (None, MatchRole::ThirdPlace) => "Third place".to_string(),
            (None, MatchRole::Final) => "Final".to_string(),
            (None, MatchRole::Normal) => format!("Round {}", self.slot),
        };
        format!("[{}] - {} v. {}", tag, self.home, self.away)
    }
}
