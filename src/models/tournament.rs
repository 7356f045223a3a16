//! Tournament, TournamentState and TournamentError.

use crate::constants::GROUP_STAGE_DAYS;
use crate::models::group::{Group, GroupId};
use crate::models::participant::Participant;
use crate::models::podium::Podium;
use crate::models::schedule::{GroupStageSchedule, KnockoutSchedule};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Fewer than 8 participants supplied.
    InsufficientParticipants { got: usize },
    /// Participant count is not a multiple of the group size.
    InvalidGroupCount { participants: usize },
    /// The same participant name was supplied twice.
    DuplicateParticipant(String),
    /// A group ended up with the wrong number of members.
    GroupAssignmentInvariantViolation,
    /// A match that already has a result was played again.
    MatchAlreadyPlayed(String),
    /// First-place and second-place pools did not empty together.
    BracketPoolMismatch,
    /// An odd number of winners was left without an opponent.
    WinnerPoolLeak,
    /// A round was built after the podium was already populated.
    PrematureFinalization,
    /// A round has matches without a decisive result.
    IncompleteResults,
    /// Participant is not a member of the expected group.
    ParticipantNotFound(String),
    /// Group-stage day outside the schedule.
    UnknownDay(u32),
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Every attempt ended with a placeholder on the podium.
    RetriesExhausted { attempts: u32 },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InsufficientParticipants { got } => {
                write!(f, "Need at least 8 participants (got {})", got)
            }
            TournamentError::InvalidGroupCount { participants } => {
                write!(f, "Can't split {} participants into groups of 4", participants)
            }
            TournamentError::DuplicateParticipant(name) => {
                write!(f, "Participant '{}' was entered more than once", name)
            }
            TournamentError::GroupAssignmentInvariantViolation => {
                write!(f, "Unexpected non-full group after the draw")
            }
            TournamentError::MatchAlreadyPlayed(game) => write!(f, "Match {} already played", game),
            TournamentError::BracketPoolMismatch => {
                write!(f, "First-place and second-place pools are out of step")
            }
            TournamentError::WinnerPoolLeak => write!(f, "A winner was left without an opponent"),
            TournamentError::PrematureFinalization => {
                write!(f, "The podium is already decided; no further rounds can be built")
            }
            TournamentError::IncompleteResults => write!(f, "Not all matches have a result"),
            TournamentError::ParticipantNotFound(name) => {
                write!(f, "Participant '{}' not found in its group", name)
            }
            TournamentError::UnknownDay(day) => write!(f, "Day {} is not a group-stage day", day),
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::RetriesExhausted { attempts } => write!(
                f,
                "A placeholder reached the podium in all {} attempt(s)",
                attempts
            ),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Groups drawn; days 1..=6 being played.
    #[default]
    GroupStage,
    /// Round 7 onwards; the latest knockout round is waiting to be played.
    Knockout,
    /// Final played; podium populated.
    Completed,
}

/// Full tournament state for one run: field, groups, schedules, podium and random source.
#[derive(Clone, Debug)]
pub struct Tournament {
    pub id: TournamentId,
    /// Padded field, placeholders last.
    pub participants: Vec<Participant>,
    /// Indexed by `GroupId`.
    pub groups: Vec<Group>,
    pub group_schedule: GroupStageSchedule,
    pub knockout: KnockoutSchedule,
    pub podium: Podium,
    pub state: TournamentState,
    /// Group-stage days played so far (0..=6).
    pub days_played: u32,
    pub(crate) rng: StdRng,
}

impl Tournament {
    /// Assemble a tournament from a drawn field. Nothing is played yet.
    pub fn new(
        participants: Vec<Participant>,
        groups: Vec<Group>,
        group_schedule: GroupStageSchedule,
        rng: StdRng,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            participants,
            groups,
            group_schedule,
            knockout: KnockoutSchedule::new(),
            podium: Podium::new(),
            state: TournamentState::GroupStage,
            days_played: 0,
            rng,
        }
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id.0)
    }

    /// Group the participant was drawn into.
    pub fn group_of(&self, participant: &Participant) -> Option<&Group> {
        self.groups.iter().find(|g| g.contains(participant))
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.is_placeholder())
    }

    pub fn is_group_stage_complete(&self) -> bool {
        self.days_played >= GROUP_STAGE_DAYS
    }

    pub fn is_completed(&self) -> bool {
        self.state == TournamentState::Completed
    }
}
