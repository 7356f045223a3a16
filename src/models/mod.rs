//! Data structures for the tournament: participants, groups, matches, schedules, podium.

mod game;
mod group;
mod participant;
mod podium;
mod schedule;
mod tournament;

pub use game::{GameMatch, MatchId, MatchResult, MatchRole, Resolution, Score, Side};
pub use group::{Group, GroupId, Standing, TopTwo};
pub use participant::Participant;
pub use podium::{Podium, Rank};
pub use schedule::{GroupStageSchedule, KnockoutRound, KnockoutSchedule};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentState};
