//! Serializable snapshot of a finished run, for JSON output.

use crate::logic::is_podium_legitimate;
use crate::models::{
    GroupStageSchedule, KnockoutRound, Podium, Standing, TopTwo, Tournament, TournamentId,
    TournamentState,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct GroupReport {
    pub id: String,
    /// Highest points first.
    pub standings: Vec<Standing>,
    pub top_two: Option<TopTwo>,
}

#[derive(Clone, Debug, Serialize)]
pub struct TournamentReport {
    pub id: TournamentId,
    pub attempts: u32,
    pub finished_at: DateTime<Utc>,
    pub state: TournamentState,
    pub groups: Vec<GroupReport>,
    pub group_schedule: GroupStageSchedule,
    pub knockout: Vec<KnockoutRound>,
    pub podium: Podium,
    pub legitimate: bool,
}

impl TournamentReport {
    pub fn from_tournament(tournament: &Tournament, attempts: u32) -> Self {
        let groups = tournament
            .groups
            .iter()
            .map(|g| GroupReport {
                id: g.id.to_string(),
                standings: g.ranked().into_iter().cloned().collect(),
                top_two: g.top_two().cloned(),
            })
            .collect();
        Self {
            id: tournament.id,
            attempts,
            finished_at: Utc::now(),
            state: tournament.state,
            groups,
            group_schedule: tournament.group_schedule.clone(),
            knockout: tournament.knockout.rounds().to_vec(),
            podium: tournament.podium.clone(),
            legitimate: is_podium_legitimate(tournament),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
