//! Whole runs: play everything, judge the podium, retry when a placeholder finishes on it.

use crate::logic::group_play::play_group_stage;
use crate::logic::knockout::play_knockout_stage;
use crate::logic::setup::{start_seeded_tournament, start_tournament};
use crate::models::{Podium, Tournament, TournamentError, TournamentState};

/// Play whatever is left of the tournament and return the podium.
pub fn play_all(tournament: &mut Tournament) -> Result<Podium, TournamentError> {
    if tournament.state == TournamentState::GroupStage {
        play_group_stage(tournament)?;
    }
    play_knockout_stage(tournament)?;
    Ok(tournament.podium.clone())
}

/// True once the podium is complete and no placeholder is on it.
pub fn is_podium_legitimate(tournament: &Tournament) -> bool {
    tournament.podium.is_complete() && !tournament.podium.has_placeholder()
}

/// Fresh tournament for the given 1-based attempt. With a base seed, attempt `k`
/// uses `seed + k - 1`, so a retried run is still reproducible.
pub fn start_attempt<S: AsRef<str>>(
    participants: &[S],
    seed: Option<u64>,
    attempt: u32,
) -> Result<Tournament, TournamentError> {
    let names = participants.iter().map(|s| s.as_ref().to_string());
    match seed {
        Some(seed) => start_seeded_tournament(names, attempt_seed(seed, attempt)),
        None => start_tournament(names),
    }
}

pub fn attempt_seed(seed: u64, attempt: u32) -> u64 {
    seed.wrapping_add(u64::from(attempt.saturating_sub(1)))
}

/// Replay whole tournaments until the podium is legitimate.
///
/// Returns the finished tournament and the attempt number it took.
pub fn play_until_legitimate<S: AsRef<str>>(
    participants: &[S],
    max_attempts: u32,
    seed: Option<u64>,
) -> Result<(Tournament, u32), TournamentError> {
    for attempt in 1..=max_attempts {
        let mut tournament = start_attempt(participants, seed, attempt)?;
        play_all(&mut tournament)?;
        if is_podium_legitimate(&tournament) {
            return Ok((tournament, attempt));
        }
        log::warn!(
            "Attempt {}: a placeholder reached the podium; replaying the whole tournament",
            attempt
        );
    }
    Err(TournamentError::RetriesExhausted {
        attempts: max_attempts,
    })
}
