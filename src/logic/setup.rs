//! Setup: build a tournament from an entrant list (pad, draw groups, schedule days).

use crate::logic::roster::{
    build_group_stage_schedule, default_placeholder_prefix, pad_to_bracket_size,
    partition_into_groups, seeded_placeholder_prefix,
};
use crate::models::{Tournament, TournamentError};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Start a tournament with an entropy-seeded random source.
///
/// Only draws groups and the day schedule; nothing is played until the first
/// play call, so a discarded tournament needs no cleanup.
pub fn start_tournament<I, S>(participants: I) -> Result<Tournament, TournamentError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    start_tournament_with(participants, &default_placeholder_prefix(), StdRng::from_entropy())
}

/// Start a reproducible tournament: the same entrants and seed give the same
/// groups, schedule, scores and podium.
pub fn start_seeded_tournament<I, S>(participants: I, seed: u64) -> Result<Tournament, TournamentError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let prefix = seeded_placeholder_prefix(&mut rng);
    start_tournament_with(participants, &prefix, rng)
}

/// Start a tournament with an explicit placeholder prefix and random source.
pub fn start_tournament_with<I, S>(
    participants: I,
    placeholder_prefix: &str,
    mut rng: StdRng,
) -> Result<Tournament, TournamentError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let field = pad_to_bracket_size(participants, placeholder_prefix)?;
    let groups = partition_into_groups(&field, &mut rng)?;
    let schedule = build_group_stage_schedule(&groups, &mut rng)?;
    log::info!(
        "Tournament drawn: {} participant(s) in {} group(s)",
        field.len(),
        groups.len()
    );
    Ok(Tournament::new(field, groups, schedule, rng))
}
