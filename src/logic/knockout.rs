//! Knockout stage: play rounds, settle draws on penalties, record the podium.

use crate::logic::bracket::build_next_round;
use crate::logic::outcome::{play_one_match, play_shootout};
use crate::models::{
    KnockoutRound, MatchResult, MatchRole, Podium, Rank, Resolution, Tournament, TournamentError,
    TournamentState,
};
use rand::Rng;

/// Play every match of `round`. Returns true if the round held the final.
///
/// Level scores after regulation go to a shootout. The third-place winner and
/// the finalists are written to the podium once the whole round is played.
pub fn play_round<R: Rng + ?Sized>(
    round: &mut KnockoutRound,
    podium: &mut Podium,
    rng: &mut R,
) -> Result<bool, TournamentError> {
    if let Some(played) = round.matches.iter().find(|m| m.is_played()) {
        return Err(TournamentError::MatchAlreadyPlayed(played.describe()));
    }

    let mut complete = false;
    let mut placings = Vec::new();
    for game in round.matches.iter_mut() {
        let score = play_one_match(rng);
        let resolution = if score.is_draw() {
            Resolution::Penalties {
                shootout: play_shootout(rng),
            }
        } else {
            Resolution::Regulation
        };
        game.result = MatchResult::Knockout { score, resolution };

        let (winner, loser) = game.outcome().ok_or(TournamentError::IncompleteResults)?;
        match resolution {
            Resolution::Regulation => log::debug!("{} : {}", game.describe(), score),
            Resolution::Penalties { shootout } => {
                log::debug!("{} : {} ({} on penalties)", game.describe(), score, shootout)
            }
        }
        match game.role {
            MatchRole::Normal => {}
            MatchRole::ThirdPlace => placings.push((Rank::Third, winner.clone())),
            MatchRole::Final => {
                placings.push((Rank::Champion, winner.clone()));
                placings.push((Rank::RunnerUp, loser.clone()));
                complete = true;
            }
        }
    }

    for (rank, participant) in placings {
        podium.record(rank, participant);
    }
    Ok(complete)
}

/// Play the current knockout round. Returns true once the final has been played;
/// otherwise the next round is drawn and appended.
pub fn play_knockout_round(tournament: &mut Tournament) -> Result<bool, TournamentError> {
    if tournament.state != TournamentState::Knockout {
        return Err(TournamentError::InvalidState);
    }
    let round = tournament
        .knockout
        .current_mut()
        .ok_or(TournamentError::InvalidState)?;
    let number = round.number;
    let complete = play_round(round, &mut tournament.podium, &mut tournament.rng)?;
    log::info!("Round {} played", number);

    if complete {
        tournament.state = TournamentState::Completed;
        if let Some(champion) = tournament.podium.champion() {
            log::info!("Tournament complete; champion: {}", champion);
        }
        return Ok(true);
    }

    let current = tournament
        .knockout
        .current()
        .ok_or(TournamentError::InvalidState)?;
    let next = build_next_round(current, !tournament.podium.is_empty(), &mut tournament.rng)?;
    if !tournament.knockout.push(next) {
        return Err(TournamentError::InvalidState);
    }
    Ok(false)
}

/// Play knockout rounds until the final is decided.
pub fn play_knockout_stage(tournament: &mut Tournament) -> Result<(), TournamentError> {
    while !play_knockout_round(tournament)? {}
    Ok(())
}
