//! Knockout bracket: draw round 7 from the group finishers, then pair winners round by round.

use crate::constants::FIRST_KNOCKOUT_ROUND;
use crate::logic::group_play::resolve_top_two;
use crate::models::{
    GameMatch, Group, KnockoutRound, MatchRole, Participant, TopTwo, TournamentError,
};
use rand::Rng;

/// Draw round 7: each group winner meets a runner-up from a different group.
///
/// Two pools hold one entry per group. A random group is taken from the first-place
/// pool; its own entry is held out of the second-place pool while an opponent is
/// drawn, then put back. If only the group's own runner-up is left for the last
/// pick, it trades runners-up with a random earlier pairing, which keeps both
/// pairings valid.
pub fn build_initial_knockout_round<R: Rng + ?Sized>(
    groups: &mut [Group],
    rng: &mut R,
) -> Result<KnockoutRound, TournamentError> {
    let finishers: Vec<TopTwo> = groups
        .iter_mut()
        .map(|g| resolve_top_two(g, rng))
        .collect::<Result<_, _>>()?;

    let mut first_pool: Vec<usize> = (0..finishers.len()).collect();
    let mut second_pool: Vec<usize> = (0..finishers.len()).collect();
    let mut pairings: Vec<(usize, usize)> = Vec::with_capacity(finishers.len());

    while !first_pool.is_empty() {
        let g1 = first_pool.swap_remove(rng.gen_range(0..first_pool.len()));
        let own_pos = second_pool.iter().position(|&g| g == g1);
        let held = own_pos.map(|pos| second_pool.swap_remove(pos));

        if second_pool.is_empty() {
            match held {
                Some(own) if !pairings.is_empty() => {
                    let k = rng.gen_range(0..pairings.len());
                    let (other_first, other_second) = pairings[k];
                    pairings[k] = (other_first, own);
                    pairings.push((g1, other_second));
                    continue;
                }
                _ => return Err(TournamentError::BracketPoolMismatch),
            }
        }

        let g2 = second_pool.swap_remove(rng.gen_range(0..second_pool.len()));
        if let Some(own) = held {
            second_pool.push(own);
        }
        pairings.push((g1, g2));
    }
    if !second_pool.is_empty() {
        return Err(TournamentError::BracketPoolMismatch);
    }

    let matches: Vec<GameMatch> = pairings
        .into_iter()
        .map(|(g1, g2)| {
            GameMatch::knockout(
                finishers[g1].first.clone(),
                finishers[g2].second.clone(),
                FIRST_KNOCKOUT_ROUND,
                MatchRole::Normal,
            )
        })
        .collect();
    log::info!(
        "Round {} drawn: {} match(es)",
        FIRST_KNOCKOUT_ROUND,
        matches.len()
    );
    Ok(KnockoutRound::new(FIRST_KNOCKOUT_ROUND, matches))
}

/// Build the round after `current` from its winners.
///
/// With exactly two winners left, the next round is the last one: the two losers
/// play for third place and the two winners play the final. Otherwise winners are
/// paired at random. Building past the final is an error.
pub fn build_next_round<R: Rng + ?Sized>(
    current: &KnockoutRound,
    podium_has_entries: bool,
    rng: &mut R,
) -> Result<KnockoutRound, TournamentError> {
    if podium_has_entries {
        return Err(TournamentError::PrematureFinalization);
    }
    if current.matches.is_empty() {
        return Err(TournamentError::IncompleteResults);
    }

    let mut winners: Vec<Participant> = Vec::with_capacity(current.matches.len());
    let mut losers: Vec<Participant> = Vec::with_capacity(current.matches.len());
    for game in &current.matches {
        let (winner, loser) = game.outcome().ok_or(TournamentError::IncompleteResults)?;
        winners.push(winner.clone());
        losers.push(loser.clone());
    }

    let number = current.number + 1;
    if winners.len() == 2 {
        let mut losers = losers.into_iter();
        let mut winners = winners.into_iter();
        let (Some(l1), Some(l2), Some(w1), Some(w2)) =
            (losers.next(), losers.next(), winners.next(), winners.next())
        else {
            return Err(TournamentError::WinnerPoolLeak);
        };
        log::info!("Round {} drawn: third-place match and final", number);
        return Ok(KnockoutRound::new(
            number,
            vec![
                GameMatch::knockout(l1, l2, number, MatchRole::ThirdPlace),
                GameMatch::knockout(w1, w2, number, MatchRole::Final),
            ],
        ));
    }

    let mut matches = Vec::with_capacity(winners.len() / 2);
    while winners.len() >= 2 {
        let home = winners.swap_remove(rng.gen_range(0..winners.len()));
        let away = winners.swap_remove(rng.gen_range(0..winners.len()));
        matches.push(GameMatch::knockout(home, away, number, MatchRole::Normal));
    }
    if !winners.is_empty() {
        return Err(TournamentError::WinnerPoolLeak);
    }
    log::info!("Round {} drawn: {} match(es)", number, matches.len());
    Ok(KnockoutRound::new(number, matches))
}
