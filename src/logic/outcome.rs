//! Random match outcomes: goal counts, goal attribution and penalty shootouts.
//!
//! Every draw goes through the caller's `Rng`, so a seeded generator reproduces a whole run.

use crate::constants::{MAX_GOALS, SHOOTOUT_KICKS};
use crate::models::{Score, Side};
use rand::Rng;

/// Total goals in one match, uniform in `0..=MAX_GOALS`.
pub fn goal_count<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..=MAX_GOALS)
}

/// Unbiased coin flip.
pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> Side {
    if rng.gen_bool(0.5) {
        Side::Home
    } else {
        Side::Away
    }
}

/// Regulation time: draw a goal total, then hand each goal to a side at random.
/// Knows nothing about who is playing.
pub fn play_one_match<R: Rng + ?Sized>(rng: &mut R) -> Score {
    let mut score = Score::default();
    for _ in 0..goal_count(rng) {
        score.add_goal(coin_flip(rng));
    }
    score
}

/// Penalty shootout. Never returns a level score.
///
/// Up to five paired kicks, stopping early once one side can't be caught,
/// then sudden death one pair at a time until the scores differ.
pub fn play_shootout<R: Rng + ?Sized>(rng: &mut R) -> Score {
    let mut score = Score::default();
    for taken in 1..=SHOOTOUT_KICKS {
        take_paired_kick(rng, &mut score);
        let remaining = SHOOTOUT_KICKS - taken;
        if score.home.abs_diff(score.away) > remaining {
            return score;
        }
    }
    while score.is_draw() {
        take_paired_kick(rng, &mut score);
    }
    score
}

/// Both sides kick once; each converts independently.
fn take_paired_kick<R: Rng + ?Sized>(rng: &mut R, score: &mut Score) {
    if rng.gen_bool(0.5) {
        score.home += 1;
    }
    if rng.gen_bool(0.5) {
        score.away += 1;
    }
}
