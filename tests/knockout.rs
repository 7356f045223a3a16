//! Integration tests for the knockout stage: round 7 draw, progression, podium.

use world_cup_sim::{
    play_group_stage, play_knockout_round, play_knockout_stage, play_round,
    start_seeded_tournament, MatchRole, Tournament, TournamentError, TournamentState,
};

fn tournament_after_groups(n: usize, seed: u64) -> Tournament {
    let mut t = start_seeded_tournament((1..=n).map(|i| format!("Team {i}")), seed).unwrap();
    play_group_stage(&mut t).unwrap();
    t
}

#[test]
fn knockout_before_group_stage_is_rejected() {
    let mut t = start_seeded_tournament((1..=8).map(|i| format!("Team {i}")), 0).unwrap();
    assert_eq!(play_knockout_round(&mut t), Err(TournamentError::InvalidState));
    assert_eq!(play_knockout_stage(&mut t), Err(TournamentError::InvalidState));
}

#[test]
fn round_seven_pairs_winners_with_other_groups_runners_up() {
    for seed in 0..50 {
        let t = tournament_after_groups(32, seed);
        let round = t.knockout.round(7).unwrap();
        assert_eq!(round.matches.len(), t.groups.len());
        for game in &round.matches {
            let home_group = t.group_of(&game.home).unwrap();
            let away_group = t.group_of(&game.away).unwrap();
            assert_eq!(home_group.top_two().unwrap().first, game.home);
            assert_eq!(away_group.top_two().unwrap().second, game.away);
            assert_ne!(home_group.id, away_group.id);
        }
    }
}

#[test]
fn rounds_halve_until_final() {
    let mut t = tournament_after_groups(64, 5); // 16 groups: rounds of 16, 8, 4, 2, then 3rd + final
    play_knockout_stage(&mut t).unwrap();
    let sizes: Vec<usize> = t.knockout.rounds().iter().map(|r| r.matches.len()).collect();
    assert_eq!(sizes, [16, 8, 4, 2, 2]);
    let numbers: Vec<u32> = t.knockout.rounds().iter().map(|r| r.number).collect();
    assert_eq!(numbers, [7, 8, 9, 10, 11]);

    let last = t.knockout.current().unwrap();
    assert!(last.is_terminal());
    assert_eq!(last.matches[0].role, MatchRole::ThirdPlace);
    assert_eq!(last.matches[1].role, MatchRole::Final);
    assert!(t
        .knockout
        .rounds()
        .iter()
        .all(|r| r.matches.iter().all(|m| m.outcome().is_some())));
    assert_eq!(t.state, TournamentState::Completed);
}

#[test]
fn later_rounds_only_contain_previous_winners() {
    let mut t = tournament_after_groups(32, 17);
    play_knockout_stage(&mut t).unwrap();
    let rounds = t.knockout.rounds();
    for pair in rounds.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let winners: Vec<_> = prev.matches.iter().map(|m| m.outcome().unwrap().0.clone()).collect();
        let losers: Vec<_> = prev.matches.iter().map(|m| m.outcome().unwrap().1.clone()).collect();
        for game in &next.matches {
            let pool = if game.role == MatchRole::ThirdPlace { &losers } else { &winners };
            assert!(pool.contains(&game.home));
            assert!(pool.contains(&game.away));
        }
    }
}

#[test]
fn replaying_a_knockout_round_fails() {
    let mut t = tournament_after_groups(8, 3);
    play_knockout_round(&mut t).unwrap();
    let mut first = t.knockout.round(7).unwrap().clone();
    let mut podium = t.podium.clone();
    let mut rng = rand::thread_rng();
    assert!(matches!(
        play_round(&mut first, &mut podium, &mut rng),
        Err(TournamentError::MatchAlreadyPlayed(_))
    ));
}

#[test]
fn completed_tournament_plays_no_more_rounds() {
    let mut t = tournament_after_groups(8, 4);
    play_knockout_stage(&mut t).unwrap();
    let rounds = t.knockout.len();
    assert_eq!(play_knockout_round(&mut t), Err(TournamentError::InvalidState));
    assert_eq!(t.knockout.len(), rounds);
}
