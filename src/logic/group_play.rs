//! Group stage: play scheduled days, accrue points, resolve each group's top two.

use crate::constants::{GROUP_STAGE_DAYS, POINTS_FOR_DRAW, POINTS_FOR_WIN};
use crate::logic::bracket::build_initial_knockout_round;
use crate::logic::outcome::play_one_match;
use crate::models::{
    Group, GroupStageSchedule, MatchResult, Side, TopTwo, Tournament, TournamentError,
    TournamentState,
};
use rand::Rng;

/// Play every match scheduled on `day` and update group points.
///
/// Win = 3, draw = 1 each, loss = 0. Fails without playing anything if any match
/// on that day already has a result.
pub fn play_day<R: Rng + ?Sized>(
    groups: &mut [Group],
    schedule: &mut GroupStageSchedule,
    day: u32,
    rng: &mut R,
) -> Result<(), TournamentError> {
    let matches = schedule
        .day_mut(day)
        .ok_or(TournamentError::UnknownDay(day))?;
    if let Some(played) = matches.iter().find(|m| m.is_played()) {
        return Err(TournamentError::MatchAlreadyPlayed(played.describe()));
    }

    for game in matches.iter_mut() {
        let group_id = game.group.ok_or(TournamentError::InvalidState)?;
        let group = groups
            .get_mut(group_id.0)
            .ok_or_else(|| TournamentError::ParticipantNotFound(game.home.name.clone()))?;

        let score = play_one_match(rng);
        match score.leader() {
            Some(Side::Home) => group.award(&game.home, POINTS_FOR_WIN)?,
            Some(Side::Away) => group.award(&game.away, POINTS_FOR_WIN)?,
            None => {
                group.award(&game.home, POINTS_FOR_DRAW)?;
                group.award(&game.away, POINTS_FOR_DRAW)?;
            }
        }
        game.result = MatchResult::Group { score };
        log::debug!("{} : {}", game.describe(), score);
    }
    Ok(())
}

/// Play days 1..=6 in order.
pub fn play_all_days<R: Rng + ?Sized>(
    groups: &mut [Group],
    schedule: &mut GroupStageSchedule,
    rng: &mut R,
) -> Result<(), TournamentError> {
    for day in 1..=GROUP_STAGE_DAYS {
        play_day(groups, schedule, day, rng)?;
    }
    Ok(())
}

/// First and second place of a group, computed once and cached on the group.
///
/// Ranking is by points. Only a tie between second and third is broken, by a coin
/// flip; any other tie keeps assignment order. Later calls return the cached pair
/// and draw nothing.
pub fn resolve_top_two<R: Rng + ?Sized>(
    group: &mut Group,
    rng: &mut R,
) -> Result<TopTwo, TournamentError> {
    if let Some(top_two) = group.top_two() {
        return Ok(top_two.clone());
    }
    let ranked = group.ranked();
    if ranked.len() < 2 {
        return Err(TournamentError::GroupAssignmentInvariantViolation);
    }
    let first = ranked[0].participant.clone();
    let second = match ranked.get(2) {
        Some(third) if third.points == ranked[1].points && rng.gen_bool(0.5) => {
            third.participant.clone()
        }
        _ => ranked[1].participant.clone(),
    };
    Ok(group.resolve_once(TopTwo { first, second }).clone())
}

/// Play the next group-stage day. Returns true once day 6 is done, at which point
/// the round-7 bracket has been drawn and the tournament moves to the knockout stage.
pub fn play_group_day(tournament: &mut Tournament) -> Result<bool, TournamentError> {
    if tournament.state != TournamentState::GroupStage {
        return Err(TournamentError::InvalidState);
    }
    let day = tournament.days_played + 1;
    play_day(
        &mut tournament.groups,
        &mut tournament.group_schedule,
        day,
        &mut tournament.rng,
    )?;
    tournament.days_played = day;
    log::info!("Group stage day {} played", day);
    if day < GROUP_STAGE_DAYS {
        return Ok(false);
    }

    let first_round = build_initial_knockout_round(&mut tournament.groups, &mut tournament.rng)?;
    if !tournament.knockout.push(first_round) {
        return Err(TournamentError::InvalidState);
    }
    tournament.state = TournamentState::Knockout;
    log::info!("Group stage complete; knockout bracket drawn");
    Ok(true)
}

/// Play all remaining group-stage days.
pub fn play_group_stage(tournament: &mut Tournament) -> Result<(), TournamentError> {
    while !play_group_day(tournament)? {}
    Ok(())
}
