//! Plain-text rendering of groups, schedules, standings, knockout rounds and the podium.

use crate::models::{
    GameMatch, Group, GroupStageSchedule, KnockoutRound, MatchResult, MatchRole, Podium,
    Resolution, Tournament,
};
use std::fmt::Write;

/// `[Group A] - X v. Y : 2 - 1`, or `: not played`.
pub fn match_line(game: &GameMatch) -> String {
    let result = match game.result {
        MatchResult::Unplayed => "not played".to_string(),
        MatchResult::Group { score } => score.to_string(),
        MatchResult::Knockout {
            score,
            resolution: Resolution::Regulation,
        } => score.to_string(),
        MatchResult::Knockout {
            score,
            resolution: Resolution::Penalties { shootout },
        } => format!("{} ({} on penalties)", score, shootout),
    };
    format!("{} : {}", game.describe(), result)
}

pub fn groups(groups: &[Group]) -> String {
    let mut out = String::new();
    for group in groups {
        let members: Vec<&str> = group.members().map(|p| p.name.as_str()).collect();
        let _ = writeln!(out, "{}: {}", group.id, members.join(", "));
    }
    out
}

pub fn group_schedule(schedule: &GroupStageSchedule) -> String {
    let mut out = String::new();
    for (day, games) in schedule.days() {
        out.push_str(&day_schedule(day, games));
    }
    out
}

pub fn day_schedule(day: u32, games: &[GameMatch]) -> String {
    let mut out = format!("Day {} games:\n", day);
    for game in games {
        let _ = writeln!(out, "{}", match_line(game));
    }
    out
}

/// Points table per group, highest first.
pub fn standings(groups: &[Group]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{}:", group.id);
        for (pos, standing) in group.ranked().iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} - {} pts",
                pos + 1,
                standing.participant,
                standing.points
            );
        }
    }
    out
}

pub fn knockout_round(round: &KnockoutRound) -> String {
    let title = if round.matches.iter().any(|m| m.role == MatchRole::Final) {
        format!("Round {} (third place and final):\n", round.number)
    } else {
        format!("Round {}:\n", round.number)
    };
    let mut out = title;
    for game in &round.matches {
        let _ = writeln!(out, "{}", match_line(game));
    }
    out
}

pub fn podium(podium: &Podium) -> String {
    let mut out = String::new();
    for (rank, participant) in podium.entries() {
        let _ = writeln!(out, "{}. {}: {}", rank.position(), rank, participant);
    }
    out
}

/// Everything about a finished (or partly played) tournament.
pub fn tournament(tournament: &Tournament) -> String {
    let mut out = String::new();
    out.push_str("Groups:\n");
    out.push_str(&groups(&tournament.groups));
    out.push_str("Group stage:\n");
    out.push_str(&group_schedule(&tournament.group_schedule));
    out.push_str("Standings:\n");
    out.push_str(&standings(&tournament.groups));
    for round in tournament.knockout.rounds() {
        out.push_str(&knockout_round(round));
    }
    if !tournament.podium.is_empty() {
        out.push_str("Podium:\n");
        out.push_str(&podium(&tournament.podium));
    }
    out
}
