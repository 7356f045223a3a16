//! World Cup style tournament simulator: random group draw, round-robin group stage,
//! randomized knockout bracket, penalty shootouts, podium.

pub mod config;
pub mod constants;
pub mod logic;
pub mod models;
pub mod render;
pub mod report;

pub use config::{Config, ConfigError, OutputFormat};
pub use logic::{
    build_group_stage_schedule, build_initial_knockout_round, build_next_round,
    is_podium_legitimate, pad_to_bracket_size, partition_into_groups, play_all, play_all_days,
    play_day, play_group_day, play_group_stage, play_knockout_round, play_knockout_stage,
    play_one_match, play_round, play_shootout, play_until_legitimate, resolve_top_two,
    start_attempt, start_seeded_tournament, start_tournament, start_tournament_with,
};
pub use models::{
    GameMatch, Group, GroupId, GroupStageSchedule, KnockoutRound, KnockoutSchedule, MatchId,
    MatchResult, MatchRole, Participant, Podium, Rank, Resolution, Score, Side, Standing, TopTwo,
    Tournament, TournamentError, TournamentId, TournamentState,
};
pub use report::TournamentReport;
