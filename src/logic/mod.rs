//! Tournament business logic: roster, group stage, bracket, knockout, whole runs.

mod bracket;
mod group_play;
mod knockout;
mod outcome;
mod roster;
mod run;
mod setup;

pub use bracket::{build_initial_knockout_round, build_next_round};
pub use group_play::{play_all_days, play_day, play_group_day, play_group_stage, resolve_top_two};
pub use knockout::{play_knockout_round, play_knockout_stage, play_round};
pub use outcome::{coin_flip, goal_count, play_one_match, play_shootout};
pub use roster::{
    build_group_stage_schedule, default_placeholder_prefix, pad_to_bracket_size,
    partition_into_groups, placeholder_notice, seeded_placeholder_prefix,
};
pub use run::{attempt_seed, is_podium_legitimate, play_all, play_until_legitimate, start_attempt};
pub use setup::{start_seeded_tournament, start_tournament, start_tournament_with};
