//! Format constants for the group stage and knockout bracket.

/// Participants per group.
pub const GROUP_SIZE: usize = 4;

/// Smallest field that produces at least two groups.
pub const MIN_PARTICIPANTS: usize = 8;

/// Every pairing within a group of four gets its own day, so the group stage
/// lasts as many days as there are pairings: C(4, 2) = 6.
pub const GROUP_STAGE_DAYS: u32 = 6;

/// Knockout rounds are numbered on from the last group-stage day.
pub const FIRST_KNOCKOUT_ROUND: u32 = GROUP_STAGE_DAYS + 1;

/// Upper bound (inclusive) for the total goals scored in one match.
pub const MAX_GOALS: u32 = 10;

/// Paired kicks in a shootout before sudden death.
pub const SHOOTOUT_KICKS: u32 = 5;

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;
