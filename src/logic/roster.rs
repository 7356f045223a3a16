//! Roster building: pad the field, draw groups, schedule the group stage.

use crate::constants::{GROUP_SIZE, GROUP_STAGE_DAYS, MIN_PARTICIPANTS};
use crate::models::{GameMatch, Group, GroupId, GroupStageSchedule, Participant, TournamentError};
use rand::Rng;
use std::collections::HashSet;
use uuid::{Builder, Uuid};

/// Fresh prefix for placeholder names; can't collide with a real entrant.
pub fn default_placeholder_prefix() -> String {
    format!("{}-", Uuid::new_v4())
}

/// Same shape as `default_placeholder_prefix`, but drawn from `rng` so a seeded
/// run gets the same placeholder names every time.
pub fn seeded_placeholder_prefix<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}-", Builder::from_random_bytes(rng.gen()).into_uuid())
}

/// Warning text listing injected placeholders, or None if none were needed.
pub fn placeholder_notice(injected: &[Participant], target: usize) -> Option<String> {
    if injected.is_empty() {
        return None;
    }
    let names: Vec<&str> = injected.iter().map(|p| p.name.as_str()).collect();
    Some(format!(
        "Added {} placeholder participant(s) to reach {}: {}",
        injected.len(),
        target,
        names.join(", ")
    ))
}

/// Validate the entrant list and pad it with placeholders up to the next power of two.
///
/// Placeholders are named `placeholder_prefix` + index and appended after the real
/// participants. Injected placeholders are reported with a warning.
pub fn pad_to_bracket_size<I, S>(
    participants: I,
    placeholder_prefix: &str,
) -> Result<Vec<Participant>, TournamentError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut padded = Vec::new();
    for name in participants {
        let name = name.into();
        if !seen.insert(name.clone()) {
            return Err(TournamentError::DuplicateParticipant(name));
        }
        padded.push(Participant::new(name));
    }
    if padded.len() < MIN_PARTICIPANTS {
        return Err(TournamentError::InsufficientParticipants { got: padded.len() });
    }

    let target = padded.len().next_power_of_two();
    let mut injected = Vec::with_capacity(target - padded.len());
    for i in 0..target - padded.len() {
        let name = format!("{}{}", placeholder_prefix, i);
        if !seen.insert(name.clone()) {
            return Err(TournamentError::DuplicateParticipant(name));
        }
        injected.push(Participant::placeholder(name));
    }
    if let Some(notice) = placeholder_notice(&injected, target) {
        log::warn!("{}", notice);
    }
    padded.extend(injected);
    Ok(padded)
}

/// Draw participants into groups of four, uniformly at random.
///
/// Each participant goes to a random group that still has room; a group leaves the
/// draw as soon as it is full. Groups are labelled A, B, ... in index order.
pub fn partition_into_groups<R: Rng + ?Sized>(
    participants: &[Participant],
    rng: &mut R,
) -> Result<Vec<Group>, TournamentError> {
    if participants.len() % GROUP_SIZE != 0 {
        return Err(TournamentError::InvalidGroupCount {
            participants: participants.len(),
        });
    }
    let mut groups: Vec<Group> = (0..participants.len() / GROUP_SIZE)
        .map(|i| Group::new(GroupId(i)))
        .collect();
    let mut open: Vec<usize> = (0..groups.len()).collect();

    for participant in participants {
        if open.is_empty() {
            return Err(TournamentError::GroupAssignmentInvariantViolation);
        }
        let slot = rng.gen_range(0..open.len());
        let group = &mut groups[open[slot]];
        group.add_member(participant.clone());
        if group.is_full() {
            open.swap_remove(slot);
        }
    }

    if groups.iter().any(|g| !g.is_full()) {
        return Err(TournamentError::GroupAssignmentInvariantViolation);
    }
    Ok(groups)
}

/// Schedule each group's six pairings on six distinct days, drawn independently per group.
///
/// A participant's rest days are not balanced: two of its matches may fall on
/// consecutive days.
pub fn build_group_stage_schedule<R: Rng + ?Sized>(
    groups: &[Group],
    rng: &mut R,
) -> Result<GroupStageSchedule, TournamentError> {
    let mut schedule = GroupStageSchedule::new();
    for group in groups {
        if !group.is_full() {
            return Err(TournamentError::GroupAssignmentInvariantViolation);
        }
        let mut days: Vec<u32> = (1..=GROUP_STAGE_DAYS).collect();
        let members: Vec<&Participant> = group.members().collect();
        for (i, home) in members.iter().enumerate() {
            for away in &members[i + 1..] {
                let day = days.swap_remove(rng.gen_range(0..days.len()));
                schedule.insert(GameMatch::group_stage(
                    group.id,
                    (*home).clone(),
                    (*away).clone(),
                    day,
                ));
            }
        }
    }
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn names(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Team {i}")).collect()
    }

    #[test]
    fn padding_reaches_next_power_of_two() {
        for n in 8..=70 {
            let padded = pad_to_bracket_size(names(n), "pad-").unwrap();
            assert!(padded.len().is_power_of_two());
            assert!(padded.len() >= n);
            assert!(padded.len() < 2 * n);
            assert_eq!(padded.iter().filter(|p| !p.is_placeholder()).count(), n);
        }
    }

    #[test]
    fn power_of_two_input_gets_no_placeholders() {
        for n in [8, 16, 32, 64] {
            let padded = pad_to_bracket_size(names(n), "pad-").unwrap();
            assert_eq!(padded.len(), n);
            assert!(padded.iter().all(|p| !p.is_placeholder()));
        }
    }

    #[test]
    fn placeholders_use_prefix_and_index() {
        let padded = pad_to_bracket_size(names(13), "pad-").unwrap();
        let placeholders: Vec<_> = padded.iter().filter(|p| p.is_placeholder()).collect();
        assert_eq!(placeholders.len(), 3);
        assert_eq!(placeholders[0].name, "pad-0");
        assert_eq!(placeholders[2].name, "pad-2");
    }

    #[test]
    fn notice_lists_injected_placeholders() {
        let padded = pad_to_bracket_size(names(13), "pad-").unwrap();
        let injected: Vec<_> = padded.into_iter().filter(|p| p.is_placeholder()).collect();
        assert_eq!(
            placeholder_notice(&injected, 16).as_deref(),
            Some("Added 3 placeholder participant(s) to reach 16: pad-0, pad-1, pad-2")
        );
        assert_eq!(placeholder_notice(&[], 16), None);
    }

    #[test]
    fn seeded_prefix_is_reproducible() {
        let mut a = StdRng::seed_from_u64(8);
        let mut b = StdRng::seed_from_u64(8);
        let prefix = seeded_placeholder_prefix(&mut a);
        assert_eq!(prefix, seeded_placeholder_prefix(&mut b));
        assert_eq!(prefix.len(), 37);
        assert!(prefix.ends_with('-'));
        assert_ne!(prefix, seeded_placeholder_prefix(&mut a));
    }

    #[test]
    fn fewer_than_eight_is_rejected() {
        assert_eq!(
            pad_to_bracket_size(names(7), "pad-"),
            Err(TournamentError::InsufficientParticipants { got: 7 })
        );
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut list = names(8);
        list.push("Team 3".to_string());
        assert_eq!(
            pad_to_bracket_size(list, "pad-"),
            Err(TournamentError::DuplicateParticipant("Team 3".into()))
        );
    }

    #[test]
    fn partition_requires_multiple_of_four() {
        let field: Vec<_> = names(10).into_iter().map(Participant::new).collect();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            partition_into_groups(&field, &mut rng),
            Err(TournamentError::InvalidGroupCount { participants: 10 })
        );
    }

    #[test]
    fn partition_covers_field_exactly_once() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in [8, 16, 32, 64] {
            let field: Vec<_> = names(n).into_iter().map(Participant::new).collect();
            let groups = partition_into_groups(&field, &mut rng).unwrap();
            assert_eq!(groups.len(), n / 4);
            assert!(groups.iter().all(|g| g.len() == 4));
            let mut drawn: Vec<_> = groups.iter().flat_map(|g| g.members().cloned()).collect();
            drawn.sort();
            let mut expected = field.clone();
            expected.sort();
            assert_eq!(drawn, expected);
            for (i, g) in groups.iter().enumerate() {
                assert_eq!(g.id, GroupId(i));
            }
        }
    }

    #[test]
    fn each_group_plays_one_match_per_day() {
        let mut rng = StdRng::seed_from_u64(11);
        let field: Vec<_> = names(32).into_iter().map(Participant::new).collect();
        let groups = partition_into_groups(&field, &mut rng).unwrap();
        let schedule = build_group_stage_schedule(&groups, &mut rng).unwrap();

        for (day, games) in schedule.days() {
            assert!((1..=GROUP_STAGE_DAYS).contains(&day));
            assert_eq!(games.len(), groups.len());
            let mut seen: Vec<_> = games.iter().filter_map(|m| m.group).collect();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), groups.len());
        }
        for group in &groups {
            let mut pairs: Vec<_> = schedule
                .matches()
                .filter(|m| m.group == Some(group.id))
                .map(|m| {
                    let mut pair = [m.home.name.clone(), m.away.name.clone()];
                    pair.sort();
                    pair
                })
                .collect();
            assert_eq!(pairs.len(), 6);
            pairs.sort();
            pairs.dedup();
            assert_eq!(pairs.len(), 6);
        }
    }
}
