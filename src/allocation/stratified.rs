// src/allocation/stratified.rs
use std::cmp::Reverse;

use crate::config::allocation::AllocationSettings;
use crate::models::allocation::{AllocationGroup, Assignments, Team};

/// Teams and assignments after every phase has run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StratifiedAllocation {
    pub teams: Vec<Team>,
    pub assignments: Assignments,
    /// Indices of groups no phase could place
    pub unplaced: Vec<usize>,
}

/// Place every group onto one of `teams` in four phases:
///
/// 1. Red and Blue groups onto teams of their own color.
/// 2. Groups with green players, capped per team.
/// 3. Green groups the cap turned away, with the cap dropped.
/// 4. Everything else.
///
/// The team size cap holds in every phase. A group that cannot be placed is
/// logged and left out of the assignments; the run still completes.
pub fn allocate_teams_stratified(
    groups: &[AllocationGroup],
    mut teams: Vec<Team>,
    settings: &AllocationSettings,
) -> StratifiedAllocation {
    let mut assignments = Assignments::default();

    let deferred = place_core_groups(groups, &mut teams, &mut assignments, settings);

    let filler: Vec<usize> = deferred
        .into_iter()
        .chain((0..groups.len()).filter(|&index| !groups[index].is_core()))
        .collect();

    for team in teams.iter_mut() {
        team.recount(groups);
    }

    let (green, remaining): (Vec<usize>, Vec<usize>) = filler
        .into_iter()
        .partition(|&index| groups[index].has_green());

    let relaxation_pool = place_green_groups(groups, green, &mut teams, &mut assignments, settings);
    let mut unplaced = relax_green_groups(groups, relaxation_pool, &mut teams, &mut assignments, settings);
    unplaced.extend(place_remaining_groups(groups, remaining, &mut teams, &mut assignments, settings));

    tracing::info!(
        "Allocation finished: {} players assigned across {} teams, {} groups unplaced",
        assignments.len(),
        teams.len(),
        unplaced.len()
    );

    StratifiedAllocation {
        teams,
        assignments,
        unplaced,
    }
}

/// Phase 1: core groups, largest first, onto the emptiest team of their color.
///
/// Returns the groups that found no team with room.
pub fn place_core_groups(
    groups: &[AllocationGroup],
    teams: &mut [Team],
    assignments: &mut Assignments,
    settings: &AllocationSettings,
) -> Vec<usize> {
    let core: Vec<usize> = (0..groups.len()).filter(|&index| groups[index].is_core()).collect();
    let mut deferred = Vec::new();

    for index in largest_first(groups, core) {
        let group = &groups[index];
        let best = teams
            .iter()
            .enumerate()
            .filter(|(_, team)| team.color == group.primary_pod)
            .filter(|(_, team)| team.has_room_for(group, settings.max_team_size))
            .min_by_key(|(_, team)| team.size)
            .map(|(position, _)| position);

        match best {
            Some(position) => place(&mut teams[position], index, group, assignments),
            None => {
                tracing::debug!(
                    "No {} team has room for group {:?}, deferring",
                    group.primary_pod,
                    group.keys
                );
                deferred.push(index);
            }
        }
    }

    deferred
}

/// Phase 2: groups with green players, keeping each team at or under the
/// green cap. Prefers teams with the most red players, then the smallest.
///
/// Returns the groups the cap turned away.
pub fn place_green_groups(
    groups: &[AllocationGroup],
    pool: Vec<usize>,
    teams: &mut [Team],
    assignments: &mut Assignments,
    settings: &AllocationSettings,
) -> Vec<usize> {
    let mut relaxation_pool = Vec::new();

    for index in largest_first(groups, pool) {
        let group = &groups[index];
        let green = group.green_count();
        let best = teams
            .iter()
            .enumerate()
            .filter(|(_, team)| team.has_room_for(group, settings.max_team_size))
            .filter(|(_, team)| team.green_count + green <= settings.max_green_per_team)
            .min_by_key(|(_, team)| (Reverse(team.red_count), team.size))
            .map(|(position, _)| position);

        match best {
            Some(position) => {
                let team = &mut teams[position];
                team.green_count += green;
                team.red_count += group.red_count();
                place(team, index, group, assignments);
            }
            None => relaxation_pool.push(index),
        }
    }

    relaxation_pool
}

/// Phase 3: green groups placed without the green cap, onto the team with
/// the fewest green players. Each placement is logged as a cap violation.
///
/// Returns the groups no team had room for.
pub fn relax_green_groups(
    groups: &[AllocationGroup],
    pool: Vec<usize>,
    teams: &mut [Team],
    assignments: &mut Assignments,
    settings: &AllocationSettings,
) -> Vec<usize> {
    let mut unplaced = Vec::new();

    for index in largest_first(groups, pool) {
        let group = &groups[index];
        let best = teams
            .iter()
            .enumerate()
            .filter(|(_, team)| team.has_room_for(group, settings.max_team_size))
            .min_by_key(|(_, team)| (team.green_count, Reverse(team.red_count), team.size))
            .map(|(position, _)| position);

        match best {
            Some(position) => {
                let team = &mut teams[position];
                team.green_count += group.green_count();
                team.red_count += group.red_count();
                place(team, index, group, assignments);
                tracing::warn!(
                    "Green cap violated. Assigned group {:?} to {}, which now has {} green players.",
                    group.keys,
                    team.name,
                    team.green_count
                );
            }
            None => {
                tracing::error!(
                    "Could not place group {:?} even after relaxing constraints.",
                    group.keys
                );
                unplaced.push(index);
            }
        }
    }

    unplaced
}

/// Phase 4: the remaining groups, spreading pink players and team sizes
/// evenly. Red teams win a full tie.
///
/// Returns the groups no team had room for.
pub fn place_remaining_groups(
    groups: &[AllocationGroup],
    pool: Vec<usize>,
    teams: &mut [Team],
    assignments: &mut Assignments,
    settings: &AllocationSettings,
) -> Vec<usize> {
    let mut unplaced = Vec::new();

    for index in largest_first(groups, pool) {
        let group = &groups[index];
        let best = teams
            .iter()
            .enumerate()
            .filter(|(_, team)| team.has_room_for(group, settings.max_team_size))
            .min_by_key(|(_, team)| (team.pink_count, team.size, !team.is_red()))
            .map(|(position, _)| position);

        match best {
            Some(position) => {
                let team = &mut teams[position];
                team.pink_count += group.pink_count();
                place(team, index, group, assignments);
            }
            None => {
                tracing::error!("Could not place remaining filler group {:?}.", group.keys);
                unplaced.push(index);
            }
        }
    }

    unplaced
}

/// Stable sort by group size, largest first
fn largest_first(groups: &[AllocationGroup], mut pool: Vec<usize>) -> Vec<usize> {
    pool.sort_by_key(|&index| Reverse(groups[index].size));
    pool
}

fn place(team: &mut Team, index: usize, group: &AllocationGroup, assignments: &mut Assignments) {
    team.size += group.size;
    team.groups.push(index);
    assignments.assign_group(group, &team.name);
}
