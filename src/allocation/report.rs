// src/allocation/report.rs
use std::collections::BTreeMap;

use crate::allocation::roster::Roster;
use crate::allocation::stratified::StratifiedAllocation;
use crate::models::allocation::{AllocationGroup, PodComposition, Team};
use crate::models::report::{AllocationReport, PlayerAllocation, TeamSummary, NOT_ASSIGNED};

/// Join the assignments back onto the full roster, unavailable players included
pub fn build_report(
    roster: &Roster,
    groups: &[AllocationGroup],
    allocation: &StratifiedAllocation,
) -> AllocationReport {
    let allocations: Vec<PlayerAllocation> = roster
        .players()
        .iter()
        .map(|player| PlayerAllocation {
            key: player.key.clone(),
            team: allocation
                .assignments
                .team_for(&player.key)
                .unwrap_or(NOT_ASSIGNED)
                .to_string(),
            available: player.available,
            pod: player.pod.clone(),
            tier: player.tier,
        })
        .collect();

    let available_players = roster.available_count();
    let assigned_players = roster
        .available_players()
        .iter()
        .filter(|p| allocation.assignments.is_assigned(&p.key))
        .count();

    AllocationReport {
        total_players: roster.len(),
        available_players,
        assigned_players,
        unassigned_players: available_players - assigned_players,
        teams: allocation
            .teams
            .iter()
            .map(|team| summarize_team(team, groups))
            .collect(),
        allocations,
    }
}

fn summarize_team(team: &Team, groups: &[AllocationGroup]) -> TeamSummary {
    let placed: Vec<&AllocationGroup> = team.groups.iter().map(|&index| &groups[index]).collect();

    let mut composition = PodComposition::default();
    for group in &placed {
        composition.merge(&group.composition);
    }

    TeamSummary {
        name: team.name.clone(),
        color: team.color.clone(),
        size: team.size,
        composition: composition
            .iter()
            .map(|(pod, count)| (pod.to_string(), count))
            .collect::<BTreeMap<_, _>>(),
        has_tentpole: placed.iter().any(|g| g.is_tentpole_group),
        players: placed.iter().flat_map(|g| g.keys.iter().cloned()).collect(),
    }
}
