// src/allocation/structure.rs
use crate::models::allocation::{AllocationGroup, Team, CORE_PODS};

/// Build empty teams for each core pod, enough to seat its players at the
/// ideal team size. Red teams come first, then Blue.
pub fn build_team_shells(groups: &[AllocationGroup], ideal_team_size: usize) -> Vec<Team> {
    let mut teams = Vec::new();

    for pod in CORE_PODS {
        let headcount: usize = groups.iter().map(|g| g.composition.count(pod)).sum();
        if headcount == 0 || ideal_team_size == 0 {
            continue;
        }

        let team_count = headcount.div_ceil(ideal_team_size);
        tracing::info!("{} {} players need {} teams", headcount, pod, team_count);

        teams.extend((1..=team_count).map(|number| Team::new(pod, number)));
    }

    teams
}
