// src/allocation/allocator.rs
use crate::allocation::grouping::create_allocation_groups;
use crate::allocation::report::build_report;
use crate::allocation::roster::Roster;
use crate::allocation::stratified::allocate_teams_stratified;
use crate::allocation::structure::build_team_shells;
use crate::config::allocation::AllocationSettings;
use crate::models::report::AllocationOutcome;

/// Runs the whole allocation pipeline for one roster
pub struct TeamAllocator {
    settings: AllocationSettings,
}

impl TeamAllocator {
    pub fn new(settings: AllocationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AllocationSettings {
        &self.settings
    }

    /// Group the available players, size the teams, and place every group.
    ///
    /// A roster with no available players is reported as
    /// `AllocationOutcome::NothingToAllocate` rather than an error.
    pub fn allocate(&self, roster: &Roster) -> AllocationOutcome {
        let available = roster.available_players();
        if available.is_empty() {
            tracing::warn!("No available players among {} roster entries", roster.len());
            return AllocationOutcome::NothingToAllocate {
                total_players: roster.len(),
            };
        }

        tracing::info!("Processing {} available players", available.len());

        let groups = create_allocation_groups(&available, &self.settings.coach_pairings);
        let teams = build_team_shells(&groups, self.settings.ideal_team_size);
        let allocation = allocate_teams_stratified(&groups, teams, &self.settings);

        AllocationOutcome::Allocated(build_report(roster, &groups, &allocation))
    }
}
