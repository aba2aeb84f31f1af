// src/models/report.rs
use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Team label for roster players whose group could not be placed
pub const NOT_ASSIGNED: &str = "Not Assigned";

/// One row of the allocation result, one per roster player
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlayerAllocation {
    pub key: String,
    pub team: String,
    pub available: i64,
    pub pod: String,
    pub tier: i64,
}

/// Final shape of a team after all phases
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub name: String,
    pub color: String,
    pub size: usize,
    pub composition: BTreeMap<String, usize>,
    pub has_tentpole: bool,
    pub players: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AllocationReport {
    pub allocations: Vec<PlayerAllocation>,
    pub total_players: usize,
    pub available_players: usize,
    pub assigned_players: usize,
    pub unassigned_players: usize,
    pub teams: Vec<TeamSummary>,
}

/// Result of one allocation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// The roster had no available players
    NothingToAllocate { total_players: usize },
    Allocated(AllocationReport),
}
