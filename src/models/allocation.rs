// src/models/allocation.rs
use std::collections::HashMap;

use crate::models::player::{Player, UNKNOWN_POD};

pub const RED_POD: &str = "Red";
pub const BLUE_POD: &str = "Blue";
pub const GREEN_POD: &str = "Green";
pub const PINK_POD: &str = "Pink";

/// Pods that get teams of their own, in team creation order
pub const CORE_PODS: [&str; 2] = [RED_POD, BLUE_POD];

pub fn is_core_pod(pod: &str) -> bool {
    CORE_PODS.contains(&pod)
}

/// Pod headcounts, kept in the order each pod was first seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodComposition {
    counts: Vec<(String, usize)>,
}

impl PodComposition {
    pub fn from_pods<'a>(pods: impl IntoIterator<Item = &'a str>) -> Self {
        let mut composition = Self::default();
        for pod in pods {
            composition.add(pod, 1);
        }
        composition
    }

    pub fn add(&mut self, pod: &str, count: usize) {
        match self.counts.iter_mut().find(|(name, _)| name == pod) {
            Some((_, existing)) => *existing += count,
            None => self.counts.push((pod.to_string(), count)),
        }
    }

    pub fn merge(&mut self, other: &PodComposition) {
        for (pod, count) in &other.counts {
            self.add(pod, *count);
        }
    }

    pub fn count(&self, pod: &str) -> usize {
        self.counts
            .iter()
            .find(|(name, _)| name == pod)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn contains(&self, pod: &str) -> bool {
        self.count(pod) > 0
    }

    /// Most frequent pod. A tie goes to whichever pod was seen first.
    pub fn primary_pod(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.counts {
            if best.map_or(true, |(_, count)| entry.1 > *count) {
                best = Some(entry);
            }
        }
        best.map(|(pod, _)| pod.as_str())
    }

    pub fn category_count(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(pod, count)| (pod.as_str(), *count))
    }
}

/// Players that have to be placed on the same team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationGroup {
    pub keys: Vec<String>,
    pub size: usize,
    pub is_tentpole_group: bool,
    pub composition: PodComposition,
    pub primary_pod: String,
}

impl AllocationGroup {
    pub fn from_members(members: &[&Player]) -> Self {
        let composition = PodComposition::from_pods(members.iter().map(|p| p.pod.as_str()));
        let primary_pod = composition
            .primary_pod()
            .unwrap_or(UNKNOWN_POD)
            .to_string();

        Self {
            keys: members.iter().map(|p| p.key.clone()).collect(),
            size: members.len(),
            is_tentpole_group: members.iter().any(|p| p.is_tentpole),
            composition,
            primary_pod,
        }
    }

    pub fn has_green(&self) -> bool {
        self.composition.contains(GREEN_POD)
    }

    pub fn green_count(&self) -> usize {
        self.composition.count(GREEN_POD)
    }

    pub fn red_count(&self) -> usize {
        self.composition.count(RED_POD)
    }

    pub fn pink_count(&self) -> usize {
        self.composition.count(PINK_POD)
    }

    pub fn is_core(&self) -> bool {
        is_core_pod(&self.primary_pod)
    }
}

/// A team being filled by the assignment phases.
///
/// `groups` holds indices into the group list the team was allocated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub color: String,
    pub size: usize,
    pub red_count: usize,
    pub green_count: usize,
    pub pink_count: usize,
    pub groups: Vec<usize>,
}

impl Team {
    pub fn new(color: &str, number: usize) -> Self {
        Self {
            name: format!("{} Team {}", color, number),
            color: color.to_string(),
            size: 0,
            red_count: 0,
            green_count: 0,
            pink_count: 0,
            groups: Vec::new(),
        }
    }

    pub fn has_room_for(&self, group: &AllocationGroup, max_team_size: usize) -> bool {
        self.size + group.size <= max_team_size
    }

    pub fn is_red(&self) -> bool {
        self.color == RED_POD
    }

    /// Rebuild the pod counters from the groups placed so far
    pub fn recount(&mut self, groups: &[AllocationGroup]) {
        let placed: Vec<&AllocationGroup> = self.groups.iter().map(|&index| &groups[index]).collect();
        self.red_count = placed.iter().map(|g| g.red_count()).sum();
        self.green_count = placed.iter().map(|g| g.green_count()).sum();
        self.pink_count = placed.iter().map(|g| g.pink_count()).sum();
    }
}

/// Player key to team name for every placed player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignments(HashMap<String, String>);

impl Assignments {
    pub fn assign_group(&mut self, group: &AllocationGroup, team_name: &str) {
        for key in &group.keys {
            self.0.insert(key.clone(), team_name.to_string());
        }
    }

    pub fn team_for(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_assigned(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, team)| (key.as_str(), team.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_pod_prefers_majority() {
        let composition = PodComposition::from_pods(["Blue", "Red", "Red"]);
        assert_eq!(composition.primary_pod(), Some("Red"));
        assert_eq!(composition.count("Red"), 2);
        assert_eq!(composition.count("Green"), 0);
    }

    #[test]
    fn test_primary_pod_tie_goes_to_first_seen() {
        let composition = PodComposition::from_pods(["Green", "Blue", "Blue", "Green"]);
        assert_eq!(composition.primary_pod(), Some("Green"));
    }

    #[test]
    fn test_empty_composition_has_no_primary_pod() {
        assert_eq!(PodComposition::default().primary_pod(), None);
    }

    #[test]
    fn test_group_attributes() {
        let a = Player::new("a", "Green").tentpole();
        let b = Player::new("b", "Red");
        let group = AllocationGroup::from_members(&[&a, &b]);

        assert_eq!(group.size, 2);
        assert!(group.is_tentpole_group);
        assert!(group.has_green());
        assert_eq!(group.primary_pod, "Green");
        assert!(!group.is_core());
    }

    #[test]
    fn test_team_recount() {
        let groups = vec![
            AllocationGroup::from_members(&[&Player::new("a", "Red"), &Player::new("b", "Green")]),
            AllocationGroup::from_members(&[&Player::new("c", "Pink")]),
        ];
        let mut team = Team::new("Red", 1);
        team.groups = vec![0, 1];
        team.recount(&groups);

        assert_eq!(team.name, "Red Team 1");
        assert_eq!((team.red_count, team.green_count, team.pink_count), (1, 1, 1));
    }
}
