// src/allocation/grouping.rs
use std::collections::HashMap;

use crate::allocation::union_find::UnionFind;
use crate::config::allocation::CoachPairing;
use crate::models::allocation::AllocationGroup;
use crate::models::player::Player;

/// Partition available players into groups that must share a team.
///
/// Players are joined when one names the other in `paired_with` (matched
/// case-insensitively), and when their coaches are listed together in
/// `coach_pairings`. Groups come out in the roster order of their first member.
pub fn create_allocation_groups(
    players: &[&Player],
    coach_pairings: &[CoachPairing],
) -> Vec<AllocationGroup> {
    let mut sets = UnionFind::new(players.iter().map(|p| p.key.as_str()));

    link_social_pairs(&mut sets, players);
    link_coach_pairs(&mut sets, players, coach_pairings);

    let by_key: HashMap<&str, &Player> = players
        .iter()
        .map(|p| (p.key.as_str(), *p))
        .collect();

    let groups: Vec<AllocationGroup> = sets
        .sets()
        .iter()
        .map(|keys| {
            let members: Vec<&Player> = keys
                .iter()
                .filter_map(|key| by_key.get(key.as_str()).copied())
                .collect();
            AllocationGroup::from_members(&members)
        })
        .collect();

    tracing::debug!(
        "Formed {} allocation groups from {} available players",
        groups.len(),
        players.len()
    );

    groups
}

fn link_social_pairs(sets: &mut UnionFind, players: &[&Player]) {
    let key_by_name: HashMap<String, &str> = players
        .iter()
        .map(|p| (p.key.to_lowercase(), p.key.as_str()))
        .collect();

    for player in players {
        if player.paired_with.is_empty() {
            continue;
        }
        match key_by_name.get(&player.paired_with.to_lowercase()) {
            Some(partner) => {
                sets.union(&player.key, partner);
            }
            None => {
                tracing::debug!(
                    "Ignoring pairing of '{}' with unknown or unavailable player '{}'",
                    player.key,
                    player.paired_with
                );
            }
        }
    }
}

fn link_coach_pairs(sets: &mut UnionFind, players: &[&Player], coach_pairings: &[CoachPairing]) {
    if coach_pairings.is_empty() {
        return;
    }

    let mut kids_by_coach: HashMap<&str, Vec<&str>> = HashMap::new();
    for player in players.iter().filter(|p| !p.coach.is_empty()) {
        kids_by_coach
            .entry(player.coach.as_str())
            .or_default()
            .push(player.key.as_str());
    }

    for pairing in coach_pairings {
        let (Some(first_kids), Some(second_kids)) = (
            kids_by_coach.get(pairing.coach_a.as_str()),
            kids_by_coach.get(pairing.coach_b.as_str()),
        ) else {
            continue;
        };

        let anchor = first_kids[0];
        for kid in first_kids[1..].iter().chain(second_kids.iter()) {
            sets.union(anchor, kid);
        }

        tracing::debug!(
            "Merged kids of coaches '{}' and '{}' into one group",
            pairing.coach_a,
            pairing.coach_b
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of(group: &AllocationGroup) -> Vec<&str> {
        group.keys.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_unpaired_players_form_singletons() {
        let players = vec![Player::new("a", "Red"), Player::new("b", "Blue")];
        let refs: Vec<&Player> = players.iter().collect();
        let groups = create_allocation_groups(&refs, &[]);

        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.size == 1));
    }

    #[test]
    fn test_mutual_pair_with_mixed_pods() {
        let players = vec![
            Player::new("A", "Green").paired_with("B"),
            Player::new("B", "Red").paired_with("A"),
        ];
        let refs: Vec<&Player> = players.iter().collect();
        let groups = create_allocation_groups(&refs, &[]);

        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.size, 2);
        assert_eq!(group.composition.category_count(), 2);
        assert_eq!(group.primary_pod, "Green");
    }

    #[test]
    fn test_pairing_is_case_insensitive_and_transitive() {
        let players = vec![
            Player::new("Ann", "Red").paired_with("BOB"),
            Player::new("Bob", "Red"),
            Player::new("Cat", "Blue").paired_with("bob"),
            Player::new("Dan", "Blue"),
        ];
        let refs: Vec<&Player> = players.iter().collect();
        let groups = create_allocation_groups(&refs, &[]);

        assert_eq!(groups.len(), 2);
        assert_eq!(keys_of(&groups[0]), vec!["Ann", "Bob", "Cat"]);
        assert_eq!(groups[0].primary_pod, "Red");
        assert_eq!(keys_of(&groups[1]), vec!["Dan"]);
    }

    #[test]
    fn test_dangling_pairing_is_ignored() {
        let players = vec![Player::new("Ann", "Red").paired_with("Nobody")];
        let refs: Vec<&Player> = players.iter().collect();
        let groups = create_allocation_groups(&refs, &[]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].size, 1);
    }

    #[test]
    fn test_coach_pairing_merges_both_coaches_kids() {
        let players = vec![
            Player::new("k1", "Red").coached_by("Coach A"),
            Player::new("k2", "Red"),
            Player::new("k3", "Blue").coached_by("Coach B"),
            Player::new("k4", "Red").coached_by("Coach A"),
            Player::new("k5", "Blue").coached_by("Coach C"),
        ];
        let refs: Vec<&Player> = players.iter().collect();
        let pairings = vec![CoachPairing::new("Coach A", "Coach B")];
        let groups = create_allocation_groups(&refs, &pairings);

        assert_eq!(groups.len(), 3);
        assert_eq!(keys_of(&groups[0]), vec!["k1", "k3", "k4"]);
        assert_eq!(keys_of(&groups[1]), vec!["k2"]);
        assert_eq!(keys_of(&groups[2]), vec!["k5"]);
    }

    #[test]
    fn test_coach_pairing_needs_kids_on_both_sides() {
        let players = vec![
            Player::new("k1", "Red").coached_by("Coach A"),
            Player::new("k2", "Red").coached_by("Coach A"),
        ];
        let refs: Vec<&Player> = players.iter().collect();
        let pairings = vec![CoachPairing::new("Coach A", "Coach Z")];
        let groups = create_allocation_groups(&refs, &pairings);

        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_tentpole_flag_propagates_to_group() {
        let players = vec![
            Player::new("a", "Red").paired_with("b"),
            Player::new("b", "Red").tentpole(),
            Player::new("c", "Red"),
        ];
        let refs: Vec<&Player> = players.iter().collect();
        let groups = create_allocation_groups(&refs, &[]);

        assert!(groups[0].is_tentpole_group);
        assert!(!groups[1].is_tentpole_group);
    }

    #[test]
    fn test_empty_roster_yields_no_groups() {
        assert!(create_allocation_groups(&[], &[]).is_empty());
    }
}
