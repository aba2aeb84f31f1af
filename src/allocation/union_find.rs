// src/allocation/union_find.rs
use std::collections::HashMap;

/// Disjoint sets over string keys, stored as an index arena of parent pointers
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    index: HashMap<String, usize>,
    keys: Vec<String>,
    parent: Vec<usize>,
}

impl UnionFind {
    /// One singleton set per key. Repeated keys are ignored.
    pub fn new<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut sets = Self::default();
        for key in keys {
            if sets.index.contains_key(key) {
                continue;
            }
            let id = sets.keys.len();
            sets.index.insert(key.to_string(), id);
            sets.keys.push(key.to_string());
            sets.parent.push(id);
        }
        sets
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn find_index(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut current = id;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Representative key of the set holding `key`
    pub fn find(&mut self, key: &str) -> Option<&str> {
        let id = *self.index.get(key)?;
        let root = self.find_index(id);
        Some(self.keys[root].as_str())
    }

    /// Merge the sets of both keys. The root of `first` stays the root.
    ///
    /// Returns false when either key is unknown or both already share a set.
    pub fn union(&mut self, first: &str, second: &str) -> bool {
        let (Some(&a), Some(&b)) = (self.index.get(first), self.index.get(second)) else {
            return false;
        };
        let root_a = self.find_index(a);
        let root_b = self.find_index(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_b] = root_a;
        true
    }

    /// All sets, each listing keys in insertion order. Sets are ordered by
    /// their earliest inserted key.
    pub fn sets(&mut self) -> Vec<Vec<String>> {
        let mut slot_by_root: HashMap<usize, usize> = HashMap::new();
        let mut sets: Vec<Vec<String>> = Vec::new();

        for id in 0..self.keys.len() {
            let root = self.find_index(id);
            let slot = *slot_by_root.entry(root).or_insert_with(|| {
                sets.push(Vec::new());
                sets.len() - 1
            });
            sets[slot].push(self.keys[id].clone());
        }

        sets
    }
}
