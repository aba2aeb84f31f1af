// src/models/player.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIER: i64 = 2;
pub const UNKNOWN_POD: &str = "Unknown";

/// A roster entry after normalization. Every field is guaranteed present.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub key: String,
    pub available: i64,
    pub is_tentpole: bool,
    /// Key of the player this one asked to play with, matched case-insensitively
    pub paired_with: String,
    pub tier: i64,
    pub coach: String,
    pub pod: String,
}

impl Player {
    pub fn new(key: impl Into<String>, pod: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            available: 1,
            is_tentpole: false,
            paired_with: String::new(),
            tier: DEFAULT_TIER,
            coach: String::new(),
            pod: pod.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.available == 1
    }

    pub fn paired_with(mut self, partner: impl Into<String>) -> Self {
        self.paired_with = partner.into();
        self
    }

    pub fn coached_by(mut self, coach: impl Into<String>) -> Self {
        self.coach = coach.into();
        self
    }

    pub fn tentpole(mut self) -> Self {
        self.is_tentpole = true;
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = 0;
        self
    }
}
