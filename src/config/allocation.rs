use serde::Deserialize;

/// Two coaches whose kids must always end up on the same team
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CoachPairing {
    pub coach_a: String,
    pub coach_b: String,
}

impl CoachPairing {
    pub fn new(coach_a: impl Into<String>, coach_b: impl Into<String>) -> Self {
        Self {
            coach_a: coach_a.into(),
            coach_b: coach_b.into(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct AllocationSettings {
    /// Carried for reporting only, no phase enforces it
    #[serde(default = "default_min_team_size")]
    pub min_team_size: usize,
    #[serde(default = "default_max_team_size")]
    pub max_team_size: usize,
    #[serde(default = "default_ideal_team_size")]
    pub ideal_team_size: usize,
    #[serde(default = "default_max_green_per_team")]
    pub max_green_per_team: usize,
    #[serde(default)]
    pub coach_pairings: Vec<CoachPairing>,
}

fn default_min_team_size() -> usize { 7 }
fn default_max_team_size() -> usize { 9 }
fn default_ideal_team_size() -> usize { 8 }
fn default_max_green_per_team() -> usize { 4 }

impl Default for AllocationSettings {
    fn default() -> Self {
        Self {
            min_team_size: default_min_team_size(),
            max_team_size: default_max_team_size(),
            ideal_team_size: default_ideal_team_size(),
            max_green_per_team: default_max_green_per_team(),
            coach_pairings: Vec::new(),
        }
    }
}

impl AllocationSettings {
    pub fn with_coach_pairings(mut self, coach_pairings: Vec<CoachPairing>) -> Self {
        self.coach_pairings = coach_pairings;
        self
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if self.ideal_team_size == 0 {
            return Err("ideal_team_size must be greater than 0".into());
        }

        if self.max_team_size == 0 {
            return Err("max_team_size must be greater than 0".into());
        }

        if self.min_team_size > self.max_team_size {
            return Err(format!(
                "min_team_size ({}) cannot exceed max_team_size ({})",
                self.min_team_size, self.max_team_size
            ));
        }

        for pairing in &self.coach_pairings {
            if pairing.coach_a.trim().is_empty() || pairing.coach_b.trim().is_empty() {
                return Err("coach_pairings entries need two non-empty coach names".into());
            }
        }

        Ok(())
    }
}
