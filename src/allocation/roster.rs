// src/allocation/roster.rs
use std::collections::{HashMap, HashSet};
use serde_json::Value;

use crate::models::player::{Player, DEFAULT_TIER, UNKNOWN_POD};

/// Columns every normalized record ends up with
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "key", "available", "istentpole", "pairedwith", "tier", "coach", "pod",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("No JSON payload provided")]
    MissingPayload,

    #[error("No players data provided")]
    NoPlayers,
}

/// Pull the raw player records out of a request body
pub fn parse_payload(body: &[u8]) -> Result<Vec<Value>, RosterError> {
    let payload: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Request body is not valid JSON: {}", e);
        RosterError::MissingPayload
    })?;

    let mut payload = match payload {
        Value::Object(fields) if !fields.is_empty() => fields,
        _ => return Err(RosterError::MissingPayload),
    };

    match payload.remove("players") {
        Some(Value::Array(players)) if !players.is_empty() => Ok(players),
        _ => Err(RosterError::NoPlayers),
    }
}

/// Every player with a usable key, plus the subset eligible for allocation
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
    available: Vec<usize>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        let players: Vec<Player> = players
            .into_iter()
            .filter(|p| !p.key.trim().is_empty())
            .collect();

        let mut seen = HashSet::new();
        let mut available = Vec::new();
        for (index, player) in players.iter().enumerate() {
            if !player.is_available() {
                continue;
            }
            if seen.insert(player.key.as_str()) {
                available.push(index);
            } else {
                tracing::warn!(
                    "Duplicate available player key '{}', only the first record is allocated",
                    player.key
                );
            }
        }

        Self { players, available }
    }

    /// Normalize untyped records, filling defaults for anything missing
    pub fn from_records(records: &[Value]) -> Self {
        let mut normalized: Vec<HashMap<String, &Value>> = Vec::with_capacity(records.len());
        let mut columns: HashSet<String> = HashSet::new();

        for (position, record) in records.iter().enumerate() {
            let Value::Object(fields) = record else {
                tracing::warn!("Skipping player record {}: expected a JSON object", position);
                continue;
            };
            let fields: HashMap<String, &Value> = fields
                .iter()
                .map(|(name, value)| (normalize_column(name), value))
                .collect();
            columns.extend(fields.keys().cloned());
            normalized.push(fields);
        }

        for column in REQUIRED_COLUMNS {
            if !columns.contains(column) {
                tracing::warn!("Column '{}' not found. Creating it with default values.", column);
            }
        }

        Self::new(normalized.iter().filter_map(player_from_fields).collect())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Available players in roster order, one per key
    pub fn available_players(&self) -> Vec<&Player> {
        self.available.iter().map(|&index| &self.players[index]).collect()
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }
}

fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

fn player_from_fields(fields: &HashMap<String, &Value>) -> Option<Player> {
    let key = text(fields, "key").unwrap_or_default();
    if key.is_empty() {
        return None;
    }

    Some(Player {
        key,
        available: number(fields, "available").unwrap_or(0),
        is_tentpole: field(fields, "istentpole")
            .map(|value| stringify(value).trim().eq_ignore_ascii_case("TRUE"))
            .unwrap_or(false),
        paired_with: text(fields, "pairedwith").unwrap_or_default(),
        tier: number(fields, "tier").unwrap_or(DEFAULT_TIER),
        coach: text(fields, "coach").unwrap_or_default(),
        pod: text(fields, "pod").unwrap_or_else(|| UNKNOWN_POD.to_string()),
    })
}

fn field<'a>(fields: &'a HashMap<String, &Value>, column: &str) -> Option<&'a Value> {
    fields.get(column).copied().filter(|value| !value.is_null())
}

fn text(fields: &HashMap<String, &Value>, column: &str) -> Option<String> {
    field(fields, column).map(|value| stringify(value).trim().to_string())
}

/// Numeric coercion: unparseable values count as missing, fractions truncate
fn number(fields: &HashMap<String, &Value>, column: &str) -> Option<i64> {
    let value = field(fields, column)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|n| n.is_finite()).map(|n| n.trunc() as i64)
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}
