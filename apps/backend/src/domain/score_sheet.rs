//! Operator input for one round, defaulted at the boundary.
//!
//! Every value that reaches the scoring engine has already been coerced:
//! numbers that are missing or unparseable become 0, flags that are missing
//! or unrecognized become false. Nothing in here returns an error for a bad
//! value.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One player's raw input for a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    #[serde(default, deserialize_with = "lenient_int")]
    pub raw_score: i32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub c2: i32,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub ctp: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub ace: bool,
}

impl ScoreEntry {
    pub fn new(raw_score: i32) -> Self {
        Self {
            raw_score,
            ..Self::default()
        }
    }

    pub fn with_c2(mut self, c2: i32) -> Self {
        self.c2 = c2.max(0);
        self
    }

    pub fn with_ctp(mut self, ctp: bool) -> Self {
        self.ctp = ctp;
        self
    }

    pub fn with_ace(mut self, ace: bool) -> Self {
        self.ace = ace;
        self
    }
}

/// Score sheet for a round, keyed by player id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    #[serde(default, deserialize_with = "lenient_entries")]
    pub entries: HashMap<i64, ScoreEntry>,
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, player_id: i64, entry: ScoreEntry) -> Self {
        self.entries.insert(player_id, entry);
        self
    }

    /// Entry for a player; a player absent from the sheet scored zero.
    pub fn entry(&self, player_id: i64) -> ScoreEntry {
        self.entries.get(&player_id).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a sheet from form fields keyed by player name.
    ///
    /// Field names per player: `{name}` (raw score), `c2_{name}`,
    /// `ctp_{name}` and `ace_{name}`. Checkbox fields count as set when the
    /// key is present at all, which is how browsers submit checked boxes.
    pub fn from_named_form<'a, I>(roster: I, form: &HashMap<String, String>) -> Self
    where
        I: IntoIterator<Item = (i64, &'a str)>,
    {
        let entries = roster
            .into_iter()
            .map(|(player_id, name)| {
                let raw_score = form.get(name).map(|v| parse_int(v)).unwrap_or(0);
                let c2 = form
                    .get(&format!("c2_{name}"))
                    .map(|v| parse_count(v))
                    .unwrap_or(0);
                let ctp = form.contains_key(&format!("ctp_{name}"));
                let ace = form.contains_key(&format!("ace_{name}"));
                (
                    player_id,
                    ScoreEntry {
                        raw_score,
                        c2,
                        ctp,
                        ace,
                    },
                )
            })
            .collect();

        Self { entries }
    }
}

/// Parse an integer, falling back to 0 for anything that is not one.
pub fn parse_int(input: &str) -> i32 {
    input.trim().parse::<i32>().unwrap_or(0)
}

/// Parse a bonus count; negative counts are treated as 0.
pub fn parse_count(input: &str) -> i32 {
    parse_int(input).max(0)
}

/// Parse a checkbox-style flag.
pub fn parse_flag(input: &str) -> bool {
    matches!(
        input.trim().to_ascii_lowercase().as_str(),
        "on" | "true" | "1" | "yes" | "checked"
    )
}

fn int_from_value(value: &Value) -> i32 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).unwrap_or(0)
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 => {
                        f as i32
                    }
                    _ => 0,
                }
            }
        }
        Value::String(s) => parse_int(s),
        _ => 0,
    }
}

fn flag_from_value(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => parse_flag(s),
        _ => false,
    }
}

/// Entry for one player; anything other than an object is an empty entry.
fn entry_from_value(value: Value) -> ScoreEntry {
    match value {
        Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => ScoreEntry::default(),
    }
}

/// Keys that are not player ids are dropped; a non-object map is empty.
fn lenient_entries<'de, D>(deserializer: D) -> Result<HashMap<i64, ScoreEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(HashMap::new());
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| {
            let player_id = key.trim().parse::<i64>().ok()?;
            Some((player_id, entry_from_value(value)))
        })
        .collect())
}

fn lenient_int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(int_from_value(&value))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(int_from_value(&value).max(0))
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(flag_from_value(&value))
}
