//! Player identity and win/loss history: the persisted progress model.

use serde::{Deserialize, Serialize};

/// Externally supplied identity, stored raw and overwritten on every
/// run. No format, length, or uniqueness checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
}

/// Everything the store hands back on load. Absent values stay absent;
/// no defaults are substituted for a missing id or name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressRecord {
    pub player_id: Option<String>,
    pub player_name: Option<String>,
    /// Ordered outcome labels, one per completed run. Append-only,
    /// unbounded, never pruned or deduplicated.
    pub history: Vec<String>,
}

/// Serialize a history as the stored JSON array of labels.
#[must_use]
pub fn encode_history(history: &[String]) -> String {
    serde_json::to_string(history).unwrap_or_else(|_| String::from("[]"))
}

/// Decode a stored history value. An absent or unreadable value
/// degrades to an empty history rather than surfacing an error.
#[must_use]
pub fn decode_history(raw: Option<&str>) -> Vec<String> {
    let Some(text) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(text) {
        Ok(history) => history,
        Err(err) => {
            log::warn!("discarding unreadable game record: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_round_trips_any_string_list() {
        let history = vec![
            String::from("success"),
            String::from("failure"),
            String::from("某种标签"),
            String::new(),
        ];
        let encoded = encode_history(&history);
        assert_eq!(decode_history(Some(&encoded)), history);
    }

    #[test]
    fn absent_history_decodes_empty() {
        assert!(decode_history(None).is_empty());
    }

    #[test]
    fn corrupted_history_degrades_to_empty() {
        for raw in ["not json", "{\"a\":1}", "[1,2,3]", ""] {
            assert!(decode_history(Some(raw)).is_empty(), "raw: {raw}");
        }
    }

    #[test]
    fn empty_history_encodes_as_empty_array() {
        assert_eq!(encode_history(&[]), "[]");
    }
}
