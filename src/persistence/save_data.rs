//! Save blob layout
//!
//! On disk the three tables are flattened into parallel key/value lists:
//!
//! ```json
//! { "hsKeys": ["Stack Tower"], "hsValues": [12],
//!   "intKeys": [], "intValues": [],
//!   "strKeys": [], "strValues": [] }
//! ```
//!
//! Rehydration zips each pair up to the shorter list; a key repeated later
//! in a list wins. A list that fails to parse is dropped on its own so the
//! other tables survive. Negative high scores load as 0.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::highscores::HighScoreTable;

/// Flattened on-disk form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveBlob {
    #[serde(deserialize_with = "lenient_list")]
    pub hs_keys: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub hs_values: Vec<i32>,
    #[serde(deserialize_with = "lenient_list")]
    pub int_keys: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub int_values: Vec<i32>,
    #[serde(deserialize_with = "lenient_list")]
    pub str_keys: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub str_values: Vec<String>,
}

/// Parse one list, replacing it with an empty one if it is malformed
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        log::warn!("Dropping malformed save list: {e}");
        Vec::new()
    }))
}

/// In-memory lookup tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveData {
    pub high_scores: HighScoreTable,
    pub ints: BTreeMap<String, i32>,
    pub strings: BTreeMap<String, String>,
}

impl SaveData {
    /// Rebuild lookup tables from the flattened lists
    pub fn from_blob(blob: SaveBlob) -> Self {
        let mut high_scores = HighScoreTable::new();
        for (k, v) in blob.hs_keys.into_iter().zip(blob.hs_values) {
            high_scores.insert_raw(k, v.max(0) as u32);
        }

        Self {
            high_scores,
            ints: blob.int_keys.into_iter().zip(blob.int_values).collect(),
            strings: blob.str_keys.into_iter().zip(blob.str_values).collect(),
        }
    }

    /// Flatten into parallel lists
    pub fn to_blob(&self) -> SaveBlob {
        let (hs_keys, hs_values) = self
            .high_scores
            .iter()
            .map(|(k, v)| (k.to_string(), i32::try_from(v).unwrap_or(i32::MAX)))
            .unzip();
        let (int_keys, int_values) = self.ints.iter().map(|(k, v)| (k.clone(), *v)).unzip();
        let (str_keys, str_values) = self
            .strings
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .unzip();

        SaveBlob {
            hs_keys,
            hs_values,
            int_keys,
            int_values,
            str_keys,
            str_values,
        }
    }

    /// Parse a JSON blob
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let blob: SaveBlob = serde_json::from_str(json)?;
        Ok(Self::from_blob(blob))
    }

    /// Serialize to a JSON blob
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_blob())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_uses_parallel_list_keys() {
        let mut data = SaveData::default();
        data.high_scores.try_record("Stack Tower", 12);
        data.ints.insert("coins".to_string(), -3);
        data.strings.insert("name".to_string(), "ada".to_string());

        let json = data.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["hsKeys"][0], "Stack Tower");
        assert_eq!(value["hsValues"][0], 12);
        assert_eq!(value["intKeys"][0], "coins");
        assert_eq!(value["intValues"][0], -3);
        assert_eq!(value["strKeys"][0], "name");
        assert_eq!(value["strValues"][0], "ada");

        assert_eq!(SaveData::from_json(&json).unwrap(), data);
    }

    #[test]
    fn test_mismatched_lists_zip_to_shorter() {
        let data = SaveData::from_json(
            r#"{ "hsKeys": ["a", "b", "c"], "hsValues": [1, 2],
                 "strKeys": ["x"], "strValues": ["1", "2"] }"#,
        )
        .unwrap();
        assert_eq!(data.high_scores.len(), 2);
        assert_eq!(data.high_scores.get("c"), 0);
        assert_eq!(data.strings.len(), 1);
        assert!(data.ints.is_empty());
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let data = SaveData::from_json(r#"{ "intKeys": ["k", "k"], "intValues": [1, 9] }"#).unwrap();
        assert_eq!(data.ints.get("k"), Some(&9));
    }

    #[test]
    fn test_bad_list_only_drops_its_own_table() {
        let data = SaveData::from_json(
            r#"{ "hsKeys": ["Stack Tower", "Other"], "hsValues": [12, 99999999999],
                 "intKeys": ["coins"], "intValues": [40],
                 "strKeys": ["skin"], "strValues": ["red"] }"#,
        )
        .unwrap();
        assert!(data.high_scores.is_empty());
        assert_eq!(data.ints.get("coins"), Some(&40));
        assert_eq!(data.strings.get("skin").map(String::as_str), Some("red"));
    }

    #[test]
    fn test_negative_high_score_loads_as_zero() {
        let data = SaveData::from_json(
            r#"{ "hsKeys": ["Stack Tower", "Other"], "hsValues": [12, -1] }"#,
        )
        .unwrap();
        assert_eq!(data.high_scores.get("Stack Tower"), 12);
        assert_eq!(data.high_scores.get("Other"), 0);
    }

    #[test]
    fn test_empty_object_is_empty_data() {
        assert_eq!(SaveData::from_json("{}").unwrap(), SaveData::default());
    }
}
