//! Planner document model.
//!
//! A planner is a flat mapping from field keys (e.g. `"yearly-goals"`,
//! `"3-week2-tasks"`) to either free text or an ordered checklist. The
//! backup codec treats the whole document as an opaque JSON-serializable
//! value; this model exists so the CLI and tests have a concrete type
//! that matches the exported wire names (`textContent`, `checkboxLists`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single checklist entry: a checked flag and its text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub checked: bool,
    pub text: String,
}

/// The full planner state, as persisted and backed up.
///
/// Both maps default to empty when the field is absent from the input,
/// so partial documents load cleanly. `BTreeMap` keeps serialization
/// output stable across runs (keys in sorted order).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerState {
    /// Free-text fields, keyed by page field key.
    #[serde(default)]
    pub text_content: BTreeMap<String, String>,

    /// Checklist fields, keyed by page field key.
    #[serde(default)]
    pub checkbox_lists: BTreeMap<String, Vec<ChecklistItem>>,
}

impl PlannerState {
    /// Returns `true` if the planner has no content at all.
    pub fn is_empty(&self) -> bool {
        self.text_content.is_empty() && self.checkbox_lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let mut state = PlannerState::default();
        state
            .text_content
            .insert("yearly-goals".to_string(), "Plan the year".to_string());
        state.checkbox_lists.insert(
            "1-week1-tasks".to_string(),
            vec![ChecklistItem {
                checked: true,
                text: "water plants".to_string(),
            }],
        );

        let value = serde_json::to_value(&state).expect("serialize");
        assert!(value.get("textContent").is_some());
        assert!(value.get("checkboxLists").is_some());
        assert_eq!(
            value["checkboxLists"]["1-week1-tasks"][0]["checked"],
            serde_json::json!(true)
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let state: PlannerState = serde_json::from_str("{}").expect("parse");
        assert!(state.is_empty());

        let state: PlannerState =
            serde_json::from_str(r#"{"textContent": {"cover": "2026"}}"#).expect("parse");
        assert_eq!(state.text_content.get("cover").map(String::as_str), Some("2026"));
        assert!(state.checkbox_lists.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let json = r#"{"textContent":{"a":"1","b":"2"},"checkboxLists":{}}"#;
        let state: PlannerState = serde_json::from_str(json).expect("parse");
        let out = serde_json::to_string(&state).expect("serialize");
        assert_eq!(out, json);
    }
}
