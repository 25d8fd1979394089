use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Activity categories a synthetic log can be labelled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Vehicle,
    Plastics,
    Heating,
    Trees,
}

impl ActivityType {
    pub const ALL: [ActivityType; 4] = [
        ActivityType::Vehicle,
        ActivityType::Plastics,
        ActivityType::Heating,
        ActivityType::Trees,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Vehicle => "vehicle",
            ActivityType::Plastics => "plastics",
            ActivityType::Heating => "heating",
            ActivityType::Trees => "trees",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated activity log. `data` is reserved for feature values and is
/// always empty for now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSample {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub data: BTreeMap<String, serde_json::Value>,
}

impl SyntheticSample {
    pub fn new(activity_type: ActivityType) -> Self {
        Self {
            user_id: None,
            activity_type,
            data: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sample_wire_format() {
        let sample = SyntheticSample::new(ActivityType::Heating);
        let value = serde_json::to_value(&sample).unwrap();

        assert_eq!(
            value,
            json!({ "userId": null, "type": "heating", "data": {} })
        );
    }

    #[test]
    fn test_activity_type_display_matches_serde() {
        for activity in ActivityType::ALL {
            let serialized = serde_json::to_value(activity).unwrap();
            assert_eq!(serialized, json!(activity.to_string()));
        }
    }
}
