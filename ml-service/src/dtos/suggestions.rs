use serde::{Deserialize, Serialize};

/// Query for `/suggestions`, read from raw key/value pairs so a repeated or
/// non-numeric `co2` falls back to zero instead of rejecting the request.
#[derive(Debug, Default)]
pub struct SuggestionParams {
    pub co2: Option<String>,
}

impl SuggestionParams {
    /// Keep `co2` only when it appears exactly once.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut values = pairs.iter().filter(|(key, _)| key == "co2");
        let co2 = match (values.next(), values.next()) {
            (Some((_, value)), None) => Some(value.clone()),
            _ => None,
        };
        Self { co2 }
    }

    /// Parsed CO2 amount in kg; missing, non-numeric or non-finite values are 0.
    pub fn co2_kg(&self) -> f64 {
        self.co2
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    #[serde(rename = "impact_kgCO2")]
    pub impact_kg_co2: f64,
    pub recommended_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
    pub trees_to_offset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(raw: Option<&str>) -> SuggestionParams {
        SuggestionParams {
            co2: raw.map(str::to_string),
        }
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs() {
        let single = SuggestionParams::from_pairs(&pairs(&[("co2", "12"), ("other", "x")]));
        assert_eq!(single.co2_kg(), 12.0);

        let repeated = SuggestionParams::from_pairs(&pairs(&[("co2", "1"), ("co2", "2")]));
        assert!(repeated.co2.is_none());
        assert_eq!(repeated.co2_kg(), 0.0);

        let missing = SuggestionParams::from_pairs(&[]);
        assert_eq!(missing.co2_kg(), 0.0);
    }

    #[test]
    fn test_co2_parsing() {
        assert_eq!(params(None).co2_kg(), 0.0);
        assert_eq!(params(Some("abc")).co2_kg(), 0.0);
        assert_eq!(params(Some("NaN")).co2_kg(), 0.0);
        assert_eq!(params(Some(" 42.5 ")).co2_kg(), 42.5);
        assert_eq!(params(Some("-3")).co2_kg(), -3.0);
    }
}
