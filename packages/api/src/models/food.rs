use serde::{Deserialize, Deserializer, Serialize};

/// Macro breakdown attached to a single food.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default, deserialize_with = "zero_if_null")]
    pub kcal: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub protein: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub fat: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub carbs: f64,
}

/// One candidate from `GET /foods/search`, ranked by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSearchResult {
    pub name: String,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub results: Vec<FoodSearchResult>,
}

/// A recommended snack. The backend keys these records by their Korean column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snack {
    #[serde(rename = "식품명")]
    pub name: String,
    #[serde(rename = "에너지(kcal)", default, deserialize_with = "zero_if_null")]
    pub kcal: f64,
    #[serde(rename = "단백질(g)", default, deserialize_with = "zero_if_null")]
    pub protein: f64,
    #[serde(rename = "지방(g)", default, deserialize_with = "zero_if_null")]
    pub fat: f64,
    #[serde(rename = "탄수화물(g)", default, deserialize_with = "zero_if_null")]
    pub carbs: f64,
}

/// Body returned by `GET /recommend/snacks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnackResponse {
    #[serde(rename = "추천 간식", default)]
    pub snacks: Vec<Snack>,
    #[serde(rename = "남은 칼로리", default)]
    pub remaining_kcal: Option<f64>,
}

/// Treats an explicit JSON `null` like a missing number.
pub(crate) fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_decodes_backend_payload() {
        let body = r#"{
            "query": "닭가슴살",
            "results": [
                {"name": "닭가슴살", "score": 0.91,
                 "nutrition": {"kcal": 165, "protein": 31.0, "fat": 3.6, "carbs": null}}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.results.len(), 1);
        let food = &response.results[0];
        assert_eq!(food.name, "닭가슴살");
        assert_eq!(food.nutrition.kcal, 165.0);
        assert_eq!(food.nutrition.carbs, 0.0);
    }

    #[test]
    fn test_snack_response_uses_korean_keys() {
        let body = r#"{
            "남은 칼로리": 420.5,
            "추천 간식": [
                {"식품명": "아몬드", "에너지(kcal)": 579.0, "단백질(g)": 21.2, "지방(g)": 49.9, "탄수화물(g)": 21.6}
            ]
        }"#;
        let response: SnackResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.remaining_kcal, Some(420.5));
        assert_eq!(response.snacks[0].name, "아몬드");
        assert_eq!(response.snacks[0].kcal, 579.0);
    }

    #[test]
    fn test_snack_response_without_list_is_empty() {
        let response: SnackResponse = serde_json::from_str("{}").unwrap();
        assert!(response.snacks.is_empty());
    }
}
