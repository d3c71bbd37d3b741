//! The backend's REST surface, one variant per operation.

use reqwest::Method;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    SetGoal,
    UploadMeal,
    Summary,
    /// Positional index into the most recently fetched `Summary::meals`.
    DeleteMeal(usize),
    SearchFoods(String),
    SnackRecommendations,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::SetGoal | Endpoint::UploadMeal => Method::POST,
            Endpoint::DeleteMeal(_) => Method::DELETE,
            Endpoint::Summary | Endpoint::SearchFoods(_) | Endpoint::SnackRecommendations => {
                Method::GET
            }
        }
    }

    /// Path and query, relative to the configured origin.
    pub fn path(&self) -> String {
        match self {
            Endpoint::SetGoal => "/goal".to_string(),
            Endpoint::UploadMeal => "/meal".to_string(),
            Endpoint::Summary => "/summary".to_string(),
            Endpoint::DeleteMeal(index) => format!("/meal/{index}"),
            Endpoint::SearchFoods(query) => {
                format!("/foods/search?query={}", urlencoding::encode(query))
            }
            Endpoint::SnackRecommendations => "/recommend/snacks".to_string(),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}
