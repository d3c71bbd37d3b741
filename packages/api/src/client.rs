//! # HTTP client for the diet backend
//!
//! [`DietApi`] is the async seam every caller goes through. [`HttpClient`] is the
//! production implementation on top of `reqwest` (which uses `fetch` on wasm);
//! [`crate::MemoryApi`] records calls for tests.
//!
//! Every request carries `Content-Type: application/json`. There is no auth
//! header, no retry, and no timeout: a failed call comes back as an [`ApiError`]
//! and the caller decides what to show.

use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{
    DeleteResponse, Goal, GoalResponse, MealRequest, MealResponse, SearchResponse, SnackResponse,
    Summary,
};
use crate::routes::Endpoint;

/// Async interface to the backend, one method per REST operation.
pub trait DietApi {
    /// `POST /goal`
    fn set_goal(&self, goal: &Goal) -> impl Future<Output = Result<GoalResponse, ApiError>>;
    /// `POST /meal`
    fn upload_meal(
        &self,
        meal: &MealRequest,
    ) -> impl Future<Output = Result<MealResponse, ApiError>>;
    /// `GET /summary`
    fn get_summary(&self) -> impl Future<Output = Result<Summary, ApiError>>;
    /// `DELETE /meal/{index}`
    fn delete_meal(&self, index: usize) -> impl Future<Output = Result<DeleteResponse, ApiError>>;
    /// `GET /foods/search?query=...`
    fn search_foods(&self, query: &str) -> impl Future<Output = Result<SearchResponse, ApiError>>;
    /// `GET /recommend/snacks`
    fn recommend_snacks(&self) -> impl Future<Output = Result<SnackResponse, ApiError>>;
}

/// `reqwest`-backed [`DietApi`]. Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Start a request for `endpoint` with the method, URL, and JSON content type filled in.
    pub fn request(&self, endpoint: &Endpoint) -> RequestBuilder {
        self.http
            .request(endpoint.method(), endpoint.url(self.config.base_url()))
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        tracing::debug!(method = %endpoint.method(), path = %endpoint.path(), "Sending request");
        let response = builder.send().await?;
        decode(endpoint, response).await
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(ClientConfig::from_build_env())
    }
}

async fn decode<T: DeserializeOwned>(endpoint: &Endpoint, response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            path = %endpoint.path(),
            "Backend rejected request"
        );
        return Err(ApiError::from_status(status.as_u16(), &body));
    }

    let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl DietApi for HttpClient {
    async fn set_goal(&self, goal: &Goal) -> Result<GoalResponse, ApiError> {
        let endpoint = Endpoint::SetGoal;
        self.send(&endpoint, self.request(&endpoint).json(goal)).await
    }

    async fn upload_meal(&self, meal: &MealRequest) -> Result<MealResponse, ApiError> {
        let endpoint = Endpoint::UploadMeal;
        self.send(&endpoint, self.request(&endpoint).json(meal)).await
    }

    async fn get_summary(&self) -> Result<Summary, ApiError> {
        let endpoint = Endpoint::Summary;
        self.send(&endpoint, self.request(&endpoint)).await
    }

    async fn delete_meal(&self, index: usize) -> Result<DeleteResponse, ApiError> {
        let endpoint = Endpoint::DeleteMeal(index);
        self.send(&endpoint, self.request(&endpoint)).await
    }

    async fn search_foods(&self, query: &str) -> Result<SearchResponse, ApiError> {
        let endpoint = Endpoint::SearchFoods(query.to_string());
        self.send(&endpoint, self.request(&endpoint)).await
    }

    async fn recommend_snacks(&self) -> Result<SnackResponse, ApiError> {
        let endpoint = Endpoint::SnackRecommendations;
        self.send(&endpoint, self.request(&endpoint)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, MealType};
    use chrono::NaiveDate;
    use reqwest::Method;

    fn client() -> HttpClient {
        HttpClient::new(ClientConfig::default().with_base_url("http://backend.test"))
    }

    fn body_json(request: &reqwest::Request) -> serde_json::Value {
        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_goal_request_shape() {
        let goal = Goal {
            current_weight: 70.0,
            target_weight: 65.0,
            period_days: 30,
            activity_level: ActivityLevel::Medium,
        };
        let request = client()
            .request(&Endpoint::SetGoal)
            .json(&goal)
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "http://backend.test/goal");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(body_json(&request)["period_days"], 30);
        assert_eq!(body_json(&request)["activity_level"], "medium");
    }

    #[test]
    fn test_meal_request_sends_names_only() {
        let meal = MealRequest {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            meal_type: MealType::Dinner,
            items: vec!["닭가슴살".to_string()],
        };
        let request = client()
            .request(&Endpoint::UploadMeal)
            .json(&meal)
            .build()
            .unwrap();

        assert_eq!(request.url().path(), "/meal");
        assert_eq!(
            body_json(&request),
            serde_json::json!({"date": "2024-05-01", "type": "dinner", "items": ["닭가슴살"]})
        );
    }

    #[test]
    fn test_bodyless_requests_still_declare_json() {
        for endpoint in [
            Endpoint::Summary,
            Endpoint::DeleteMeal(2),
            Endpoint::SearchFoods("두부".to_string()),
            Endpoint::SnackRecommendations,
        ] {
            let request = client().request(&endpoint).build().unwrap();
            assert_eq!(request.method(), endpoint.method());
            assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
            assert!(request.body().is_none());
            assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
        }
    }

    #[test]
    fn test_delete_and_search_urls() {
        let delete = client().request(&Endpoint::DeleteMeal(4)).build().unwrap();
        assert_eq!(delete.url().as_str(), "http://backend.test/meal/4");

        let search = client()
            .request(&Endpoint::SearchFoods("a&b".to_string()))
            .build()
            .unwrap();
        assert_eq!(search.url().path(), "/foods/search");
        assert_eq!(search.url().query(), Some("query=a%26b"));
    }
}
