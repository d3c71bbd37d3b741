//! Which [`DietApi`] the page talks to.

use api::{
    ApiError, DeleteResponse, DietApi, Goal, GoalResponse, HttpClient, MealRequest, MealResponse,
    MemoryApi, SearchResponse, SnackResponse, Summary,
};

/// The client every card gets from context.
///
/// [`crate::DashboardProvider`] uses a `Backend` already in context if there is
/// one, else the HTTP client built from the default config.
#[derive(Clone, Debug)]
pub enum Backend {
    Http(HttpClient),
    /// Canned answers, for tests and offline previews.
    Memory(MemoryApi),
}

impl Default for Backend {
    fn default() -> Self {
        Backend::Http(HttpClient::default())
    }
}

impl Backend {
    /// Where requests go, for the startup log line.
    pub fn describe(&self) -> String {
        match self {
            Backend::Http(client) => client.config().base_url().to_string(),
            Backend::Memory(_) => "memory".to_string(),
        }
    }
}

impl DietApi for Backend {
    async fn set_goal(&self, goal: &Goal) -> Result<GoalResponse, ApiError> {
        match self {
            Backend::Http(client) => client.set_goal(goal).await,
            Backend::Memory(api) => api.set_goal(goal).await,
        }
    }

    async fn upload_meal(&self, meal: &MealRequest) -> Result<MealResponse, ApiError> {
        match self {
            Backend::Http(client) => client.upload_meal(meal).await,
            Backend::Memory(api) => api.upload_meal(meal).await,
        }
    }

    async fn get_summary(&self) -> Result<Summary, ApiError> {
        match self {
            Backend::Http(client) => client.get_summary().await,
            Backend::Memory(api) => api.get_summary().await,
        }
    }

    async fn delete_meal(&self, index: usize) -> Result<DeleteResponse, ApiError> {
        match self {
            Backend::Http(client) => client.delete_meal(index).await,
            Backend::Memory(api) => api.delete_meal(index).await,
        }
    }

    async fn search_foods(&self, query: &str) -> Result<SearchResponse, ApiError> {
        match self {
            Backend::Http(client) => client.search_foods(query).await,
            Backend::Memory(api) => api.search_foods(query).await,
        }
    }

    async fn recommend_snacks(&self) -> Result<SnackResponse, ApiError> {
        match self {
            Backend::Http(client) => client.recommend_snacks().await,
            Backend::Memory(api) => api.recommend_snacks().await,
        }
    }
}
