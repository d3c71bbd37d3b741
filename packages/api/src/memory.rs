use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll};

use crate::client::DietApi;
use crate::error::ApiError;
use crate::models::{
    DeleteResponse, Goal, GoalResponse, MealRequest, MealResponse, SearchResponse, SnackResponse,
    Summary,
};
use crate::routes::Endpoint;

/// One request as seen by [`MemoryApi`].
#[derive(Clone, Debug, PartialEq)]
pub struct ApiCall {
    pub endpoint: Endpoint,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Default)]
struct Queues {
    goal: VecDeque<Result<GoalResponse, ApiError>>,
    meal: VecDeque<Result<MealResponse, ApiError>>,
    summary: VecDeque<Result<Summary, ApiError>>,
    delete: VecDeque<Result<DeleteResponse, ApiError>>,
    search: VecDeque<Result<SearchResponse, ApiError>>,
    snacks: VecDeque<Result<SnackResponse, ApiError>>,
}

/// In-memory [`DietApi`] for tests and previews.
///
/// Records every call and answers from per-operation queues. An operation with an
/// empty queue fails with [`ApiError::Transport`]. The call is recorded and its
/// answer taken immediately, but the future yields once before resolving, so a
/// caller sees the request in flight the way it would over the network.
///
/// Clones share the same state; two handles compare equal when they do.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    calls: Arc<Mutex<Vec<ApiCall>>>,
    queues: Arc<Mutex<Queues>>,
}

impl PartialEq for MemoryApi {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.calls, &other.calls)
    }
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_goal(&self, response: Result<GoalResponse, ApiError>) -> &Self {
        self.queues().goal.push_back(response);
        self
    }

    pub fn push_meal(&self, response: Result<MealResponse, ApiError>) -> &Self {
        self.queues().meal.push_back(response);
        self
    }

    pub fn push_summary(&self, response: Result<Summary, ApiError>) -> &Self {
        self.queues().summary.push_back(response);
        self
    }

    pub fn push_delete(&self, response: Result<DeleteResponse, ApiError>) -> &Self {
        self.queues().delete.push_back(response);
        self
    }

    pub fn push_search(&self, response: Result<SearchResponse, ApiError>) -> &Self {
        self.queues().search.push_back(response);
        self
    }

    pub fn push_snacks(&self, response: Result<SnackResponse, ApiError>) -> &Self {
        self.queues().snacks.push_back(response);
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of calls made to `endpoint`.
    pub fn count(&self, endpoint: &Endpoint) -> usize {
        self.calls().iter().filter(|c| &c.endpoint == endpoint).count()
    }

    fn queues(&self) -> std::sync::MutexGuard<'_, Queues> {
        self.queues.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, endpoint: Endpoint, body: Option<serde_json::Value>) {
        tracing::debug!(path = %endpoint.path(), "Recording call");
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ApiCall { endpoint, body });
    }
}

/// Pending on the first poll (after waking itself), ready on the second.
#[derive(Default)]
struct InFlight {
    polled: bool,
}

impl Future for InFlight {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.polled {
            return Poll::Ready(());
        }
        self.polled = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

fn body_of<T: serde::Serialize>(value: &T) -> Option<serde_json::Value> {
    serde_json::to_value(value).ok()
}

fn unanswered<T>(endpoint: &Endpoint, next: Option<Result<T, ApiError>>) -> Result<T, ApiError> {
    next.unwrap_or_else(|| {
        Err(ApiError::Transport(format!(
            "no response queued for {} {}",
            endpoint.method(),
            endpoint.path()
        )))
    })
}

impl DietApi for MemoryApi {
    async fn set_goal(&self, goal: &Goal) -> Result<GoalResponse, ApiError> {
        let endpoint = Endpoint::SetGoal;
        self.record(endpoint.clone(), body_of(goal));
        let next = self.queues().goal.pop_front();
        InFlight::default().await;
        unanswered(&endpoint, next)
    }

    async fn upload_meal(&self, meal: &MealRequest) -> Result<MealResponse, ApiError> {
        let endpoint = Endpoint::UploadMeal;
        self.record(endpoint.clone(), body_of(meal));
        let next = self.queues().meal.pop_front();
        InFlight::default().await;
        unanswered(&endpoint, next)
    }

    async fn get_summary(&self) -> Result<Summary, ApiError> {
        let endpoint = Endpoint::Summary;
        self.record(endpoint.clone(), None);
        let next = self.queues().summary.pop_front();
        InFlight::default().await;
        unanswered(&endpoint, next)
    }

    async fn delete_meal(&self, index: usize) -> Result<DeleteResponse, ApiError> {
        let endpoint = Endpoint::DeleteMeal(index);
        self.record(endpoint.clone(), None);
        let next = self.queues().delete.pop_front();
        InFlight::default().await;
        unanswered(&endpoint, next)
    }

    async fn search_foods(&self, query: &str) -> Result<SearchResponse, ApiError> {
        let endpoint = Endpoint::SearchFoods(query.to_string());
        self.record(endpoint.clone(), None);
        let next = self.queues().search.pop_front();
        InFlight::default().await;
        unanswered(&endpoint, next)
    }

    async fn recommend_snacks(&self) -> Result<SnackResponse, ApiError> {
        let endpoint = Endpoint::SnackRecommendations;
        self.record(endpoint.clone(), None);
        let next = self.queues().snacks.pop_front();
        InFlight::default().await;
        unanswered(&endpoint, next)
    }
}
