//! # Meal form state
//!
//! A meal is built up locally before it is sent:
//!
//! 1. **Search**: `GET /foods/search` fills [`MealForm::results`]; any result can be
//!    appended to the pending list with [`MealForm::add_result`].
//! 2. **Manual entry**: [`ManualEntry`] collects a name and macros the user typed;
//!    [`MealForm::add_manual`] appends it. The macros are for local display only.
//! 3. **Submit**: `POST /meal` with the pending names in insertion order. On success
//!    the pending list, the query, and the results are cleared.
//!
//! Search and submit each have their own [`Feedback`] and therefore their own busy
//! flag, so a search can run while the submit button is idle and vice versa.

use api::{ApiError, FoodSearchResult, MealRequest, MealResponse, MealType, Nutrition, SearchResponse};
use chrono::NaiveDate;

use crate::feedback::Feedback;
use crate::messages;

/// Where a pending item came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemSource {
    Search,
    Manual,
}

/// A food chosen for the meal being composed.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingItem {
    pub name: String,
    pub source: ItemSource,
    pub nutrition: Nutrition,
}

/// Text of the manual-entry inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManualEntry {
    pub open: bool,
    pub name: String,
    pub kcal: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    /// Why the last "수동으로 항목 추가" was rejected.
    pub error: Option<&'static str>,
}

impl ManualEntry {
    fn clear(&mut self) {
        *self = ManualEntry::default();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MealForm {
    /// `YYYY-MM-DD`, as produced by a date input.
    pub date: String,
    pub meal_type: MealType,
    pub query: String,
    pub results: Vec<FoodSearchResult>,
    pub search: Feedback,
    pub manual: ManualEntry,
    pub pending: Vec<PendingItem>,
    pub submit: Feedback,
}

impl Default for MealForm {
    fn default() -> Self {
        Self::new(today())
    }
}

/// Today's date in the browser's time zone as `YYYY-MM-DD`. Not the UTC date, so a
/// meal logged shortly after local midnight lands on the new day.
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Lenient number parsing for optional inputs: blank or garbage counts as zero.
fn parse_or_zero(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

impl MealForm {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            meal_type: MealType::default(),
            query: String::new(),
            results: Vec::new(),
            search: Feedback::default(),
            manual: ManualEntry::default(),
            pending: Vec::new(),
            submit: Feedback::default(),
        }
    }

    // ---- search ----

    /// Begin a search. Returns the query to send, or `None` if it was blank.
    pub fn start_search(&mut self) -> Option<String> {
        let query = self.query.trim();
        if query.is_empty() {
            self.search.fail(messages::SEARCH_EMPTY_QUERY);
            return None;
        }
        let query = self.query.clone();
        self.search.begin();
        self.results.clear();
        Some(query)
    }

    pub fn finish_search(&mut self, result: Result<SearchResponse, ApiError>) {
        match result {
            Ok(response) if response.results.is_empty() => {
                self.results.clear();
                self.search.fail(messages::SEARCH_NO_RESULTS);
            }
            Ok(response) => {
                self.results = response.results;
                self.search.idle();
            }
            Err(e) => {
                tracing::error!("Error searching foods: {e}");
                self.search.fail(e.user_message(messages::SEARCH_FAILED));
            }
        }
    }

    /// Append a food (usually a search result) to the pending list.
    pub fn add_food(&mut self, food: &FoodSearchResult) {
        self.pending.push(PendingItem {
            name: food.name.clone(),
            source: ItemSource::Search,
            nutrition: food.nutrition,
        });
    }

    /// Append the search result at `index`. Out-of-range indices are ignored.
    pub fn add_result(&mut self, index: usize) -> bool {
        match self.results.get(index).cloned() {
            Some(food) => {
                self.add_food(&food);
                true
            }
            None => false,
        }
    }

    // ---- manual entry ----

    pub fn toggle_manual(&mut self) {
        self.manual.open = !self.manual.open;
        self.manual.error = None;
    }

    /// Append the manually entered food.
    ///
    /// Name and kcal are required; on rejection only [`ManualEntry::error`] changes.
    /// Other macros default to zero. On success the inputs are cleared and the
    /// panel closes.
    pub fn add_manual(&mut self) -> Result<(), &'static str> {
        if self.manual.name.trim().is_empty() || self.manual.kcal.trim().is_empty() {
            self.manual.error = Some(messages::MANUAL_REQUIRED);
            return Err(messages::MANUAL_REQUIRED);
        }

        self.pending.push(PendingItem {
            name: self.manual.name.clone(),
            source: ItemSource::Manual,
            nutrition: Nutrition {
                kcal: parse_or_zero(&self.manual.kcal),
                protein: parse_or_zero(&self.manual.protein),
                fat: parse_or_zero(&self.manual.fat),
                carbs: parse_or_zero(&self.manual.carbs),
            },
        });
        self.manual.clear();
        Ok(())
    }

    pub fn remove_pending(&mut self, index: usize) {
        if index < self.pending.len() {
            self.pending.remove(index);
        }
    }

    // ---- submit ----

    /// Whether the final submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.submit.busy && !self.pending.is_empty()
    }

    /// Names to send, in the order they were added.
    pub fn item_names(&self) -> Vec<String> {
        self.pending.iter().map(|item| item.name.clone()).collect()
    }

    /// Begin a submission. Returns the request body, or `None` if the form is not
    /// ready (the error is already recorded).
    pub fn start_submit(&mut self) -> Option<MealRequest> {
        self.submit.begin();

        if self.pending.is_empty() {
            self.submit.fail(messages::MEAL_NO_ITEMS);
            return None;
        }
        let Ok(date) = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") else {
            self.submit.fail(messages::MEAL_NO_DATE);
            return None;
        };

        Some(MealRequest {
            date,
            meal_type: self.meal_type,
            items: self.item_names(),
        })
    }

    /// Record the backend's answer. Returns `true` when the meal was stored.
    pub fn finish_submit(&mut self, result: Result<MealResponse, ApiError>) -> bool {
        match result {
            Ok(response) => {
                self.submit
                    .succeed(response.message.unwrap_or_else(|| messages::MEAL_SAVED.to_string()));
                self.pending.clear();
                self.query.clear();
                self.results.clear();
                true
            }
            Err(e) => {
                tracing::error!("Error uploading meal: {e}");
                self.submit.fail(e.user_message(messages::MEAL_FAILED));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicken() -> FoodSearchResult {
        FoodSearchResult {
            name: "닭가슴살".to_string(),
            nutrition: Nutrition {
                kcal: 165.0,
                protein: 31.0,
                fat: 3.6,
                carbs: 0.0,
            },
            score: 0.93,
        }
    }

    fn form() -> MealForm {
        MealForm::new("2024-05-01")
    }

    #[test]
    fn test_today_is_iso_date() {
        let date = today();
        assert!(NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
        assert_eq!(date, chrono::Local::now().date_naive().format("%Y-%m-%d").to_string());
        assert_eq!(MealForm::default().meal_type, MealType::Breakfast);
    }

    #[test]
    fn test_blank_query_is_rejected_without_request() {
        let mut form = form();
        form.query = "   ".to_string();
        assert_eq!(form.start_search(), None);
        assert_eq!(form.search.error.as_deref(), Some(messages::SEARCH_EMPTY_QUERY));
        assert!(!form.search.busy);
    }

    #[test]
    fn test_search_then_add_then_submit() {
        let mut form = form();
        form.query = " 닭가슴살 ".to_string();
        assert_eq!(form.start_search().as_deref(), Some(" 닭가슴살 "));
        assert!(form.search.busy);

        form.finish_search(Ok(SearchResponse {
            query: Some("닭가슴살".to_string()),
            results: vec![chicken()],
        }));
        assert_eq!(form.results.len(), 1);
        assert!(form.search.error.is_none());
        assert!(!form.search.busy);

        assert!(form.add_result(0));
        assert!(!form.add_result(3));
        assert_eq!(form.pending[0].nutrition.kcal, 165.0);
        assert_eq!(form.pending[0].source, ItemSource::Search);

        let request = form.start_submit().unwrap();
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(request.meal_type, MealType::Breakfast);
        assert_eq!(request.items, vec!["닭가슴살"]);
        assert!(!form.can_submit());

        assert!(form.finish_submit(Ok(MealResponse::default())));
        assert!(form.pending.is_empty());
        assert!(form.query.is_empty());
        assert!(form.results.is_empty());
        assert_eq!(form.submit.message.as_deref(), Some(messages::MEAL_SAVED));
    }

    #[test]
    fn test_empty_results_show_hint() {
        let mut form = form();
        form.query = "없는음식".to_string();
        form.start_search();
        form.finish_search(Ok(SearchResponse::default()));

        assert!(form.results.is_empty());
        assert_eq!(form.search.error.as_deref(), Some(messages::SEARCH_NO_RESULTS));
    }

    #[test]
    fn test_search_failure_keeps_detail() {
        let mut form = form();
        form.query = "두부".to_string();
        form.start_search();
        form.finish_search(Err(ApiError::Status {
            status: 500,
            detail: Some("음식 검색 중 오류가 발생했습니다.".to_string()),
        }));
        assert_eq!(form.search.error.as_deref(), Some("음식 검색 중 오류가 발생했습니다."));
    }

    #[test]
    fn test_manual_entry_requires_name_and_kcal() {
        let mut form = form();
        form.manual.open = true;
        form.manual.name = "김치볶음밥".to_string();
        form.manual.protein = "12".to_string();

        let before = form.clone();
        assert_eq!(form.add_manual(), Err(messages::MANUAL_REQUIRED));
        assert_eq!(form.manual.error, Some(messages::MANUAL_REQUIRED));
        assert_eq!(form.manual.name, before.manual.name);
        assert_eq!(form.pending, before.pending);

        form.manual.name = "  ".to_string();
        form.manual.kcal = "550".to_string();
        assert_eq!(form.add_manual(), Err(messages::MANUAL_REQUIRED));
        assert!(form.pending.is_empty());

        form.toggle_manual();
        assert!(form.manual.error.is_none());
    }

    #[test]
    fn test_manual_entry_defaults_missing_macros_to_zero() {
        let mut form = form();
        form.toggle_manual();
        form.manual.name = "엄마표 김치볶음밥".to_string();
        form.manual.kcal = "550".to_string();
        form.manual.fat = "abc".to_string();
        form.manual.carbs = "80.5".to_string();

        assert_eq!(form.add_manual(), Ok(()));
        let item = &form.pending[0];
        assert_eq!(item.source, ItemSource::Manual);
        assert_eq!(
            item.nutrition,
            Nutrition {
                kcal: 550.0,
                protein: 0.0,
                fat: 0.0,
                carbs: 80.5
            }
        );
        assert_eq!(form.manual, ManualEntry::default());
        assert!(!form.manual.open);
    }

    #[test]
    fn test_items_keep_insertion_order_across_sources() {
        let mut form = form();
        form.meal_type = MealType::Dinner;
        form.add_food(&chicken());
        form.manual.name = "현미밥".to_string();
        form.manual.kcal = "300".to_string();
        form.add_manual().unwrap();
        form.add_food(&FoodSearchResult {
            name: "두부".to_string(),
            nutrition: Nutrition::default(),
            score: 0.5,
        });

        let request = form.start_submit().unwrap();
        assert_eq!(request.items, vec!["닭가슴살", "현미밥", "두부"]);
        assert_eq!(request.meal_type, MealType::Dinner);
    }

    #[test]
    fn test_remove_pending() {
        let mut form = form();
        form.add_food(&chicken());
        form.add_food(&FoodSearchResult {
            name: "계란".to_string(),
            nutrition: Nutrition::default(),
            score: 0.8,
        });
        form.remove_pending(0);
        assert_eq!(form.item_names(), vec!["계란"]);
        form.remove_pending(5);
        assert_eq!(form.pending.len(), 1);
    }

    #[test]
    fn test_submit_without_items_is_blocked() {
        let mut form = form();
        assert!(!form.can_submit());
        assert_eq!(form.start_submit(), None);
        assert_eq!(form.submit.error.as_deref(), Some(messages::MEAL_NO_ITEMS));
    }

    #[test]
    fn test_submit_failure_keeps_pending_items() {
        let mut form = form();
        form.add_food(&chicken());
        assert!(form.start_submit().is_some());
        assert!(!form.finish_submit(Err(ApiError::Transport("offline".to_string()))));
        assert_eq!(form.pending.len(), 1);
        assert_eq!(form.submit.error.as_deref(), Some(messages::MEAL_FAILED));
        assert!(form.can_submit());
    }

    #[test]
    fn test_bad_date_blocks_submit() {
        let mut form = MealForm::new("");
        form.add_food(&chicken());
        assert_eq!(form.start_submit(), None);
        assert_eq!(form.submit.error.as_deref(), Some(messages::MEAL_NO_DATE));
    }
}
