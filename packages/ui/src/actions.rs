//! # Request flows shared by the cards
//!
//! Each function runs one user action end to end: take what to send from the
//! state in a signal, make the request, log it, and record the answer. Write
//! guards are only held between awaits.
//!
//! A flow runs inside the task of whoever spawned it, so it stops when that
//! component unmounts. Flows that outlive the card starting them (deletion,
//! which hides the summary card while it refetches) are spawned from
//! [`crate::DashboardProvider`].

use api::{DietApi, Goal};
use dioxus::prelude::*;
use store::{Dashboard, GoalForm, MealForm, SnackPanel};

use crate::activity_log::{log_response, ActivityLog};

/// Fetch the summary and hand it to the dashboard.
pub async fn refresh_summary<A: DietApi>(
    client: A,
    mut dashboard: Signal<Dashboard>,
    mut log: Signal<ActivityLog>,
) {
    dashboard.write().start_refresh();
    let result = client.get_summary().await;
    log_response(&mut log, "GET /summary", &result);
    dashboard.write().finish_refresh(result);
}

/// `POST /goal` with the form's inputs. Returns the goal the backend stored.
pub async fn submit_goal<A: DietApi>(
    client: A,
    mut form: Signal<GoalForm>,
    mut log: Signal<ActivityLog>,
) -> Option<Goal> {
    let goal = form.write().start()?;
    let result = client.set_goal(&goal).await;
    log_response(&mut log, "POST /goal", &result);
    form.write().finish(result)
}

/// Adopt a stored goal, then refetch the summary so the remaining kcal follows it.
pub async fn goal_saved<A: DietApi>(
    client: A,
    mut dashboard: Signal<Dashboard>,
    log: Signal<ActivityLog>,
    goal: Goal,
) {
    dashboard.write().goal_set(goal);
    refresh_summary(client, dashboard, log).await;
}

pub async fn search_foods<A: DietApi>(
    client: A,
    mut form: Signal<MealForm>,
    mut log: Signal<ActivityLog>,
) {
    let Some(query) = form.write().start_search() else {
        return;
    };
    let result = client.search_foods(&query).await;
    log_response(&mut log, "GET /foods/search", &result);
    form.write().finish_search(result);
}

/// `POST /meal` with the pending items. Returns whether the meal was stored.
pub async fn submit_meal<A: DietApi>(
    client: A,
    mut form: Signal<MealForm>,
    mut log: Signal<ActivityLog>,
) -> bool {
    let Some(request) = form.write().start_submit() else {
        return false;
    };
    let result = client.upload_meal(&request).await;
    log_response(&mut log, "POST /meal", &result);
    form.write().finish_submit(result)
}

/// `GET /recommend/snacks`. Without a goal nothing is sent and the panel says why.
pub async fn fetch_snacks<A: DietApi>(
    client: A,
    mut panel: Signal<SnackPanel>,
    goal: Option<Goal>,
    mut log: Signal<ActivityLog>,
) {
    if !panel.write().start(goal.as_ref()) {
        return;
    }
    let result = client.recommend_snacks().await;
    log_response(&mut log, "GET /recommend/snacks", &result);
    panel.write().finish(result);
}

/// `DELETE /meal/{index}` for a confirmed delete, then refetch whatever the outcome.
pub async fn delete_meal<A: DietApi>(
    client: A,
    mut dashboard: Signal<Dashboard>,
    mut log: Signal<ActivityLog>,
    index: usize,
) {
    let result = client.delete_meal(index).await;
    log_response(&mut log, &format!("DELETE /meal/{index}"), &result);
    dashboard.write().finish_delete(result);
    refresh_summary(client, dashboard, log).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{
        ActivityLevel, ApiError, Endpoint, FoodSearchResult, MealResponse, MemoryApi, Nutrition,
        SearchResponse, Summary,
    };
    use store::messages;

    use crate::activity_log::use_activity_log;
    use crate::backend::Backend;
    use crate::provider::{use_api, use_dashboard, DashboardProvider};
    use crate::testing::render;
    use crate::views::DashboardView;

    fn goal() -> Goal {
        Goal {
            current_weight: 70.0,
            target_weight: 65.0,
            period_days: 30,
            activity_level: ActivityLevel::Medium,
        }
    }

    #[component]
    fn SaveGoalPage(api: MemoryApi) -> Element {
        use_context_provider(|| Backend::Memory(api.clone()));
        rsx! {
            DashboardProvider {
                DashboardView {}
                SaveFilledGoal {}
            }
        }
    }

    /// Does what `GoalFormCard` and `DashboardView` do on a valid submit.
    #[component]
    fn SaveFilledGoal() -> Element {
        let client = use_api();
        let dashboard = use_dashboard();
        let log = use_activity_log();
        let form = use_signal(|| GoalForm {
            current_weight: "70".to_string(),
            target_weight: "65".to_string(),
            activity_level: ActivityLevel::Medium,
            ..GoalForm::default()
        });

        use_hook(move || {
            spawn(async move {
                if let Some(stored) = submit_goal(client.clone(), form, log).await {
                    goal_saved(client, dashboard, log, stored).await;
                }
            })
        });

        let state = form();
        rsx! {
            if let Some(message) = &state.feedback.message {
                p { class: "success", "{message}" }
            }
        }
    }

    #[tokio::test]
    async fn test_saving_goal_refetches_summary() {
        let api = MemoryApi::new();
        api.push_summary(Ok(Summary::default()))
            .push_goal(Ok(api::GoalResponse {
                message: None,
                goal: goal(),
            }))
            .push_summary(Ok(Summary {
                goal: Some(goal()),
                remaining_kcal: Some(1800.0),
                ..Summary::default()
            }));

        let mut dom = VirtualDom::new_with_props(SaveGoalPage, SaveGoalPageProps { api: api.clone() });
        let html = render(&mut dom).await;

        let endpoints: Vec<_> = api.calls().into_iter().map(|call| call.endpoint).collect();
        assert_eq!(
            endpoints,
            vec![Endpoint::Summary, Endpoint::SetGoal, Endpoint::Summary]
        );
        assert!(html.contains(messages::GOAL_SAVED));
        assert!(html.contains("남은 칼로리: 1800.0 kcal"));
        assert!(html.contains("목표 체중: 65 kg"));
    }

    #[component]
    fn LogMealPage(api: MemoryApi) -> Element {
        use_context_provider(|| Backend::Memory(api.clone()));
        rsx! {
            DashboardProvider {
                SearchAddAndSubmit {}
            }
        }
    }

    /// Search, add the first result, submit, and refetch, as `MealFormCard` and
    /// `DashboardView` do.
    #[component]
    fn SearchAddAndSubmit() -> Element {
        let client = use_api();
        let dashboard = use_dashboard();
        let log = use_activity_log();
        let mut form = use_signal(|| MealForm {
            query: "닭가슴살".to_string(),
            ..MealForm::new("2024-05-01")
        });

        use_hook(move || {
            spawn(async move {
                search_foods(client.clone(), form, log).await;
                form.write().add_result(0);
                if submit_meal(client.clone(), form, log).await {
                    refresh_summary(client, dashboard, log).await;
                }
            })
        });

        let state = form();
        rsx! {
            if let Some(message) = &state.submit.message {
                p { class: "success", "{message}" }
            }
        }
    }

    #[tokio::test]
    async fn test_search_then_submit_sends_chosen_items() {
        let api = MemoryApi::new();
        api.push_summary(Ok(Summary::default()))
            .push_search(Ok(SearchResponse {
                query: Some("닭가슴살".to_string()),
                results: vec![FoodSearchResult {
                    name: "닭가슴살".to_string(),
                    nutrition: Nutrition {
                        kcal: 165.0,
                        protein: 31.0,
                        fat: 3.6,
                        carbs: 0.0,
                    },
                    score: 1.0,
                }],
            }))
            .push_meal(Ok(MealResponse::default()))
            .push_summary(Ok(Summary::default()));

        let mut dom = VirtualDom::new_with_props(LogMealPage, LogMealPageProps { api: api.clone() });
        let html = render(&mut dom).await;

        let calls = api.calls();
        let endpoints: Vec<_> = calls.iter().map(|call| call.endpoint.clone()).collect();
        assert_eq!(
            endpoints,
            vec![
                Endpoint::Summary,
                Endpoint::SearchFoods("닭가슴살".to_string()),
                Endpoint::UploadMeal,
                Endpoint::Summary,
            ]
        );
        let body = calls[2].body.clone().unwrap_or_default();
        assert_eq!(body["items"], serde_json::json!(["닭가슴살"]));
        assert_eq!(body["date"], "2024-05-01");
        assert!(html.contains(messages::MEAL_SAVED));
    }

    #[tokio::test]
    async fn test_failed_upload_skips_refetch() {
        let api = MemoryApi::new();
        api.push_summary(Ok(Summary::default()))
            .push_search(Ok(SearchResponse {
                query: None,
                results: vec![FoodSearchResult {
                    name: "닭가슴살".to_string(),
                    nutrition: Nutrition::default(),
                    score: 1.0,
                }],
            }))
            .push_meal(Err(ApiError::Transport("connection refused".to_string())));

        let mut dom = VirtualDom::new_with_props(LogMealPage, LogMealPageProps { api: api.clone() });
        render(&mut dom).await;

        assert_eq!(api.count(&Endpoint::UploadMeal), 1);
        assert_eq!(api.count(&Endpoint::Summary), 1);
    }
}
