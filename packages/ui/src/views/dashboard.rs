use api::Goal;
use dioxus::prelude::*;

use crate::activity_log::use_activity_log;
use crate::activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
use crate::goal_form::GoalFormCard;
use crate::icons::FaXmark;
use crate::meal_form::MealFormCard;
use crate::actions::{goal_saved, refresh_summary};
use crate::provider::{use_api, use_dashboard};
use crate::snacks::SnackCard;
use crate::summary::SummaryCard;
use crate::Icon;

/// The whole page. Forms report back here and the summary is refetched; nothing
/// else writes the shared goal or summary.
#[component]
pub fn DashboardView() -> Element {
    let client = use_api();
    let mut dashboard = use_dashboard();
    let log = use_activity_log();

    let goal_client = client.clone();
    let handle_goal_set = move |goal: Goal| {
        spawn(goal_saved(goal_client.clone(), dashboard, log, goal));
    };

    let handle_meal_uploaded = move |_: ()| {
        spawn(refresh_summary(client.clone(), dashboard, log));
    };

    let state = dashboard();

    rsx! {
        div {
            class: "container",
            h1 { class: "page-title", "AI 식단 관리 도우미" }

            div {
                class: "form-grid",
                GoalFormCard { on_goal_set: handle_goal_set }
                MealFormCard { on_meal_uploaded: handle_meal_uploaded }
            }

            if state.loading() {
                p { class: "loading", "데이터 로딩 중..." }
            }
            if let Some(error) = state.error() {
                p { class: "error", "{error}" }
            }
            if let Some(notice) = state.notice() {
                div {
                    class: "notice",
                    role: "status",
                    span { "{notice}" }
                    button {
                        r#type: "button",
                        title: "닫기",
                        onclick: move |_| dashboard.write().dismiss_notice(),
                        Icon { icon: FaXmark, width: 10, height: 10 }
                    }
                }
            }
            if state.show_summary() {
                SummaryCard {}
            }
            if state.show_snacks() {
                SnackCard { goal: state.goal().cloned() }
            }
        }

        ActivityLogToggle {}
        ActivityLogPanel {}
    }
}
