use dioxus::prelude::*;
use store::display::{meal_heading, meal_items, remaining_kcal_line, weight, NUTRIENT_ROWS};
use store::messages::DELETE_CONFIRM;

use crate::icons::FaTrash;
use crate::provider::{use_confirm_delete, use_dashboard};
use crate::views::ConfirmDialog;
use crate::Icon;

/// "오늘의 식사 요약" card, rendered from the dashboard's current summary.
///
/// Deleting goes through [`ConfirmDialog`]; the index sent is the one captured
/// when the 삭제 button was clicked. The request itself runs in the provider,
/// since this card unmounts while the summary is refetched.
#[component]
pub fn SummaryCard() -> Element {
    let mut dashboard = use_dashboard();
    let confirm = use_confirm_delete();

    let state = dashboard();
    let Some(summary) = state.summary().cloned() else {
        return rsx! {};
    };
    let pending = state.pending_delete().cloned();

    rsx! {
        div {
            class: "card",
            h2 { class: "card-title", "📊 오늘의 식사 요약" }

            if let Some(message) = &summary.message {
                p { class: "summary-message", "{message}" }
            }

            if let Some(goal) = &summary.goal {
                div {
                    class: "summary-goal",
                    h3 { "나의 목표" }
                    p { "현재 체중: {weight(goal.current_weight)}" }
                    p { "목표 체중: {weight(goal.target_weight)}" }
                    p { class: "remaining", "{remaining_kcal_line(&summary)}" }
                }
            }

            h3 { "총 섭취 영양소" }
            if let Some(total) = summary.nutrition_total {
                div {
                    class: "nutrient-grid",
                    for row in NUTRIENT_ROWS.iter() {
                        div {
                            key: "{row.label}",
                            class: "nutrient",
                            span { class: "nutrient-label", "{row.label}" }
                            span { class: "nutrient-value", "{row.render(&total)}" }
                        }
                    }
                }
            } else {
                p { class: "empty", "오늘 섭취한 영양 정보가 없습니다." }
            }

            h3 { "기록된 식사" }
            if summary.meals.is_empty() {
                p { class: "empty", "기록된 식사가 없습니다." }
            } else {
                ul {
                    class: "meal-list",
                    for (i, meal) in summary.meals.iter().enumerate() {
                        li {
                            key: "{i}",
                            strong { "{meal_heading(meal)}" }
                            span { " {meal_items(meal)}" }
                            button {
                                r#type: "button",
                                class: "danger",
                                onclick: move |_| {
                                    dashboard.write().request_delete(i);
                                },
                                Icon { icon: FaTrash, width: 10, height: 10 }
                                " 삭제"
                            }
                        }
                    }
                }
            }
        }

        if let Some(pending) = pending {
            ConfirmDialog {
                message: DELETE_CONFIRM.to_string(),
                detail: format!("{} {}", meal_heading(&pending.meal), meal_items(&pending.meal)),
                on_confirm: confirm,
                on_cancel: move |_| dashboard.write().cancel_delete(),
            }
        }
    }
}
