use api::Goal;
use dioxus::prelude::*;
use store::display::snack_kcal;
use store::messages::SNACKS_NONE;
use store::SnackPanel;

use crate::actions::fetch_snacks;
use crate::activity_log::use_activity_log;
use crate::provider::use_api;

/// "간식 추천" card. The button stays disabled until a goal exists.
#[component]
pub fn SnackCard(goal: Option<Goal>) -> Element {
    let client = use_api();
    let panel = use_signal(SnackPanel::default);
    let log = use_activity_log();

    let has_goal = goal.is_some();
    let handle_fetch = move |_: MouseEvent| {
        spawn(fetch_snacks(client.clone(), panel, goal.clone(), log));
    };

    let state = panel();

    rsx! {
        div {
            class: "card",
            h2 { class: "card-title", "🍪 간식 추천" }
            button {
                r#type: "button",
                disabled: state.feedback.busy || !has_goal,
                onclick: handle_fetch,
                if state.feedback.busy { "추천 로딩 중..." } else { "간식 추천 받기" }
            }
            if let Some(error) = &state.feedback.error {
                p { class: "error", "{error}" }
            }
            if let Some(kcal) = state.remaining_kcal {
                p { class: "remaining", "남은 칼로리 기준: {kcal:.1} kcal" }
            }
            if !state.snacks.is_empty() {
                ul {
                    class: "snack-list",
                    for (i, snack) in state.snacks.iter().enumerate() {
                        li {
                            key: "{i}",
                            strong { "{snack.name}" }
                            " - {snack_kcal(snack)}"
                        }
                    }
                }
            }
            if state.is_empty_result() {
                p { class: "empty", "{SNACKS_NONE}" }
            }
        }
    }
}
