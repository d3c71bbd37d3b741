use api::{ActivityLevel, Goal};
use dioxus::prelude::*;
use store::GoalForm;

use crate::actions::submit_goal;
use crate::activity_log::use_activity_log;
use crate::provider::use_api;

/// "나의 목표 설정" card. Calls `on_goal_set` with the goal the backend stored.
#[component]
pub fn GoalFormCard(on_goal_set: EventHandler<Goal>) -> Element {
    let client = use_api();
    let mut form = use_signal(GoalForm::default);
    let log = use_activity_log();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            if let Some(stored) = submit_goal(client, form, log).await {
                on_goal_set.call(stored);
            }
        });
    };

    let state = form();

    rsx! {
        div {
            class: "card",
            h2 { class: "card-title", "🎯 나의 목표 설정" }
            form {
                onsubmit: handle_submit,
                div {
                    label { r#for: "currentWeight", "현재 체중 (kg):" }
                    input {
                        r#type: "number",
                        id: "currentWeight",
                        step: "any",
                        placeholder: "예: 65",
                        required: true,
                        value: "{state.current_weight}",
                        oninput: move |evt: FormEvent| form.write().current_weight = evt.value(),
                    }
                }
                div {
                    label { r#for: "targetWeight", "목표 체중 (kg):" }
                    input {
                        r#type: "number",
                        id: "targetWeight",
                        step: "any",
                        placeholder: "예: 60",
                        required: true,
                        value: "{state.target_weight}",
                        oninput: move |evt: FormEvent| form.write().target_weight = evt.value(),
                    }
                }
                div {
                    label { r#for: "periodDays", "목표 기간 (일):" }
                    input {
                        r#type: "number",
                        id: "periodDays",
                        placeholder: "예: 30",
                        required: true,
                        value: "{state.period_days}",
                        oninput: move |evt: FormEvent| form.write().period_days = evt.value(),
                    }
                }
                div {
                    label { r#for: "activityLevel", "활동 수준:" }
                    select {
                        id: "activityLevel",
                        value: "{state.activity_level.as_str()}",
                        onchange: move |evt: FormEvent| {
                            if let Some(level) = ActivityLevel::from_value(&evt.value()) {
                                form.write().activity_level = level;
                            }
                        },
                        for level in ActivityLevel::ALL {
                            option {
                                key: "{level.as_str()}",
                                value: "{level.as_str()}",
                                selected: level == state.activity_level,
                                "{level.label()}"
                            }
                        }
                    }
                }
                button {
                    r#type: "submit",
                    disabled: state.feedback.busy,
                    if state.feedback.busy { "설정 중..." } else { "목표 저장" }
                }
            }
            if let Some(message) = &state.feedback.message {
                p { class: "success", "{message}" }
            }
            if let Some(error) = &state.feedback.error {
                p { class: "error", "{error}" }
            }
        }
    }
}
