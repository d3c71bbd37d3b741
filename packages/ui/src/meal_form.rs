use api::MealType;
use dioxus::prelude::*;
use store::display::{pending_item_line, search_result_line};
use store::MealForm;

use crate::actions::{search_foods, submit_meal};
use crate::activity_log::use_activity_log;
use crate::icons::{FaMagnifyingGlass, FaPlus};
use crate::provider::use_api;
use crate::Icon;

/// "식단 기록하기" card: food search, manual entry, and the pending item list.
#[component]
pub fn MealFormCard(on_meal_uploaded: EventHandler<()>) -> Element {
    let client = use_api();
    let mut form = use_signal(MealForm::default);
    let log = use_activity_log();

    let search_client = client.clone();
    let handle_search = move |_: MouseEvent| {
        spawn(search_foods(search_client.clone(), form, log));
    };

    let handle_submit = move |_: MouseEvent| {
        let client = client.clone();
        spawn(async move {
            if submit_meal(client, form, log).await {
                on_meal_uploaded.call(());
            }
        });
    };

    let state = form();

    rsx! {
        div {
            class: "card",
            h2 { class: "card-title", "🍽️ 식단 기록하기" }

            div {
                label { r#for: "mealDate", "날짜:" }
                input {
                    r#type: "date",
                    id: "mealDate",
                    required: true,
                    value: "{state.date}",
                    oninput: move |evt: FormEvent| form.write().date = evt.value(),
                }
            }
            div {
                label { r#for: "mealType", "식사 종류:" }
                select {
                    id: "mealType",
                    value: "{state.meal_type.as_str()}",
                    onchange: move |evt: FormEvent| {
                        if let Some(meal_type) = MealType::from_value(&evt.value()) {
                            form.write().meal_type = meal_type;
                        }
                    },
                    for meal_type in MealType::ALL {
                        option {
                            key: "{meal_type.as_str()}",
                            value: "{meal_type.as_str()}",
                            selected: meal_type == state.meal_type,
                            "{meal_type.label()}"
                        }
                    }
                }
            }

            div {
                class: "search-row",
                input {
                    r#type: "text",
                    placeholder: "음식 이름을 입력하세요 (예: 닭가슴살)",
                    value: "{state.query}",
                    oninput: move |evt: FormEvent| form.write().query = evt.value(),
                }
                button {
                    r#type: "button",
                    disabled: state.search.busy,
                    onclick: handle_search,
                    Icon { icon: FaMagnifyingGlass, width: 12, height: 12 }
                    if state.search.busy { " 검색 중..." } else { " 음식 검색" }
                }
            }
            if let Some(error) = &state.search.error {
                p { class: "error", "{error}" }
            }

            if !state.results.is_empty() {
                ul {
                    class: "search-results",
                    for (i, food) in state.results.iter().enumerate() {
                        li {
                            key: "{i}",
                            span { "{search_result_line(food)}" }
                            button {
                                r#type: "button",
                                onclick: move |_| {
                                    form.write().add_result(i);
                                },
                                "추가"
                            }
                        }
                    }
                }
            }

            button {
                r#type: "button",
                class: "link-button",
                onclick: move |_| form.write().toggle_manual(),
                if state.manual.open { "직접 추가 취소" } else { "원하는 음식이 없나요? 직접 추가" }
            }

            if state.manual.open {
                ManualEntryFields { form }
            }

            if !state.pending.is_empty() {
                h3 { "기록할 음식 목록" }
                ul {
                    class: "pending-items",
                    for (i, item) in state.pending.iter().enumerate() {
                        li {
                            key: "{i}",
                            span { "{pending_item_line(item)}" }
                            button {
                                r#type: "button",
                                onclick: move |_| form.write().remove_pending(i),
                                "제거"
                            }
                        }
                    }
                }
            }

            button {
                r#type: "button",
                class: "primary",
                disabled: !state.can_submit(),
                onclick: handle_submit,
                if state.submit.busy { "최종 기록 중..." } else { "이 식단으로 최종 기록" }
            }
            if let Some(message) = &state.submit.message {
                p { class: "success", "{message}" }
            }
            if let Some(error) = &state.submit.error {
                p { class: "error", "{error}" }
            }
        }
    }
}

/// Inputs for a food the search did not find. Name and kcal are required; a
/// rejected add shows why in an alert above the button.
#[component]
fn ManualEntryFields(form: Signal<MealForm>) -> Element {
    let mut form = form;
    let manual = form.read().manual.clone();

    rsx! {
        div {
            class: "manual-entry",
            input {
                r#type: "text",
                placeholder: "음식 이름 (필수)",
                value: "{manual.name}",
                oninput: move |evt: FormEvent| form.write().manual.name = evt.value(),
            }
            input {
                r#type: "number",
                step: "any",
                placeholder: "칼로리 kcal (필수)",
                value: "{manual.kcal}",
                oninput: move |evt: FormEvent| form.write().manual.kcal = evt.value(),
            }
            input {
                r#type: "number",
                step: "any",
                placeholder: "단백질 g",
                value: "{manual.protein}",
                oninput: move |evt: FormEvent| form.write().manual.protein = evt.value(),
            }
            input {
                r#type: "number",
                step: "any",
                placeholder: "탄수화물 g",
                value: "{manual.carbs}",
                oninput: move |evt: FormEvent| form.write().manual.carbs = evt.value(),
            }
            input {
                r#type: "number",
                step: "any",
                placeholder: "지방 g",
                value: "{manual.fat}",
                oninput: move |evt: FormEvent| form.write().manual.fat = evt.value(),
            }
            if let Some(error) = manual.error {
                p { class: "error", role: "alert", "{error}" }
            }
            button {
                r#type: "button",
                onclick: move |_| {
                    // The rejection reason is kept on the form.
                    let _ = form.write().add_manual();
                },
                Icon { icon: FaPlus, width: 12, height: 12 }
                " 수동으로 항목 추가"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::messages;

    use crate::testing::render;

    #[component]
    fn RejectedManualEntry() -> Element {
        let form = use_signal(|| {
            let mut form = MealForm::new("2024-05-01");
            form.manual.open = true;
            form.manual.name = "김치볶음밥".to_string();
            assert!(form.add_manual().is_err());
            form
        });
        rsx! {
            ManualEntryFields { form }
        }
    }

    #[tokio::test]
    async fn test_rejected_manual_entry_shows_alert() {
        let mut dom = VirtualDom::new(RejectedManualEntry);
        let html = render(&mut dom).await;

        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains(messages::MANUAL_REQUIRED));
        assert!(html.contains(r#"value="김치볶음밥""#));
    }
}
