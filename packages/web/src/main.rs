use dioxus::prelude::*;

use ui::views::DashboardView;
use ui::DashboardProvider;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        DashboardProvider {
            DashboardView {}
        }
    }
}
