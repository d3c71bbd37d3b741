//! Headless rendering for component tests.

use std::time::Duration;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::VirtualDom;

const MAX_ROUNDS: usize = 32;

/// Run spawned tasks and re-render until nothing is left to do.
pub async fn settle(dom: &mut VirtualDom) {
    for _ in 0..MAX_ROUNDS {
        let work = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        if work.is_err() {
            break;
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

/// Build the tree, let it settle, and return the page as HTML.
pub async fn render(dom: &mut VirtualDom) -> String {
    dom.rebuild_in_place();
    settle(dom).await;
    dioxus_ssr::render(dom)
}
