//! Shared context for the page: the backend, the dashboard, and the activity log.

use dioxus::prelude::*;
use store::Dashboard;

use crate::actions::{delete_meal, refresh_summary};
use crate::activity_log::ActivityLog;
use crate::backend::Backend;

/// Confirms the dashboard's pending delete. Created by [`DashboardProvider`], so
/// the request keeps running while the summary card is unmounted for the refetch.
#[derive(Clone, Copy)]
struct ConfirmDelete(Callback<()>);

/// The dashboard signal. Only the page-level components write to it.
pub fn use_dashboard() -> Signal<Dashboard> {
    use_context::<Signal<Dashboard>>()
}

/// The backend provided by [`DashboardProvider`].
pub fn use_api() -> Backend {
    use_context::<Backend>()
}

/// Send the pending delete, if any, and refetch the summary afterwards.
pub fn use_confirm_delete() -> Callback<()> {
    use_context::<ConfirmDelete>().0
}

/// Provides the backend, dashboard, and activity log, and loads the summary on mount.
/// Wrap the page with this component.
///
/// A [`Backend`] already in context (a test or preview) is used as is; otherwise
/// the page talks HTTP to the configured base URL.
#[component]
pub fn DashboardProvider(children: Element) -> Element {
    let client = use_context_provider(|| try_consume_context::<Backend>().unwrap_or_default());
    let mut dashboard = use_context_provider(|| Signal::new(Dashboard::new()));
    let log = use_context_provider(|| Signal::new(ActivityLog::default()));

    let confirm_client = client.clone();
    let confirm = use_callback(move |_: ()| {
        let index = dashboard.write().confirm_delete();
        if let Some(index) = index {
            spawn(delete_meal(confirm_client.clone(), dashboard, log, index));
        }
    });
    use_context_provider(|| ConfirmDelete(confirm));

    use_hook(move || {
        tracing::info!(backend = %client.describe(), "Loading summary");
        spawn(refresh_summary(client, dashboard, log));
    });

    rsx! {
        {children}
    }
}
