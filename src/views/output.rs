use crate::prelude::*;

use crate::{
    components::{
        error_banner::ErrorBanner,
        item::ItemView,
        misc::{LoadingOverlay, Panel},
    },
    utils::CCStr,
};

#[component]
pub fn OutputView() -> Element {
    log::debug!("OutputView Rendered");

    let output_api = use_context::<OutputApi>();
    let view_state = helper_hooks::use_fetch_once(output_api);

    use_drop(|| log::debug!("OutputView Dropped"));

    rsx! {
        OutputPanel { view_state: view_state() }
    }
}

/// The panel body for a given [ViewState]
#[component]
pub fn OutputPanel(view_state: ViewState) -> Element {
    let ViewState {
        resource,
        error,
        is_loading,
    } = view_state;
    let subtitle = resource
        .as_ref()
        .and_then(|r| r.id)
        .map(|id| CCStr::from(format!("#{id}")));

    rsx! {
        Panel { title: CCStr::from("Output"), subtitle,
            div { class: "dimmable",
                LoadingOverlay { active: is_loading }
                ErrorBanner { error }
                ItemView { resource }
            }
        }
    }
}
