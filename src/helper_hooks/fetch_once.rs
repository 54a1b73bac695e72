use dioxus::prelude::*;

use crate::state_management::prelude::*;

/// Local state of a view displaying a fetched [OutputResource]
///
/// `is_loading` is only true between [ViewState::begin_fetch] and [ViewState::settle].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub resource: Option<OutputResource>,
    pub error: Option<FetchError>,
    pub is_loading: bool,
}

impl ViewState {
    /// State of a view whose fetch has just been issued
    pub fn fetching() -> Self {
        let mut state = Self::default();
        state.begin_fetch();
        state
    }

    pub fn begin_fetch(&mut self) {
        self.resource = None;
        self.error = None;
        self.is_loading = true;
    }

    /// Stores the outcome and clears the loading flag in a single transition
    pub fn settle(&mut self, outcome: Result<OutputResource, FetchError>) {
        match outcome {
            Ok(resource) => {
                self.resource = Some(resource);
                self.error = None;
            }
            Err(error) => {
                self.resource = None;
                self.error = Some(error);
            }
        }
        self.is_loading = false;
    }
}

/// Fetches from `api` once for the lifetime of the calling component
///
/// Unlike a [Resource](dioxus::prelude::Resource), the future is never re-run: it reads
/// no signal, so nothing can restart it. The task belongs to the caller's scope and is
/// dropped with it, a late settlement never writes into a dropped view.
pub fn use_fetch_once(api: OutputApi) -> ReadOnlySignal<ViewState> {
    let mut state = use_signal(ViewState::fetching);

    use_future(move || {
        let api = api.clone();
        async move {
            log::debug!("use_fetch_once - fetching");
            let outcome = api.get().await;
            match &outcome {
                Ok(resource) => log::info!("use_fetch_once - loaded output {:?}", resource.name),
                Err(e) => log::error!("use_fetch_once - fetch failed: {e}"),
            }
            state.write().settle(outcome);
        }
    });

    state.into()
}
