//! One-shot collection loading for list pages.

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::net::api::Collection;
use crate::state::lists::ListState;

/// Start fetching `collection` once for the mounting component.
///
/// The returned signal starts in `Loading` and settles to `Loaded` or
/// `Failed`. A result that lands after unmount is dropped with the signal.
pub fn use_collection<T>(collection: Collection) -> RwSignal<ListState<T>>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(ListState::<T>::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = crate::state::context::SessionContext::access_token();
        let api = crate::net::api::HttpApi::from_config();
        let result = api.list::<T>(collection, token.as_deref()).await;
        if let Err(e) = &result {
            log::warn!("{}: fetch failed: {e}", collection.path());
        }
        let _ = state.try_set(ListState::from_result(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = collection;
    }

    state
}
