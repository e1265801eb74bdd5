use leptos::prelude::*;

use crate::catalog::store::CatalogStore;
use crate::routes::routes::AppRoutes;

#[component]
pub fn App() -> impl IntoView {
    // The store is constructed exactly once for the session and handed to
    // the whole tree via context; no component mutates state except through
    // its actions.
    let store = CatalogStore::new();
    store.rehydrate();
    provide_context(store);

    view! {
        <AppRoutes />
    }
}
