use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::catalog::store::CatalogStore;
use crate::shared::icons::icon;

/// Page chrome: sticky header with navigation and a favorites badge,
/// content area, footer. Navigation uses plain anchors; the Router
/// intercepts same-origin clicks.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let store = use_context::<CatalogStore>().expect("CatalogStore not found in context");
    let location = use_location();

    let liked_count = Signal::derive(move || store.liked_ids.get().len());
    let is_active = move |path: &'static str| location.pathname.get() == path;

    view! {
        <div class="layout">
            <header class="layout__header">
                <a href="/products" class="brand">
                    <span class="brand__logo">{icon("bag")}</span>
                    <span class="brand__text">
                        <span class="brand__title">"Product Store"</span>
                        <span class="brand__subtitle">"Manage your products"</span>
                    </span>
                </a>
                <nav class="nav">
                    <a
                        href="/products"
                        class=move || {
                            if is_active("/products") { "nav__link nav__link--active" } else { "nav__link" }
                        }
                    >
                        {icon("bag")}
                        <span>"Products"</span>
                    </a>
                    <a
                        href="/create-product"
                        class=move || {
                            if is_active("/create-product") { "nav__link nav__link--active" } else { "nav__link" }
                        }
                    >
                        {icon("plus")}
                        <span>"Create Product"</span>
                    </a>
                    <a href="/products?liked=true" class="nav__link nav__link--favorites">
                        {move || {
                            if liked_count.get() > 0 { icon("heart-filled") } else { icon("heart") }
                        }}
                        <span class="nav__badge">{move || liked_count.get()}</span>
                    </a>
                </nav>
            </header>
            <main class="layout__content">{children()}</main>
            <footer class="layout__footer">
                <span>"Product Store, a catalog manager demo"</span>
            </footer>
        </div>
    }
}
