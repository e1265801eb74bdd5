use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::catalog::ui::details::ProductDetailPage;
use crate::catalog::ui::form::ProductFormPage;
use crate::catalog::ui::list::ProductsPage;
use crate::layout::Shell;
use crate::shared::components::empty_state::EmptyState;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| {
                    view! {
                        <EmptyState
                            title="Page not found"
                            description="The page you are looking for does not exist"
                        />
                    }
                }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/products" /> } />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/products/:id") view=ProductDetailPage />
                    <Route path=path!("/create-product") view=ProductFormPage />
                </Routes>
            </Shell>
        </Router>
    }
}
