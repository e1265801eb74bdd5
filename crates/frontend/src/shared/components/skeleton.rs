use leptos::prelude::*;

/// Placeholder card grid shown while a listing request is in flight.
#[component]
pub fn CardGridSkeleton(#[prop(optional)] count: Option<usize>) -> impl IntoView {
    let count = count.unwrap_or(8);
    view! {
        <div class="card-grid">
            {(0..count)
                .map(|_| {
                    view! {
                        <div class="card card--skeleton">
                            <div class="card__image skeleton-block"></div>
                            <div class="card__body">
                                <div class="skeleton-block skeleton-block--line"></div>
                                <div class="skeleton-block skeleton-block--line skeleton-block--short"></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Full-area spinner for detail pages.
#[component]
pub fn PageLoader() -> impl IntoView {
    view! {
        <div class="page-loader">
            <div class="page-loader__spinner"></div>
        </div>
    }
}
