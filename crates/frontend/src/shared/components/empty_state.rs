use leptos::prelude::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: String,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2 class="empty-state__title">{title}</h2>
            {(!description.is_empty())
                .then(|| view! { <p class="empty-state__description">{description}</p> })}
        </div>
    }
}
