//! Catch-all route

use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found-icon">"😕"</div>
            <h2>"Page Not Found"</h2>
            <p>"The page you are looking for doesn't exist or has been moved."</p>
            <A href="/" class="btn btn-secondary">"← Return Home"</A>
        </div>
    }
}
