//! Header component

use leptos::*;
use leptos_router::A;

use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">"✨ " {APP_NAME}</A>
                <span class="badge">"Beta"</span>
            </div>
        </header>
    }
}
