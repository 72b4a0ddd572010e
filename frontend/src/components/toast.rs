//! Toast notifications

use leptos::*;

use crate::state::use_app_state;
use crate::types::Toast;

#[component]
pub fn Toaster() -> impl IntoView {
    let state = use_app_state();
    let toasts = state.toasts;

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.with(|queue| queue.items().to_vec())
                key=|toast| toast.id
                children=move |Toast { id, kind, message }| {
                    view! {
                        <div
                            class=kind.css_class()
                            on:click=move |_| toasts.update(|queue| queue.dismiss(id))
                        >
                            <span class="toast-icon">{kind.emoji()}</span>
                            <span class="toast-message">{message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
