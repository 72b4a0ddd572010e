//! Footer component

use chrono::Datelike;
use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer>
            <div>
                {format!("Copyright © {} {} • Powered by ", year, APP_NAME)}
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
            <div class="footer-links">
                <a href="https://yodl.me" class="footer-link" target="_blank">"Yodl"</a>
                <a href="https://github.com/leptos-rs/leptos" class="footer-link" target="_blank">"Leptos"</a>
            </div>
        </footer>
    }
}
