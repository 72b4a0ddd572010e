//! Preview of the saved configuration.

use leptos::*;
use paypage::{page_url, share_links};

use crate::components::PaymentCard;
use crate::state::use_app_state;
use crate::SITE_URL;

#[component]
pub fn PreviewPanel() -> impl IntoView {
    let state = use_app_state();
    let saved = state.saved;

    view! {
        <Show
            when=move || saved.with(|s| s.is_some())
            fallback=|| view! {
                <div class="preview-placeholder">
                    <div class="placeholder-icon">"📄"</div>
                    <p>"Configure your payment page to see a preview"</p>
                </div>
            }
        >
            <PreviewCard/>
        </Show>
    }
}

#[component]
fn PreviewCard() -> impl IntoView {
    let state = use_app_state();
    let config = Signal::derive(move || state.saved.get().unwrap_or_default());

    let page = move || config.with(|c| page_url(SITE_URL, &c.slug).ok());
    let shares = move || {
        config.with(|c| page().and_then(|url| share_links(&url, &c.recipient).ok()))
    };

    view! {
        <div class="preview-card animate-fade-in">
            <h3 class="preview-title">"Payment Page Preview"</h3>
            <PaymentCard config=config preview=true/>

            <div class="share-section">
                <label>"Your payment page"</label>
                <input
                    type="text"
                    readonly=true
                    prop:value=move || page().map(|u| u.to_string()).unwrap_or_default()
                />
                {move || {
                    shares()
                        .map(|links| {
                            view! {
                                <div class="share-links">
                                    <a href=links.twitter.to_string() target="_blank" rel="noopener noreferrer">
                                        "Share on Twitter"
                                    </a>
                                    <a href=links.facebook.to_string() target="_blank" rel="noopener noreferrer">
                                        "Share on Facebook"
                                    </a>
                                </div>
                            }
                        })
                }}
                <Show when=move || page().is_some()>
                    <a class="btn btn-secondary" href=move || page().map(|u| u.path().to_string()).unwrap_or_default()>
                        "Open page"
                    </a>
                </Show>
            </div>
            <div class="preview-footer">"Created with Payment Configuration Tool"</div>
        </div>
    }
}
