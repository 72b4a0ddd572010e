//! `/:slug/thank-you` - shown after the provider redirects back.

use leptos::*;
use leptos_router::{use_params_map, A};
use paypage::{page_url, share_links};

use crate::state::use_app_state;
use crate::types::confetti_pieces;
use crate::{CONFETTI_PIECES, SITE_URL};

#[component]
pub fn ThankYouView() -> impl IntoView {
    let state = use_app_state();
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").cloned().unwrap_or_default());
    let config = Signal::derive(move || state.saved.get().unwrap_or_default());
    let (show_share, set_show_share) = create_signal(false);

    // Generated once per visit
    let confetti = config
        .with_untracked(|c| c.thank_you_page.show_confetti)
        .then(|| confetti_pieces(CONFETTI_PIECES, &mut rand::thread_rng()))
        .unwrap_or_default();
    log::debug!("🎉 Rendering {} confetti pieces", confetti.len());

    let shares = move || {
        config.with(|c| {
            page_url(SITE_URL, &c.slug)
                .and_then(|page| share_links(&page, &c.recipient))
                .map_err(|e| log::warn!("⚠️ No share links: {}", e))
                .ok()
        })
    };

    view! {
        <div class="thank-you-page" style=move || config.with(|c| c.thank_you_page.css())>
            <div class="confetti">
                {confetti
                    .into_iter()
                    .map(|piece| view! { <span class="confetti-piece" style=piece.style()></span> })
                    .collect_view()}
            </div>

            <div class="thank-you-content">
                <div class="thank-you-icon">"✅"</div>
                <h1>{move || config.with(|c| c.thank_you_page.message.clone())}</h1>
                <p class="thank-you-subtitle">"Transaction completed successfully!"</p>
                <span class="badge badge-success">"Confirmed"</span>

                <div class="thank-you-actions">
                    <A href=move || format!("/{}", slug()) class="btn btn-primary">
                        "Make Another Payment"
                    </A>
                    <button class="btn btn-secondary" on:click=move |_| set_show_share.update(|s| *s = !*s)>
                        "Share"
                    </button>
                </div>

                <Show when=move || show_share.get()>
                    {move || {
                        shares()
                            .map(|links| {
                                view! {
                                    <div class="share-links">
                                        <a href=links.twitter.to_string() target="_blank" rel="noopener noreferrer">
                                            "Twitter"
                                        </a>
                                        <a href=links.facebook.to_string() target="_blank" rel="noopener noreferrer">
                                            "Facebook"
                                        </a>
                                    </div>
                                }
                            })
                    }}
                </Show>

                <A href="/" class="home-link">"← Return Home"</A>
            </div>
        </div>
    }
}
