//! Payment card and the `/:slug` route.

use leptos::*;
use leptos_meta::{Meta, Title};
use leptos_router::use_params_map;
use paypage::{payment_link, Configuration, PaymentLink};

use crate::services::{navigate_external, page_origin};
use crate::state::use_app_state;
use crate::types::{AppError, AppResult, ToastKind};
use crate::PROVIDER_URL;

/// Payment link for `config` as served from the current page origin.
fn resolve_link(config: &Configuration, route_slug: Option<&str>) -> AppResult<PaymentLink> {
    let origin = page_origin()?;
    payment_link(config, PROVIDER_URL, &origin, route_slug).map_err(AppError::from)
}

/// Title, description and pay button for one configuration.
///
/// In preview mode the button is inert.
#[component]
pub fn PaymentCard(
    #[prop(into)] config: Signal<Configuration>,
    #[prop(optional)] preview: bool,
    #[prop(optional)] route_slug: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let state = use_app_state();
    let (redirecting, set_redirecting) = create_signal(false);

    let on_pay = move |_| {
        if preview {
            return;
        }
        let slug = route_slug.and_then(|s| s.get_untracked());
        let link = config.with_untracked(|c| resolve_link(c, slug.as_deref()));

        match link {
            Ok(link) => {
                log::info!("💸 Redirecting to {}", link.payment);
                set_redirecting.set(true);
                if let Err(e) = navigate_external(link.payment.as_str()) {
                    log::error!("❌ {}", e);
                    set_redirecting.set(false);
                    state.notify(ToastKind::Error, e.to_string());
                }
            }
            Err(e) => {
                log::error!("❌ Error constructing payment URL: {}", e);
                state.notify(ToastKind::Error, e.to_string());
            }
        }
    };

    let tokens = move || {
        config.with(|c| {
            c.payment_options
                .as_ref()
                .map(|o| o.token_list().join(", "))
                .unwrap_or_default()
        })
    };
    let chains = move || {
        config.with(|c| {
            c.payment_options
                .as_ref()
                .map(|o| o.chain_list().join(", "))
                .unwrap_or_default()
        })
    };
    let amount = move || {
        config.with(|c| {
            c.payment_options.as_ref().and_then(|o| {
                o.amount
                    .as_ref()
                    .map(|amount| format!("{} {}", amount, o.display_currency()))
            })
        })
    };

    let button_style = move || {
        let cursor = if preview { "cursor: default; opacity: 0.7;" } else { "cursor: pointer;" };
        format!("{} {}", config.with(|c| c.button_style.css()), cursor)
    };

    view! {
        <div class="payment-card">
            <div class="payment-card-header">
                <h2>"💳 " {move || config.with(|c| c.display_title().to_string())}</h2>
            </div>
            <div class="payment-card-body">
                <p class="payment-description">
                    {move || config.with(|c| c.display_description().to_string())}
                </p>

                <div class="payment-details">
                    <div class="detail-row">
                        <span class="detail-label">"Recipient"</span>
                        <span class="detail-value">{move || config.with(|c| c.recipient.clone())}</span>
                    </div>
                    <Show when=move || !tokens().is_empty()>
                        <div class="detail-row">
                            <span class="detail-label">"Tokens"</span>
                            <span class="detail-value">{tokens}</span>
                        </div>
                    </Show>
                    <Show when=move || !chains().is_empty()>
                        <div class="detail-row">
                            <span class="detail-label">"Chains"</span>
                            <span class="detail-value">{chains}</span>
                        </div>
                    </Show>
                    <Show when=move || amount().is_some()>
                        <div class="detail-row">
                            <span class="detail-label">"Amount"</span>
                            <span class="detail-value">{move || amount().unwrap_or_default()}</span>
                        </div>
                    </Show>
                </div>

                <button
                    class="pay-button"
                    style=button_style
                    prop:disabled=move || preview || redirecting.get()
                    on:click=on_pay
                >
                    {move || {
                        if redirecting.get() {
                            "Redirecting to Yodl...".to_string()
                        } else if preview {
                            "Preview Mode".to_string()
                        } else {
                            format!("{} →", config.with(|c| c.button_style.button_text.clone()))
                        }
                    }}
                </button>
            </div>
            <div class="payment-card-footer">"Powered by Yodl - Secure crypto payments"</div>
        </div>
    }
}

/// `/:slug` - the saved configuration's payment page.
#[component]
pub fn PaymentPage() -> impl IntoView {
    let state = use_app_state();
    let params = use_params_map();
    let route_slug = Signal::derive(move || params.with(|p| p.get("slug").cloned()));
    let config = Signal::derive(move || state.saved.get().unwrap_or_default());

    let og_title = move || {
        config.with(|c| match c.meta.as_ref().filter(|m| !m.title.is_empty()) {
            Some(meta) => meta.title.clone(),
            None => c.display_title().to_string(),
        })
    };
    let og_description = move || {
        config.with(|c| match c.meta.as_ref().filter(|m| !m.description.is_empty()) {
            Some(meta) => meta.description.clone(),
            None => c.display_description().to_string(),
        })
    };
    let og_image = move || {
        config.with(|c| c.meta.as_ref().map(|m| m.image.clone()).unwrap_or_default())
    };

    view! {
        <Title text=og_title/>
        <Meta property="og:title" content=og_title/>
        <Meta property="og:description" content=og_description/>
        <Meta name="description" content=og_description/>
        <Meta property="og:image" content=og_image/>

        <div class="payment-page">
            <PaymentCard config=config route_slug=route_slug/>
        </div>
    }
}
