//! Tabbed configuration form.
//!
//! Every input writes straight into the shared [`ConfigEditor`](paypage::ConfigEditor);
//! nothing reaches storage until the form is submitted.

use leptos::*;
use paypage::{Currency, PaymentOptions, Webhooks, SUPPORTED_CHAINS, SUPPORTED_TOKENS};

use crate::state::{use_app_state, AppState};
use crate::types::{px_value, FormTab};
use crate::{BORDER_RADIUS_RANGE, FONT_SIZE_RANGE, SITE_URL};

#[component]
pub fn ConfigForm() -> impl IntoView {
    let state = use_app_state();
    let (tab, set_tab) = create_signal(FormTab::Basic);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        log::info!("💾 Saving configuration...");
        state.submit();
    };

    view! {
        <form class="config-form" on:submit=on_submit>
            <div class="tabs">
                {FormTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                type="button"
                                class="tab"
                                class:active=move || tab.get() == t
                                title=t.tooltip()
                                on:click=move |_| set_tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="tab-panel">
                {move || match tab.get() {
                    FormTab::Basic => view! { <BasicTab/> }.into_view(),
                    FormTab::Button => view! { <ButtonTab/> }.into_view(),
                    FormTab::ThankYou => view! { <ThankYouTab/> }.into_view(),
                    FormTab::Payment => view! { <PaymentTab/> }.into_view(),
                    FormTab::Social => view! { <SocialTab/> }.into_view(),
                }}
            </div>

            <button type="submit" class="btn btn-primary btn-block">"Save Configuration"</button>
        </form>
    }
}

// =============================================================================
// Basic
// =============================================================================

#[component]
fn BasicTab() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="form-group">
            <label for="recipient">"ENS Name or Address"</label>
            <input
                id="recipient"
                type="text"
                placeholder="vitalik.eth or 0x..."
                prop:value=move || state.read(|c| c.recipient.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.edit(|editor| editor.set_recipient(value));
                }
            />
        </div>

        <div class="form-group">
            <label for="slug">"URL Slug"</label>
            <div class="input-prefixed">
                <span class="input-prefix">{format!("{}/", SITE_URL.trim_end_matches('/'))}</span>
                <input
                    id="slug"
                    type="text"
                    placeholder="my-page"
                    prop:value=move || state.read(|c| c.slug.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.edit(|editor| editor.set_slug(&value));
                    }
                />
            </div>
            <p class="hint">"Lowercase letters, numbers and hyphens only"</p>
        </div>

        <div class="form-group">
            <label for="title">"Page Title"</label>
            <input
                id="title"
                type="text"
                placeholder="Make a Payment"
                prop:value=move || state.read(|c| c.title.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.edit(|editor| editor.set_title(value));
                }
            />
        </div>

        <div class="form-group">
            <label for="description">"Description"</label>
            <textarea
                id="description"
                rows="3"
                placeholder="Support by sending crypto"
                prop:value=move || state.read(|c| c.description.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.edit(|editor| editor.set_description(value));
                }
            ></textarea>
        </div>
    }
}

// =============================================================================
// Button style
// =============================================================================

#[component]
fn ButtonTab() -> impl IntoView {
    let state = use_app_state();
    let radius = move || state.read(|c| px_value(&c.button_style.border_radius, BORDER_RADIUS_RANGE));
    let font = move || state.read(|c| px_value(&c.button_style.font_size, FONT_SIZE_RANGE));

    view! {
        <div class="form-row">
            <ColorInput
                label="Background Color"
                value=Signal::derive(move || state.read(|c| c.button_style.background_color.clone()))
                on_change=Callback::new(move |color: String| state.edit(|editor| editor.set_button_background(color)))
            />
            <ColorInput
                label="Text Color"
                value=Signal::derive(move || state.read(|c| c.button_style.text_color.clone()))
                on_change=Callback::new(move |color: String| state.edit(|editor| editor.set_button_text_color(color)))
            />
        </div>

        <div class="form-group">
            <label>"Border Radius: " {move || format!("{}px", radius())}</label>
            <input
                type="range"
                min=BORDER_RADIUS_RANGE.0
                max=BORDER_RADIUS_RANGE.1
                prop:value=move || radius().to_string()
                on:input=move |ev| {
                    if let Ok(px) = event_target_value(&ev).parse::<u32>() {
                        state.edit(|editor| editor.set_border_radius(px));
                    }
                }
            />
        </div>

        <div class="form-group">
            <label>"Font Size: " {move || format!("{}px", font())}</label>
            <input
                type="range"
                min=FONT_SIZE_RANGE.0
                max=FONT_SIZE_RANGE.1
                prop:value=move || font().to_string()
                on:input=move |ev| {
                    if let Ok(px) = event_target_value(&ev).parse::<u32>() {
                        state.edit(|editor| editor.set_font_size(px));
                    }
                }
            />
        </div>

        <div class="form-group">
            <label for="padding">"Padding"</label>
            <input
                id="padding"
                type="text"
                placeholder="12px 24px"
                prop:value=move || state.read(|c| c.button_style.padding.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.edit(|editor| editor.set_padding(value));
                }
            />
        </div>

        <div class="form-group">
            <label for="button-text">"Button Text"</label>
            <input
                id="button-text"
                type="text"
                prop:value=move || state.read(|c| c.button_style.button_text.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.edit(|editor| editor.set_button_text(value));
                }
            />
        </div>

        <div class="button-sample">
            <button type="button" style=move || state.read(|c| c.button_style.css())>
                {move || state.read(|c| c.button_style.button_text.clone())}
            </button>
        </div>
    }
}

#[component]
fn ColorInput(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group color-input">
            <label>{label}</label>
            <div class="color-pair">
                <input
                    type="color"
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.call(event_target_value(&ev))
                />
                <input
                    type="text"
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.call(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

// =============================================================================
// Thank-you page
// =============================================================================

#[component]
fn ThankYouTab() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="form-row">
            <ColorInput
                label="Background Color"
                value=Signal::derive(move || state.read(|c| c.thank_you_page.background_color.clone()))
                on_change=Callback::new(move |color: String| state.edit(|editor| editor.set_thank_you_background(color)))
            />
            <ColorInput
                label="Text Color"
                value=Signal::derive(move || state.read(|c| c.thank_you_page.text_color.clone()))
                on_change=Callback::new(move |color: String| state.edit(|editor| editor.set_thank_you_text_color(color)))
            />
        </div>

        <div class="form-group">
            <label for="thank-you-message">"Message"</label>
            <textarea
                id="thank-you-message"
                rows="3"
                prop:value=move || state.read(|c| c.thank_you_page.message.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.edit(|editor| editor.set_thank_you_message(value));
                }
            ></textarea>
        </div>

        <div class="form-group checkbox">
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || state.read(|c| c.thank_you_page.show_confetti)
                    on:change=move |ev| {
                        let enabled = event_target_checked(&ev);
                        state.edit(|editor| editor.set_confetti(enabled));
                    }
                />
                " Show confetti 🎉"
            </label>
        </div>

        <div class="thank-you-sample" style=move || state.read(|c| c.thank_you_page.css())>
            {move || state.read(|c| c.thank_you_page.message.clone())}
        </div>
    }
}

// =============================================================================
// Payment options
// =============================================================================

fn read_options<T>(state: AppState, f: impl FnOnce(&PaymentOptions) -> T) -> T {
    state.read(|c| match c.payment_options.as_ref() {
        Some(options) => f(options),
        None => f(&PaymentOptions::default()),
    })
}

#[component]
fn PaymentTab() -> impl IntoView {
    let state = use_app_state();
    let webhook_count = create_memo(move |_| read_options(state, |o| o.webhooks.len()));
    let webhooks_full = move || read_options(state, |o| o.webhooks.is_full());

    let on_currency = move |ev: ev::Event| {
        match event_target_value(&ev).parse::<Currency>() {
            Ok(currency) => state.edit(|editor| editor.set_currency(currency)),
            Err(e) => log::warn!("⚠️ {}", e),
        }
    };

    view! {
        <div class="form-group">
            <label>"Accepted Tokens"</label>
            <div class="chip-grid">
                {SUPPORTED_TOKENS
                    .iter()
                    .map(|&symbol| {
                        view! {
                            <label class="chip">
                                <input
                                    type="checkbox"
                                    prop:checked=move || read_options(state, |o| o.token_list().contains(&symbol))
                                    on:change=move |_| state.try_edit(|editor| editor.toggle_token(symbol))
                                />
                                {symbol}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="hint">"Leave empty to accept any token"</p>
        </div>

        <div class="form-group">
            <label>"Accepted Chains"</label>
            <div class="chip-grid">
                {SUPPORTED_CHAINS
                    .iter()
                    .map(|chain| {
                        let id = chain.id;
                        view! {
                            <label class="chip" title=id>
                                <input
                                    type="checkbox"
                                    prop:checked=move || read_options(state, |o| o.chain_list().contains(&id))
                                    on:change=move |_| state.try_edit(|editor| editor.toggle_chain(id))
                                />
                                {chain.name}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>

        <div class="form-row">
            <div class="form-group">
                <label for="currency">"Currency"</label>
                <select
                    id="currency"
                    on:change=on_currency
                >
                    {Currency::ALL
                        .into_iter()
                        .map(|currency| {
                            view! {
                                <option
                                    value=currency.code()
                                    prop:selected=move || read_options(state, |o| o.display_currency() == currency)
                                >
                                    {currency.code()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="amount">"Amount"</label>
                <input
                    id="amount"
                    type="text"
                    inputmode="decimal"
                    placeholder="Optional"
                    prop:value=move || read_options(state, |o| o.amount.clone().unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.edit(|editor| editor.set_amount(value));
                    }
                />
            </div>
        </div>

        <div class="form-group">
            <label for="memo">"Memo"</label>
            <input
                id="memo"
                type="text"
                placeholder="Optional"
                prop:value=move || read_options(state, |o| o.memo.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.edit(|editor| editor.set_memo(value));
                }
            />
        </div>

        <div class="form-group">
            <label>{format!("Webhooks (max {})", Webhooks::MAX)}</label>
            <For
                each=move || 0..webhook_count.get()
                key=|index| *index
                children=move |index| {
                    view! {
                        <div class="webhook-row">
                            <input
                                type="url"
                                placeholder="https://example.com/webhook"
                                prop:value=move || {
                                    read_options(state, |o| o.webhooks.as_slice().get(index).cloned().unwrap_or_default())
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.try_edit(|editor| editor.set_webhook(index, value));
                                }
                            />
                            <button
                                type="button"
                                class="btn btn-secondary"
                                title="Remove webhook"
                                on:click=move |_| state.try_edit(|editor| editor.remove_webhook(index))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
            <button
                type="button"
                class="btn btn-secondary"
                prop:disabled=webhooks_full
                on:click=move |_| {
                    let mut added = false;
                    state.edit(|editor| added = editor.add_webhook());
                    if !added {
                        log::warn!("⚠️ Webhook limit reached");
                    }
                }
            >
                "+ Add Webhook"
            </button>
        </div>

        <details class="text-record">
            <summary>"ENS text record (me.yodl)"</summary>
            <pre>{move || read_options(state, |o| o.to_text_record().to_string())}</pre>
        </details>
    }
}

// =============================================================================
// Social preview
// =============================================================================

#[component]
fn SocialTab() -> impl IntoView {
    let state = use_app_state();
    let meta = move |f: fn(&paypage::MetaConfig) -> String| {
        state.read(|c| c.meta.as_ref().map(f).unwrap_or_default())
    };

    view! {
        <div class="form-group">
            <label for="meta-title">"Social Title"</label>
            <input
                id="meta-title"
                type="text"
                prop:value=move || meta(|m| m.title.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.edit(|editor| editor.set_meta_title(value));
                }
            />
        </div>

        <div class="form-group">
            <label for="meta-description">"Social Description"</label>
            <textarea
                id="meta-description"
                rows="2"
                prop:value=move || meta(|m| m.description.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.edit(|editor| editor.set_meta_description(value));
                }
            ></textarea>
        </div>

        <div class="form-group">
            <label for="meta-image">"Image URL"</label>
            <input
                id="meta-image"
                type="url"
                placeholder="https://..."
                prop:value=move || meta(|m| m.image.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.edit(|editor| editor.set_meta_image(value));
                }
            />
        </div>

        <div class="social-card">
            <Show when=move || !meta(|m| m.image.clone()).is_empty()>
                <img class="social-image" src=move || meta(|m| m.image.clone()) alt="Social preview"/>
            </Show>
            <div class="social-body">
                <div class="social-title">
                    {move || {
                        let title = meta(|m| m.title.clone());
                        if title.is_empty() { state.read(|c| c.display_title().to_string()) } else { title }
                    }}
                </div>
                <div class="social-description">
                    {move || {
                        let description = meta(|m| m.description.clone());
                        if description.is_empty() {
                            state.read(|c| c.display_description().to_string())
                        } else {
                            description
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
