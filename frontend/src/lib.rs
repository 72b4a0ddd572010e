//! Paypage - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for configuring a crypto-payment landing page
//! and serving it under its slug.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /                 ConfigPage                                │
//! │                    ├── Header                                │
//! │                    ├── ConfigForm (tabs) | PreviewPanel      │
//! │                    └── Footer                                │
//! │  /:slug            PaymentPage                               │
//! │  /:slug/thank-you  ThankYouView                              │
//! │  /*                NotFound                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Toaster (all routes)                                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (FormTab, Toast, ConfettiPiece, etc.)
//! - [`state`] - Shared reactive state over the configuration store
//! - [`components`] - UI components (form, preview, payment, thank-you)
//! - [`services`] - Browser storage and navigation

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Form
    FormTab,
    // Toasts
    Toast, ToastKind, ToastQueue,
    // Confetti
    ConfettiPiece,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{use_app_state, AppState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Paypage - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new());

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Toaster/>
            <main>
                <Routes>
                    <Route path="/" view=ConfigPage/>
                    <Route path="/:slug" view=PaymentPage/>
                    <Route path="/:slug/thank-you" view=ThankYouView/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ConfigPage() -> impl IntoView {
    view! {
        <Header/>

        <div class="container">
            <div class="config-layout">
                <section class="config-panel">
                    <h2 class="panel-title">"⚙️ Configure Your Payment Page"</h2>
                    <ConfigForm/>
                </section>
                <section class="preview-panel">
                    <h2 class="panel-title">"👁️ Preview"</h2>
                    <PreviewPanel/>
                </section>
            </div>
        </div>

        <Footer/>
    }
}
