//! Shared application state, provided once as Leptos context.

use leptos::*;
use paypage::error::EditResult;
use paypage::{ConfigEditor, ConfigStore, Configuration};

use crate::services::LocalStorage;
use crate::types::{submit_error_message, ToastKind, ToastQueue};
use crate::TOAST_DURATION_MS;

/// Store, form session and toasts shared by every route.
#[derive(Clone, Copy)]
pub struct AppState {
    store: StoredValue<ConfigStore<LocalStorage>>,
    /// Last successfully saved configuration, `None` until the first save.
    pub saved: RwSignal<Option<Configuration>>,
    /// In-progress form state.
    pub editor: RwSignal<ConfigEditor>,
    pub toasts: RwSignal<ToastQueue>,
}

impl AppState {
    pub fn new() -> Self {
        let store = ConfigStore::new(LocalStorage);
        let saved = store.load_saved();
        let editor = ConfigEditor::new(saved.clone().unwrap_or_default());

        if saved.is_some() {
            log::info!("📂 Loaded saved configuration");
        }

        Self {
            store: store_value(store),
            saved: create_rw_signal(saved),
            editor: create_rw_signal(editor),
            toasts: create_rw_signal(ToastQueue::default()),
        }
    }

    /// Read from the configuration being edited (tracked).
    pub fn read<T>(&self, f: impl FnOnce(&Configuration) -> T) -> T {
        self.editor.with(|editor| f(editor.config()))
    }

    pub fn edit(&self, f: impl FnOnce(&mut ConfigEditor)) {
        self.editor.update(f);
    }

    /// Apply an edit that may be rejected; rejections become error toasts.
    pub fn try_edit(&self, f: impl FnOnce(&mut ConfigEditor) -> EditResult<()>) {
        let mut outcome = Ok(());
        self.editor.update(|editor| outcome = f(editor));
        if let Err(e) = outcome {
            log::warn!("⚠️ Edit rejected: {}", e);
            self.notify(ToastKind::Error, e.to_string());
        }
    }

    /// Validate and persist the form state.
    pub fn submit(&self) {
        let result = self
            .editor
            .with_untracked(|editor| self.store.try_update_value(|store| store.submit(editor)));

        match result {
            Some(Ok(config)) => {
                log::info!("✅ Configuration saved for {}", config.recipient);
                // The stored slug is normalized; show that in the form too
                self.editor.set(ConfigEditor::new(config.clone()));
                self.saved.set(Some(config));
                self.notify(ToastKind::Success, "Configuration saved successfully!");
            }
            Some(Err(e)) => {
                log::warn!("❌ Submit failed: {}", e);
                self.notify(ToastKind::Error, submit_error_message(&e));
            }
            None => log::error!("❌ Configuration store was disposed"),
        }
    }

    /// Show a toast that dismisses itself after [`TOAST_DURATION_MS`].
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        let mut id = 0;
        self.toasts.update(|queue| id = queue.push(kind, message));

        let toasts = self.toasts;
        gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
            toasts.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The [`AppState`] provided by `App`.
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
