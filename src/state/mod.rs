use crate::api::{ApiClient, ApiError};
use crate::session::Session;
use crate::storage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub(crate) struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

const TOAST_DISMISS_MS: i32 = 4000;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,
    pub session: RwSignal<Session>,
    pub toasts: RwSignal<Vec<Toast>>,
    toast_seq: RwSignal<u64>,
}

impl AppState {
    pub fn new() -> Self {
        let client = ApiClient::load_from_storage();
        let session = Session::new(client.token.clone(), storage::load_cached_user());

        Self {
            api_client: RwSignal::new(client),
            session: RwSignal::new(session),
            toasts: RwSignal::new(vec![]),
            toast_seq: RwSignal::new(0),
        }
    }

    /// Startup transition: a persisted token triggers a profile fetch
    /// (failure clears it); no token means anonymous with no network call.
    pub fn init(&self) {
        if self.session.with_untracked(|s| s.is_authenticated()) {
            self.refresh_profile();
        }
    }

    pub fn login(&self, token: String) {
        self.api_client.update(|c| c.set_token(token.clone()));
        self.session.update(|s| s.login(token));
        // Non-blocking: the UI flips to authenticated before the profile
        // resolves.
        self.refresh_profile();
    }

    pub fn logout(&self) {
        self.api_client.update(|c| c.clear_token());
        self.session.update(|s| s.logout());
    }

    /// Re-fetches the profile without touching the token. A failure on a
    /// still-current ticket is an implicit logout.
    pub fn refresh_profile(&self) {
        let state = *self;
        let client = self.api_client.get_untracked();
        let ticket = self.session.with_untracked(|s| s.begin_profile_fetch());

        spawn_local(async move {
            match client.fetch_profile().await {
                Ok(user) => {
                    let applied = state
                        .session
                        .try_update(|s| s.apply_profile(ticket, user.clone()))
                        .unwrap_or(false);
                    if applied {
                        storage::save_cached_user(&user);
                    }
                }
                Err(_) => {
                    let logged_out = state
                        .session
                        .try_update(|s| s.profile_fetch_failed(ticket))
                        .unwrap_or(false);
                    if logged_out {
                        state.api_client.update(|c| c.clear_token());
                    }
                }
            }
        });
    }

    /// Uniform failure policy: a 401 anywhere ends the session and lands
    /// on the login page; everything else is a transient toast.
    pub fn report_error(&self, error: &ApiError) {
        if error.is_unauthorized() {
            self.logout();
            self.toast_error(error.message.clone());
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
            return;
        }
        self.toast_error(error.message.clone());
    }

    pub fn toast_success(&self, message: impl Into<String>) {
        self.push_toast(ToastLevel::Success, message.into());
    }

    pub fn toast_error(&self, message: impl Into<String>) {
        self.push_toast(ToastLevel::Error, message.into());
    }

    fn push_toast(&self, level: ToastLevel, message: String) {
        let id = self.toast_seq.get_untracked() + 1;
        self.toast_seq.set(id);
        self.toasts.update(|toasts| {
            toasts.push(Toast { id, level, message });
        });

        // Auto-dismiss after a few seconds, react-hot-toast style.
        let toasts = self.toasts;
        let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
            wasm_bindgen::closure::Closure::once_into_js(move || {
                toasts.update(|items| items.retain(|t| t.id != id));
            })
            .as_ref()
            .unchecked_ref(),
            TOAST_DISMISS_MS,
        );
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);
