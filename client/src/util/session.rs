//! Placeholder session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! "Signed in" means only that a `token` key exists in `localStorage`. No
//! value is verified and nothing expires; this gate decides which surface to
//! show, it does not protect anything.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::storage::{load_item, save_item};

pub const TOKEN_KEY: &str = "token";
const PLACEHOLDER_TOKEN: &str = "placeholder";

/// True when the token flag is present in browser storage.
pub fn has_token() -> bool {
    load_item(TOKEN_KEY).is_some()
}

/// Set the token flag after a stub sign-in.
pub fn store_placeholder_token() {
    save_item(TOKEN_KEY, PLACEHOLDER_TOKEN);
}

/// Redirect only after the lookup finished and found no token.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.needs_sign_in()
}

/// Resolve the gate from storage once the app runs in the browser.
///
/// Server renders leave `auth` in its loading state so the hydrated markup
/// matches until this effect runs.
pub fn install_session_lookup(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        let authenticated = has_token();
        #[cfg(feature = "hydrate")]
        log::debug!("session gate resolved: authenticated={authenticated}");
        auth.set(AuthState::resolved(authenticated));
    });
}

/// Redirect to `/login` whenever the gate has resolved without a token.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
