//! Sign-in surface with Login and Sign Up tabs.
//!
//! Submission is a local stub: after field validation it logs the attempt,
//! sets the placeholder token flag and returns to the collection. No
//! credentials leave the browser or get stored.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::session::store_placeholder_token;

const MISSING_LOGIN_FIELDS: &str = "Enter both email and password.";
const MISSING_SIGNUP_FIELDS: &str = "Enter your name, email and password.";

/// Which form the card shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    SignUp,
}

impl AuthTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::SignUp => "Sign Up",
        }
    }

    /// Identifier used in submission logs.
    pub fn key(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::SignUp => "signup",
        }
    }
}

/// Input type for password fields given the visibility toggle.
pub fn password_input_type(show_password: bool) -> &'static str {
    if show_password { "text" } else { "password" }
}

/// Trim and require both login fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_LOGIN_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Trim and require all sign-up fields.
pub fn validate_signup_input(name: &str, email: &str, password: &str) -> Result<(String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_SIGNUP_FIELDS);
    }
    Ok((name.to_owned(), email.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let active_tab = RwSignal::new(AuthTab::Login);
    let show_password = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let tab = active_tab.get();
        let checked = match tab {
            AuthTab::Login => validate_login_input(&email.get(), &password.get()).map(|_| ()),
            AuthTab::SignUp => validate_signup_input(&name.get(), &email.get(), &password.get()).map(|_| ()),
        };
        if let Err(message) = checked {
            info.set(message.to_owned());
            return;
        }
        #[cfg(feature = "hydrate")]
        log::info!("{} form submitted", tab.key());
        info.set(String::new());
        password.set(String::new());
        store_placeholder_token();
        auth.set(AuthState::resolved(true));
        navigate("/", NavigateOptions::default());
    };

    let select_tab = move |tab: AuthTab| {
        active_tab.set(tab);
        info.set(String::new());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Welcome to PokéDex"</h1>
                <p class="login-card__subtitle">"Sign in to your account or create a new one"</p>

                <div class="login-tabs" role="tablist">
                    {[AuthTab::Login, AuthTab::SignUp]
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="login-tabs__trigger"
                                    class:login-tabs__trigger--active=move || active_tab.get() == tab
                                    role="tab"
                                    type="button"
                                    on:click=move |_| select_tab(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <form class="login-form" on:submit=on_submit>
                    <Show when=move || active_tab.get() == AuthTab::SignUp>
                        <label class="login-label" for="signup-name">"Full Name"</label>
                        <input
                            id="signup-name"
                            class="login-input"
                            type="text"
                            placeholder="John Doe"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>

                    <label class="login-label" for="auth-email">"Email"</label>
                    <input
                        id="auth-email"
                        class="login-input"
                        type="email"
                        placeholder="johndoe@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />

                    <label class="login-label" for="auth-password">"Password"</label>
                    <div class="login-password">
                        <input
                            id="auth-password"
                            class="login-input"
                            type=move || password_input_type(show_password.get())
                            placeholder="••••••••"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="btn login-password__toggle"
                            type="button"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                            aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                        >
                            {move || if show_password.get() { "🙈" } else { "👁" }}
                        </button>
                    </div>

                    <button class="login-button" type="submit">
                        {move || active_tab.get().label()}
                    </button>
                </form>

                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>

                <p class="login-card__footer">
                    "By signing in, you agree to our "
                    <a href="#">"Terms of Service"</a>
                    " and "
                    <a href="#">"Privacy Policy"</a>
                    "."
                </p>
            </div>
        </div>
    }
}
