//! Collection browser page: search field, card grid and detail dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the gated landing route. It owns the query and selection for one
//! browsing session and derives everything else from the catalog in context.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::card_dialog::CardDialog;
use crate::components::card_tile::CardTile;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::state::catalog::{Catalog, CardRecord};
use crate::state::collection::{CollectionState, DetailDialog, ResultPhase};
use crate::util::session::install_unauth_redirect;

pub const NO_RESULTS_MESSAGE: &str = "No Pokémon found. Try a different search term.";

/// Gated page: sidebar plus the collection browser.
/// Redirects to `/login` when no session token is present.
#[component]
pub fn CollectionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().authenticated
            fallback=move || {
                view! {
                    <div class="collection-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="app-layout">
                <Sidebar/>
                <main class="app-layout__main">
                    <CollectionBrowser/>
                </main>
            </div>
        </Show>
    }
}

/// Reactive values derived from the browser state.
pub struct BrowserViews {
    pub visible: Memo<Vec<&'static CardRecord>>,
    pub phase: Memo<ResultPhase>,
    pub dialog: Signal<DetailDialog>,
}

/// Derive the grid, result phase and dialog from `(catalog, state)`.
pub fn derive_views(state: RwSignal<CollectionState>, catalog: Catalog) -> BrowserViews {
    BrowserViews {
        visible: Memo::new(move |_| state.with(|s| s.visible(catalog))),
        phase: Memo::new(move |_| state.with(|s| s.phase(catalog))),
        dialog: Signal::derive(move || state.with(CollectionState::dialog)),
    }
}

/// Search field, filtered grid and detail dialog over the catalog in context.
#[component]
pub fn CollectionBrowser() -> impl IntoView {
    let catalog = use_context::<Catalog>().unwrap_or_default();
    let state = RwSignal::new(CollectionState::default());

    let BrowserViews { visible, phase, dialog } = derive_views(state, catalog);

    let on_select = Callback::new(move |card: &'static CardRecord| {
        #[cfg(feature = "hydrate")]
        log::debug!("inspect card id={} name={}", card.id, card.name);
        state.update(|s| s.select(card));
    });
    let on_close = Callback::new(move |()| {
        state.update(|s| {
            s.clear();
        });
    });

    view! {
        <div class="collection">
            <h1 class="collection__title">"My Pokémon Collection"</h1>
            <input
                class="collection__search"
                type="text"
                placeholder="Search Pokémon..."
                prop:value=move || state.with(|s| s.query.clone())
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    state.update(|s| s.set_query(query));
                }
            />
            <div class="collection__grid">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|card| view! { <CardTile card=card on_select=on_select/> })
                        .collect::<Vec<_>>()
                }}
            </div>
            <Show when=move || phase.get() == ResultPhase::EmptyResult>
                <p class="collection__empty">{NO_RESULTS_MESSAGE}</p>
            </Show>
            <CardDialog dialog=dialog on_close=on_close/>
        </div>
    }
}
