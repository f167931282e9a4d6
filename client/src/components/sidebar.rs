//! Collapsible navigation sidebar.
//!
//! ARCHITECTURE
//! ============
//! Links are static and the only state is the expanded flag in `UiState`, so
//! the sidebar never interacts with the collection browser.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub glyph: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", glyph: "⌂", href: "/" },
    NavItem { label: "Collection", glyph: "☰", href: "/collection" },
    NavItem { label: "Profile", glyph: "☺", href: "/profile" },
    NavItem { label: "Settings", glyph: "⚙", href: "/settings" },
];

/// Accessible label for the collapse/expand button.
pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded { "Collapse sidebar" } else { "Expand sidebar" }
}

/// Left sidebar with a heading, nav links and footer.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let expanded = move || ui.get().sidebar_expanded;

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || !expanded()>
            <div class="sidebar__inner">
                <div>
                    <div class="sidebar__header">
                        <Show when=expanded>
                            <h2 class="sidebar__title">"Pokémon"</h2>
                        </Show>
                        <button
                            class="btn sidebar__toggle"
                            on:click=move |_| ui.update(UiState::toggle_sidebar)
                            aria-label=move || toggle_label(expanded())
                        >
                            {move || if expanded() { "‹" } else { "›" }}
                        </button>
                    </div>
                    <nav>
                        <ul class="sidebar__links">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a class="sidebar__link" href=item.href title=item.label>
                                                <span class="sidebar__glyph" aria-hidden="true">{item.glyph}</span>
                                                <Show when=expanded>
                                                    <span>{item.label}</span>
                                                </Show>
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>
                </div>
                <div class="sidebar__footer">
                    <Show when=expanded>
                        <p>"© 2024 PokéDex"</p>
                    </Show>
                </div>
            </div>
        </aside>
    }
}
