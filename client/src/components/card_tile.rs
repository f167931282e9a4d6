//! Summary tile for one card in the collection grid.

#[cfg(test)]
#[path = "card_tile_test.rs"]
mod card_tile_test;

use leptos::prelude::*;

use crate::state::catalog::CardRecord;

/// Keys that activate a focused tile, matching native button behavior.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// A clickable, focusable card summary: name, image, type and HP.
#[component]
pub fn CardTile(card: &'static CardRecord, on_select: Callback<&'static CardRecord>) -> impl IntoView {
    view! {
        <div
            class="card-tile"
            role="button"
            tabindex="0"
            on:click=move |_| on_select.run(card)
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    on_select.run(card);
                }
            }
        >
            <div class="card-tile__header">
                <h3 class="card-tile__title">{card.name}</h3>
            </div>
            <div class="card-tile__content">
                <img class="card-tile__image" src=card.image alt=card.name/>
                <p class="card-tile__meta">"Type: " {card.kind}</p>
                <p class="card-tile__meta">"HP: " {card.hp}</p>
            </div>
        </div>
    }
}
