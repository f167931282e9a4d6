//! Modal showing every attribute of the selected card.
//!
//! DESIGN
//! ======
//! Visibility is exactly "a card is selected". Optional attributes render as
//! empty text or an empty list, so an incomplete record still opens. Every
//! dismissal path funnels into a single `on_close` call.

#[cfg(test)]
#[path = "card_dialog_test.rs"]
mod card_dialog_test;

use leptos::prelude::*;

use crate::state::catalog::CardRecord;
use crate::state::collection::DetailDialog;

/// Render an optional measurement with its unit, or nothing when unknown.
pub fn format_measure(value: Option<f64>, unit: &str) -> String {
    value.map(|v| format!("{v} {unit}")).unwrap_or_default()
}

/// Description paragraph text; empty when the record has none.
pub fn description_text(card: &CardRecord) -> &'static str {
    card.description.unwrap_or_default()
}

/// Detail dialog bound to the collection selection.
#[component]
pub fn CardDialog(dialog: Signal<DetailDialog>, on_close: Callback<()>) -> impl IntoView {
    move || dialog.get().card().map(|card| view! { <CardDialogBody card=card on_close=on_close/> })
}

#[component]
fn CardDialogBody(card: &'static CardRecord, on_close: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = dialog_ref.get() {
            let _ = el.focus();
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--card"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <h2 class="dialog__title">{card.name}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) aria-label="Close">
                        "✕"
                    </button>
                </div>
                <div class="dialog__image-wrap">
                    <img class="dialog__image" src=card.image alt=card.name/>
                </div>
                <p class="dialog__description">{description_text(card)}</p>
                <div class="dialog__columns">
                    <div>
                        <p class="dialog__field">
                            "Type: " <span class="dialog__value">{card.kind}</span>
                        </p>
                        <p class="dialog__field">
                            "HP: " <span class="dialog__value">{card.hp}</span>
                        </p>
                        <p class="dialog__field">
                            "Height: " <span class="dialog__value">{format_measure(card.height, "m")}</span>
                        </p>
                        <p class="dialog__field">
                            "Weight: " <span class="dialog__value">{format_measure(card.weight, "kg")}</span>
                        </p>
                    </div>
                    <div>
                        <p class="dialog__field">"Abilities:"</p>
                        <ul class="dialog__abilities">
                            {card
                                .ability_list()
                                .iter()
                                .map(|ability| view! { <li class="dialog__value">{*ability}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
