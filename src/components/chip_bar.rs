//! Chip Bar Component
//!
//! One "Todo" chip plus one chip per catalog section. Exactly one chip is
//! active at a time; active styling is recomputed from the store on every
//! render rather than toggled in place.

use leptos::prelude::*;

use crate::menu::ALL_SECTIONS;
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn ChipBar() -> impl IntoView {
    let store = use_site_store();

    // (id, label) pairs; empty until the catalog is loaded.
    let chips = Memo::new(move |_| {
        let mut chips = vec![(ALL_SECTIONS.to_string(), "Todo".to_string())];
        if let Some(catalog) = store.catalog().get() {
            chips.extend(
                catalog
                    .sections
                    .iter()
                    .map(|s| (s.id.clone(), s.title.clone())),
            );
        }
        chips
    });

    view! {
        <div class="chips">
            <For
                each=move || chips.get()
                key=|(id, _)| id.clone()
                children=move |(id, label)| {
                    let active_id = id.clone();
                    let chip_class = move || {
                        if store.active_section().get() == active_id {
                            "chip active"
                        } else {
                            "chip"
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=chip_class
                            on:click=move |_| store.active_section().set(id.clone())
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}
