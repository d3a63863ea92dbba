//! Search Box Component
//!
//! Free-text menu search. Keystrokes are debounced (120 ms quiescence)
//! before the query lands in the store, so rapid typing causes one
//! re-render instead of one per key.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::store::{use_site_store, SiteStateStoreFields};

const DEBOUNCE_MS: u32 = 120;

#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_site_store();
    // Pending debounce timer; replacing it cancels the previous one.
    let pending = StoredValue::new_local(None::<Timeout>);

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let timeout = Timeout::new(DEBOUNCE_MS, move || {
            store.query().set(value);
        });
        // Drop of the old Timeout clears its callback.
        pending.set_value(Some(timeout));
    };

    view! {
        <input
            type="search"
            class="menuSearch"
            placeholder="Buscar en la carta..."
            on:input=on_input
        />
    }
}
