//! Menu Grid Component
//!
//! Renders one of four things depending on the load phase and the filter
//! result: a loading card, an error card, a "no results" card, or the list
//! of menu item cards.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::menu::{self, CardRecord};
use crate::store::{use_site_store, LoadPhase, SiteStateStoreFields};

#[component]
pub fn MenuGrid() -> impl IntoView {
    let store = use_site_store();
    let config = expect_context::<SiteConfig>();

    let cards = Memo::new(move |_| {
        let Some(catalog) = store.catalog().get() else {
            return Vec::new();
        };
        let ui = menu::UiState {
            active_section: store.active_section().get(),
            query: store.query().get(),
        };
        menu::visible_cards(&catalog, &ui, &config)
    });

    view! {
        <div class="menuGrid" id="menuGrid">
            {move || match store.phase().get() {
                LoadPhase::Loading => view! {
                    <div class="card">
                        <p class="muted">"Cargando carta..."</p>
                    </div>
                }.into_any(),
                LoadPhase::Error(message) => view! {
                    <div class="card">
                        <p><strong>"Error cargando la carta."</strong></p>
                        <p class="muted">{message}</p>
                        <p class="muted small">
                            "Tip: Abrí el sitio con un servidor local (no con file://)."
                        </p>
                    </div>
                }.into_any(),
                LoadPhase::Ready => {
                    let cards = cards.get();
                    if cards.is_empty() {
                        view! {
                            <div class="card">
                                <p class="muted">"No hay resultados para tu búsqueda."</p>
                            </div>
                        }.into_any()
                    } else {
                        cards.into_iter().map(menu_card).collect_view().into_any()
                    }
                }
            }}
        </div>
    }
}

fn menu_card(card: CardRecord) -> impl IntoView {
    view! {
        <article class="menuItem" data-cat=card.category.clone()>
            <p class="cat">{card.category.clone()}</p>
            <div class="titleRow">
                <h4>{card.name}</h4>
                {card.badge.map(|b| view! { <span class="badge">{b}</span> })}
            </div>
            {card.body.map(|b| view! { <p class="muted">{b}</p> })}
            <div class="bottom">
                <div class="price">{card.price}</div>
                <a class="quick" href=card.order_href target="_blank" rel="noopener">
                    "Pedir"
                </a>
            </div>
        </article>
    }
}
