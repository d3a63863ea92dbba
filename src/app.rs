//! Lúmina Landing Page App
//!
//! Page skeleton plus the one startup effect: fetch the menu catalog and
//! move the store from Loading to Ready or Error. Load failures all land
//! here; the grid shows the error card and the console gets the details.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ChipBar, MapEmbed, MenuGrid, SearchBox};
use crate::config::SiteConfig;
use crate::links;
use crate::loader;
use crate::store::{LoadPhase, SiteState, SiteStateStoreFields, SiteStore};

const MENU_URL: &str = "./data/menu.json";

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::from_window();
    let store: SiteStore = Store::new(SiteState::default());

    provide_context(store);
    provide_context(config.clone());

    // Load the catalog once at startup. No retry: Error is terminal.
    spawn_local(async move {
        match loader::load_catalog(MENU_URL).await {
            Ok(catalog) => {
                web_sys::console::log_1(
                    &format!("[menu] {} secciones cargadas", catalog.sections.len()).into(),
                );
                store.catalog().set(Some(catalog));
                store.phase().set(LoadPhase::Ready);
            }
            Err(err) => {
                web_sys::console::error_1(&err.to_string().into());
                store.phase().set(LoadPhase::Error(err.to_string()));
            }
        }
    });

    let business = config.business_name().to_string();
    let tagline = config
        .business
        .tagline
        .clone()
        .unwrap_or_else(|| "Casa de té".to_string());
    let description = config.business.description.clone().unwrap_or_default();
    let copyright = config
        .business
        .copyright
        .clone()
        .unwrap_or_else(|| business.clone());
    let hours_text = config.hours_text().to_string();
    let logo = config.assets.logo.clone();

    let wa_href = links::wa_link(
        &config.whatsapp_phone(),
        &config.whatsapp_default_message(),
    );
    let maps_href = links::maps_link(&config);
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <header class="topbar">
            <div class="brand">
                {logo.map(|src| view! { <img class="logo" src=src alt="" /> })}
                <span>{business.clone()}</span>
            </div>
            <a class="btn wa" href=wa_href.clone() target="_blank" rel="noopener">
                "WhatsApp"
            </a>
        </header>

        <section class="hero">
            <h1>{business.clone()}</h1>
            <p class="tagline">{tagline}</p>
            <p class="muted">{description}</p>
            <a class="btn wa" href=wa_href.clone() target="_blank" rel="noopener">
                "Consultar / Reservar"
            </a>
        </section>

        <section class="menu" id="menu">
            <h2>"La carta"</h2>
            <SearchBox />
            <ChipBar />
            <MenuGrid />
            <a class="btn wa" href=wa_href.clone() target="_blank" rel="noopener">
                "Pedir por WhatsApp"
            </a>
        </section>

        <section class="hours" id="hours">
            <h2>"Horarios"</h2>
            <p id="hoursText">{hours_text}</p>
            <a class="btn wa" href=wa_href.clone() target="_blank" rel="noopener">
                "Reservar"
            </a>
        </section>

        <section class="map" id="map">
            <h2>"Dónde estamos"</h2>
            <MapEmbed />
            <a class="btn" href=maps_href target="_blank" rel="noopener">
                "Cómo llegar"
            </a>
        </section>

        <footer class="footer">
            <p class="muted">
                "© " {year} " " {copyright} " · Hecho con cariño"
            </p>
            <a class="quick" href=wa_href target="_blank" rel="noopener">
                "Escribinos"
            </a>
        </footer>
    }
}
