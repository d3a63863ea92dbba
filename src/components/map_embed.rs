//! Lazy Map Embed Component
//!
//! The iframe gets its `src` only once the map region scrolls into view
//! (IntersectionObserver, threshold 0.12). The observer disconnects after
//! the first trigger, so the embed loads at most once per page lifetime.

use leptos::html::Iframe;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlIFrameElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::SiteConfig;
use crate::links;

const VISIBILITY_THRESHOLD: f64 = 0.12;

#[component]
pub fn MapEmbed() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let frame_ref = NodeRef::<Iframe>::new();
    let (loaded, set_loaded) = signal(false);
    let wired = StoredValue::new(false);

    let embed_url = links::maps_embed_url(&config);

    Effect::new(move |_| {
        let Some(frame) = frame_ref.get() else {
            return;
        };
        if wired.get_value() {
            return;
        }
        wired.set_value(true);

        let frame: HtmlIFrameElement = frame.into();
        let target = frame.clone();
        let url = embed_url.clone();

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let visible = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|e| e.is_intersecting());
                if visible {
                    frame.set_src(&url);
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

        if let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        {
            observer.observe(&target);
        }
        // One observer per page lifetime; the leak is bounded.
        callback.forget();
    });

    // An iframe with no src can still fire load (about:blank); only the
    // real embed hides the skeleton.
    let on_load = move |ev: web_sys::Event| {
        let has_src = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlIFrameElement>().ok())
            .map(|f| !f.src().is_empty() && f.src() != "about:blank")
            .unwrap_or(false);
        if has_src {
            set_loaded.set(true);
        }
    };

    view! {
        <div class="mapWrap" class=("is-loaded", loaded)>
            <div
                class="mapSkeleton"
                style:display=move || if loaded.get() { "none" } else { "block" }
            >
                <p class="muted">"Cargando mapa..."</p>
            </div>
            <iframe
                node_ref=frame_ref
                class="mapsFrame"
                title="Mapa"
                on:load=on_load
            ></iframe>
        </div>
    }
}
