//! Catalog Loader
//!
//! Fetches the menu JSON once at startup. Loading is all-or-nothing: every
//! failure maps to one [`LoadError`] variant and surfaces to the top-level
//! boundary in `app.rs`, which shows an error card. There is no retry.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

use crate::models::Catalog;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Fetch falló ({url}). ¿Estás abriendo con file://? Usá un server local. Detalle: {detail}")]
    Fetch { url: String, detail: String },
    #[error("No se pudo cargar {url}. HTTP {status} {status_text}")]
    Http {
        url: String,
        status: u16,
        status_text: String,
    },
    #[error("JSON inválido en {url}: {detail}")]
    Parse { url: String, detail: String },
    #[error("El menú cargó pero no tiene 'sections' como array.")]
    Schema,
}

/// Parse a response body into a catalog. Invalid JSON text is a `Parse`
/// error; well-formed JSON of the wrong shape (no array `sections`, item
/// without a name) is a `Schema` error. No finer distinction is made.
pub fn parse_catalog(url: &str, body: &str) -> Result<Catalog, LoadError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| LoadError::Parse {
            url: url.to_string(),
            detail: e.to_string(),
        })?;
    serde_json::from_value(value).map_err(|_| LoadError::Schema)
}

/// Fetch the catalog document, bypassing the HTTP cache so menu edits show
/// up on reload.
pub async fn load_catalog(url: &str) -> Result<Catalog, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Fetch {
        url: url.to_string(),
        detail: "sin objeto window".to_string(),
    })?;

    let opts = RequestInit::new();
    opts.set_cache(RequestCache::NoStore);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| LoadError::Fetch {
            url: url.to_string(),
            detail: js_error_detail(&e),
        })?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| LoadError::Fetch {
            url: url.to_string(),
            detail: js_error_detail(&e),
        })?;
    let response: Response = response.dyn_into().map_err(|_| LoadError::Fetch {
        url: url.to_string(),
        detail: "respuesta inesperada del fetch".to_string(),
    })?;

    if !response.ok() {
        return Err(LoadError::Http {
            url: url.to_string(),
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let text = JsFuture::from(response.text().map_err(|e| LoadError::Fetch {
        url: url.to_string(),
        detail: js_error_detail(&e),
    })?)
    .await
    .map_err(|e| LoadError::Fetch {
        url: url.to_string(),
        detail: js_error_detail(&e),
    })?;
    let body = text.as_string().unwrap_or_default();

    parse_catalog(url, &body)
}

fn js_error_detail(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{value:?}"))
}
