//! Site Configuration
//!
//! Options come from the `window.SITE_CONFIG` global (camelCase JSON, written
//! by a plain `config.js` the site owner edits). Every field is optional and
//! has a hardcoded fallback, so the page works with no config at all.

use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const FALLBACK_BUSINESS_NAME: &str = "Maison Lúmina";
pub const FALLBACK_PHONE: &str = "5491112345678";
pub const FALLBACK_MAPS_QUERY: &str = "CABA, Buenos Aires";
pub const FALLBACK_HOURS: &str = "Martes a Domingo — 9:00 a 20:00";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub business: Business,
    pub whatsapp: Whatsapp,
    pub hours: Hours,
    pub location: Location,
    pub assets: Assets,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Business {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Whatsapp {
    pub phone: Option<String>,
    pub default_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hours {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub city: Option<String>,
    pub address: Option<String>,
    pub maps_query: Option<String>,
    pub maps_url: Option<String>,
    pub maps_embed: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assets {
    pub logo: Option<String>,
}

impl SiteConfig {
    /// Read `window.SITE_CONFIG`. Missing global or an unreadable value
    /// both fall back to defaults; config can never break the page.
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        match js_sys::Reflect::get(&window, &JsValue::from_str("SITE_CONFIG")) {
            Ok(value) if !value.is_undefined() && !value.is_null() => {
                serde_wasm_bindgen::from_value(value).unwrap_or_default()
            }
            _ => Self::default(),
        }
    }

    pub fn business_name(&self) -> &str {
        self.business
            .name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_BUSINESS_NAME)
    }

    /// WhatsApp phone, digits only. An empty or all-symbol phone falls
    /// back to the demo number.
    pub fn whatsapp_phone(&self) -> String {
        let digits: String = self
            .whatsapp
            .phone
            .as_deref()
            .unwrap_or("")
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            FALLBACK_PHONE.to_string()
        } else {
            digits
        }
    }

    pub fn whatsapp_default_message(&self) -> String {
        match self
            .whatsapp
            .default_message
            .as_deref()
            .filter(|s| !s.is_empty())
        {
            Some(msg) => msg.to_string(),
            None => format!(
                "Hola! Quisiera hacer una consulta / reserva en {} 😊",
                self.business_name()
            ),
        }
    }

    pub fn hours_text(&self) -> &str {
        self.hours
            .text
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_HOURS)
    }

    /// Search text for the maps links: explicit query, else address,
    /// else city, else the fallback.
    pub fn maps_query(&self) -> &str {
        [
            self.location.maps_query.as_deref(),
            self.location.address.as_deref(),
            self.location.city.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(FALLBACK_MAPS_QUERY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_fallbacks() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.business_name(), FALLBACK_BUSINESS_NAME);
        assert_eq!(cfg.whatsapp_phone(), FALLBACK_PHONE);
        assert_eq!(cfg.maps_query(), FALLBACK_MAPS_QUERY);
        assert_eq!(cfg.hours_text(), FALLBACK_HOURS);
        assert!(cfg.whatsapp_default_message().contains(FALLBACK_BUSINESS_NAME));
    }

    #[test]
    fn test_phone_is_sanitized_to_digits() {
        let cfg = SiteConfig {
            whatsapp: Whatsapp {
                phone: Some("+54 9 11 1234-5678".to_string()),
                default_message: None,
            },
            ..Default::default()
        };
        assert_eq!(cfg.whatsapp_phone(), "5491112345678");
    }

    #[test]
    fn test_non_digit_phone_falls_back() {
        let cfg = SiteConfig {
            whatsapp: Whatsapp {
                phone: Some("---".to_string()),
                default_message: None,
            },
            ..Default::default()
        };
        assert_eq!(cfg.whatsapp_phone(), FALLBACK_PHONE);
    }

    #[test]
    fn test_maps_query_resolution_order() {
        let cfg = SiteConfig {
            location: Location {
                city: Some("CABA".to_string()),
                address: Some("Av. Siempreviva 742".to_string()),
                maps_query: None,
                maps_url: None,
                maps_embed: None,
            },
            ..Default::default()
        };
        assert_eq!(cfg.maps_query(), "Av. Siempreviva 742");
    }
}
