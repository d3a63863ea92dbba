//! Outbound Links
//!
//! WhatsApp deep links and Google Maps links. Both map destinations obey the
//! same two-tier rule: a direct URL from config wins, otherwise the link is
//! constructed from the resolved maps query.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

// encodeURIComponent-style set: unreserved characters stay literal.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode(text: &str) -> String {
    utf8_percent_encode(text, QUERY).to_string()
}

/// `https://wa.me/<digits>?text=<message>`. The phone must already be
/// digits-only (config sanitizes it).
pub fn wa_link(phone: &str, text: &str) -> String {
    format!("https://wa.me/{phone}?text={}", encode(text))
}

/// Per-card inquiry message for the "Pedir" link.
pub fn item_inquiry(item_name: &str, section_title: &str, business_name: &str) -> String {
    format!("Hola! Quiero pedir/consultar: {item_name} ({section_title}) — {business_name}.")
}

/// Maps button target: configured URL, else a search-by-query link.
pub fn maps_link(config: &SiteConfig) -> String {
    if let Some(url) = config.location.maps_url.as_deref().filter(|s| !s.is_empty()) {
        return url.to_string();
    }
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        encode(config.maps_query())
    )
}

/// Iframe embed target, same two-tier rule as [`maps_link`].
pub fn maps_embed_url(config: &SiteConfig) -> String {
    if let Some(url) = config.location.maps_embed.as_deref().filter(|s| !s.is_empty()) {
        return url.to_string();
    }
    format!(
        "https://www.google.com/maps?q={}&output=embed",
        encode(config.maps_query())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Location;

    #[test]
    fn test_wa_link_encodes_message() {
        let link = wa_link("5491112345678", "Hola! ¿Hay mesa?");
        assert!(link.starts_with("https://wa.me/5491112345678?text="));
        assert!(!link.contains(' '));
        assert!(!link.contains('¿'));
    }

    #[test]
    fn test_item_inquiry_names_item_and_section() {
        let msg = item_inquiry("Espresso", "Café", "Maison Lúmina");
        assert_eq!(
            msg,
            "Hola! Quiero pedir/consultar: Espresso (Café) — Maison Lúmina."
        );
    }

    #[test]
    fn test_maps_link_prefers_configured_url() {
        let cfg = SiteConfig {
            location: Location {
                maps_url: Some("https://maps.example.com/lumina".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(maps_link(&cfg), "https://maps.example.com/lumina");
    }

    #[test]
    fn test_maps_link_builds_search_query() {
        let cfg = SiteConfig {
            location: Location {
                city: Some("CABA, Buenos Aires".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            maps_link(&cfg),
            "https://www.google.com/maps/search/?api=1&query=CABA%2C%20Buenos%20Aires"
        );
    }

    #[test]
    fn test_embed_url_builds_query_when_unconfigured() {
        let cfg = SiteConfig::default();
        let url = maps_embed_url(&cfg);
        assert!(url.starts_with("https://www.google.com/maps?q="));
        assert!(url.ends_with("&output=embed"));
    }
}
