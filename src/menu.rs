//! Menu Pipeline
//!
//! Pure transformation from (catalog, UI state) to an ordered list of
//! [`CardRecord`]s. Components only adapt these records to DOM nodes, so the
//! whole filter/format path is testable without a browser.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::SiteConfig;
use crate::links;
use crate::models::{Catalog, Price};
use crate::search::{matches_item, normalize};

/// Sentinel section id meaning "no section filter".
pub const ALL_SECTIONS: &str = "all";

/// Filter state owned by the rendering layer. Mutated only through the
/// update helpers; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub active_section: String,
    pub query: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ALL_SECTIONS.to_string(),
            query: String::new(),
        }
    }
}

impl UiState {
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn set_section(&mut self, section_id: &str) {
        self.active_section = section_id.to_string();
    }
}

/// Display record for one menu card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardRecord {
    /// Section title shown as the category label.
    pub category: String,
    pub name: String,
    /// Formatted price, possibly empty.
    pub price: String,
    /// Schedule note rendered as an inline badge.
    pub badge: Option<String>,
    /// Body text under the title: description, else a non-schedule note.
    pub body: Option<String>,
    /// WhatsApp inquiry link for this item.
    pub order_href: String,
}

static SCHEDULE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d{1,2}:\d{2}\b|\bs[áa]bados\b|\bdomingos\b|\bferiados\b")
        .expect("schedule pattern is valid")
});

/// A note reading like an hour range or a day/holiday mention is a schedule
/// badge, not body text.
pub fn is_schedule_note(note: &str) -> bool {
    SCHEDULE_RE.is_match(note)
}

/// Absent/empty prices render as nothing; string prices pass through
/// verbatim; numeric prices get `$` plus es-AR thousands grouping.
pub fn price_text(price: Option<&Price>) -> String {
    match price {
        None => String::new(),
        Some(Price::Text(s)) => s.clone(),
        Some(Price::Amount(n)) => format!("${}", group_thousands(*n as i64)),
    }
}

// es-AR grouping: dot as the thousands separator.
fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Apply the active section filter and the normalized query, preserving
/// catalog order, and format each surviving item into a card.
pub fn visible_cards(catalog: &Catalog, ui: &UiState, config: &SiteConfig) -> Vec<CardRecord> {
    let query = normalize(ui.query.trim());
    let phone = config.whatsapp_phone();
    let business = config.business_name();

    catalog
        .sections
        .iter()
        .filter(|s| ui.active_section == ALL_SECTIONS || s.id == ui.active_section)
        .flat_map(|section| {
            section
                .items
                .iter()
                .filter(|item| matches_item(item, &query))
                .map(|item| {
                    let note = item.note.as_deref().unwrap_or("");
                    let badge = (!note.is_empty() && is_schedule_note(note))
                        .then(|| note.to_string());
                    // Description wins; a non-schedule note is the fallback
                    // body; a schedule note never doubles as body text.
                    let body = item
                        .desc
                        .clone()
                        .filter(|d| !d.is_empty())
                        .or_else(|| {
                            (badge.is_none() && !note.is_empty()).then(|| note.to_string())
                        });
                    let msg = links::item_inquiry(&item.name, &section.title, business);
                    CardRecord {
                        category: section.title.clone(),
                        name: item.name.clone(),
                        price: price_text(item.price.as_ref()),
                        badge,
                        body,
                        order_href: links::wa_link(&phone, &msg),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, Section};

    fn make_item(name: &str, desc: Option<&str>, note: Option<&str>, price: Option<Price>) -> Item {
        Item {
            name: name.to_string(),
            desc: desc.map(String::from),
            note: note.map(String::from),
            price,
        }
    }

    fn make_catalog() -> Catalog {
        Catalog {
            sections: vec![
                Section {
                    id: "cafe".to_string(),
                    title: "Café".to_string(),
                    items: vec![
                        make_item("Espresso", None, None, Some(Price::Amount(1500.0))),
                        make_item(
                            "Cold Brew",
                            Some("Extracción en frío"),
                            None,
                            Some(Price::Amount(2800.0)),
                        ),
                    ],
                },
                Section {
                    id: "dulces".to_string(),
                    title: "Dulces".to_string(),
                    items: vec![make_item(
                        "Brunch",
                        None,
                        Some("Sábados y Domingos 11:00 a 16:00"),
                        Some(Price::Text("Consultar".to_string())),
                    )],
                },
            ],
        }
    }

    #[test]
    fn test_empty_query_all_sections_is_identity() {
        let catalog = make_catalog();
        let cards = visible_cards(&catalog, &UiState::default(), &SiteConfig::default());
        let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Espresso", "Cold Brew", "Brunch"]);
    }

    #[test]
    fn test_section_filter_narrows_to_one_section() {
        let catalog = make_catalog();
        let mut ui = UiState::default();
        ui.set_section("dulces");
        let cards = visible_cards(&catalog, &ui, &SiteConfig::default());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].category, "Dulces");
    }

    #[test]
    fn test_query_filters_across_sections() {
        let catalog = make_catalog();
        let mut ui = UiState::default();
        ui.set_query("frío");
        let cards = visible_cards(&catalog, &ui, &SiteConfig::default());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "Cold Brew");
    }

    #[test]
    fn test_empty_catalog_yields_no_cards() {
        let catalog = Catalog { sections: vec![] };
        let cards = visible_cards(&catalog, &UiState::default(), &SiteConfig::default());
        assert!(cards.is_empty());
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(price_text(Some(&Price::Amount(1500.0))), "$1.500");
        assert_eq!(price_text(Some(&Price::Amount(950.0))), "$950");
        assert_eq!(price_text(Some(&Price::Amount(1234567.0))), "$1.234.567");
        assert_eq!(
            price_text(Some(&Price::Text("Consultar".to_string()))),
            "Consultar"
        );
        assert_eq!(price_text(Some(&Price::Text(String::new()))), "");
        assert_eq!(price_text(None), "");
    }

    #[test]
    fn test_schedule_note_becomes_badge() {
        let catalog = make_catalog();
        let mut ui = UiState::default();
        ui.set_section("dulces");
        let cards = visible_cards(&catalog, &ui, &SiteConfig::default());
        assert_eq!(
            cards[0].badge.as_deref(),
            Some("Sábados y Domingos 11:00 a 16:00")
        );
        assert_eq!(cards[0].body, None);
    }

    #[test]
    fn test_plain_note_becomes_body_text() {
        assert!(!is_schedule_note("Sin gluten"));
        let catalog = Catalog {
            sections: vec![Section {
                id: "s".to_string(),
                title: "S".to_string(),
                items: vec![make_item("Budín", None, Some("Sin gluten"), None)],
            }],
        };
        let cards = visible_cards(&catalog, &UiState::default(), &SiteConfig::default());
        assert_eq!(cards[0].badge, None);
        assert_eq!(cards[0].body.as_deref(), Some("Sin gluten"));
    }

    #[test]
    fn test_description_wins_over_note_body() {
        let catalog = Catalog {
            sections: vec![Section {
                id: "s".to_string(),
                title: "S".to_string(),
                items: vec![make_item(
                    "Tarta",
                    Some("De frutos rojos"),
                    Some("Sin gluten"),
                    None,
                )],
            }],
        };
        let cards = visible_cards(&catalog, &UiState::default(), &SiteConfig::default());
        assert_eq!(cards[0].body.as_deref(), Some("De frutos rojos"));
    }

    #[test]
    fn test_card_order_link_is_item_specific() {
        let catalog = make_catalog();
        let cards = visible_cards(&catalog, &UiState::default(), &SiteConfig::default());
        assert!(cards[0].order_href.starts_with("https://wa.me/"));
        assert!(cards[0].order_href.contains("Espresso"));
    }

    #[test]
    fn test_is_schedule_note_patterns() {
        assert!(is_schedule_note("11:00 a 16:00"));
        assert!(is_schedule_note("Abierto feriados"));
        assert!(is_schedule_note("Solo sábados"));
        assert!(!is_schedule_note("Porción doble"));
    }
}
