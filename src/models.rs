//! Catalog Models
//!
//! Data structures matching the menu JSON document.

use serde::{Deserialize, Serialize};

/// The full parsed menu: an ordered list of sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub sections: Vec<Section>,
}

/// A named grouping of menu items (e.g. "Pastelería").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// One menu entry. Only `name` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
}

/// Prices come in two shapes: a number, or a pre-formatted string
/// like "Consultar". `null`/absent deserializes to `None` on the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}
