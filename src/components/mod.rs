//! UI Components
//!
//! Thin adapters from the pure menu pipeline to DOM nodes.

mod chip_bar;
mod map_embed;
mod menu_grid;
mod search_box;

pub use chip_bar::ChipBar;
pub use map_embed::MapEmbed;
pub use menu_grid::MenuGrid;
pub use search_box::SearchBox;
