//! UI Components
//!
//! Leptos components for the gallery page.

mod tab_bar;
mod cat_grid;
mod cat_card;
mod status_line;

pub use tab_bar::TabBar;
pub use cat_grid::CatGrid;
pub use cat_card::CatCard;
pub use status_line::StatusLine;
