//! The members admin panel and its parts.

mod pagination;
mod panel;
mod search;
mod table;

pub use panel::members_panel;
