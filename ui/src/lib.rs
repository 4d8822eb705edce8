#![warn(clippy::all, rust_2018_idioms)]

pub mod api;
pub mod app;
pub mod env;
pub mod widgets;

pub use app::RosterApp;
