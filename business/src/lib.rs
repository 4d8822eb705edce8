#![warn(clippy::all, rust_2018_idioms)]

//! Domain logic for the Roster admin table.
//!
//! This crate is UI-free: it owns the record model, the cached column
//! schema, and the table state machine (search, pagination, selection,
//! inline editing). The `ui` crate renders this state and dispatches the
//! intent handlers; nothing in here performs I/O.

pub mod error;
pub mod record;
pub mod table;

pub use error::FetchError;
pub use record::{Record, RecordId, Schema, decode_records};
pub use table::{EditBuffer, MemberTableState, ROWS_PER_PAGE};
