//! Table components for the members panel:
//! - `columns`: column definitions and row heights
//! - `header`: select-all checkbox and schema column titles
//! - `row`: one member row with inline editing

pub mod columns;
pub mod header;
pub mod row;
