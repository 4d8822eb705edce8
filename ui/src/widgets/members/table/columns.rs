//! Column layout for the members table.

use egui_extras::Column;

/// Fixed widths for the non-data columns
pub const CHECKBOX_WIDTH: f32 = 28.0;
pub const ACTIONS_WIDTH: f32 = 96.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Column set: selection checkbox, one flexible column per schema field,
/// actions. With no records loaded `field_count` is 0 and only the
/// checkbox and actions columns remain.
pub fn table_columns(field_count: usize) -> Vec<Column> {
    let mut columns = vec![Column::exact(CHECKBOX_WIDTH)];
    columns.extend((0..field_count).map(|_| Column::remainder().at_least(60.0)));
    columns.push(Column::exact(ACTIONS_WIDTH));
    columns
}
