//! Header row for the members table.

use egui_extras::TableRow;
use roster_business::{MemberTableState, Schema};

/// Renders the select-all checkbox, one title per schema field, and the
/// actions column. The select-all checkbox is page-scoped and reads as
/// unchecked over an empty page.
pub fn render_header(state: &mut MemberTableState, header: &mut TableRow<'_, '_>) {
    header.col(|ui| {
        let mut all_selected = state.page_fully_selected();
        if ui.checkbox(&mut all_selected, "").changed() {
            state.toggle_page_selection();
        }
    });

    for field in state.schema().fields() {
        header.col(|ui| {
            ui.strong(Schema::column_title(field));
        });
    }

    header.col(|ui| {
        ui.strong("Actions");
    });
}
