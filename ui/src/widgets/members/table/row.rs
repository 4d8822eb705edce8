//! Row rendering for the members table.

use egui_extras::TableRow;
use roster_business::{MemberTableState, Record};

/// Renders one member row: selection checkbox, one cell per schema field,
/// action buttons.
///
/// While this row is in edit mode every field except `id` renders as a
/// text edit bound to the edit buffer; the record list itself is only
/// touched when Save is clicked. `record` is a snapshot taken before the
/// table was built, so handlers may mutate `state` freely.
pub fn render_row(state: &mut MemberTableState, record: &Record, row: &mut TableRow<'_, '_>) {
    let id = record.id();
    let editing = state.is_editing(id);

    row.col(|ui| {
        let mut checked = state.is_selected(id);
        if ui.checkbox(&mut checked, "").changed() {
            state.toggle_row(id);
        }
    });

    for field in record.field_names() {
        row.col(|ui| {
            if editing && field != "id" {
                if let Some(text) = state.edit_value_mut(field) {
                    ui.add(egui::TextEdit::singleline(text).desired_width(f32::INFINITY));
                }
            } else {
                // The id stays read-only in edit mode; it is the row's identity.
                ui.label(record.field_text(field));
            }
        });
    }

    row.col(|ui| {
        if editing {
            if ui.button("Save").clicked() {
                state.save_edit();
            }
        } else {
            ui.horizontal(|ui| {
                if ui.button("✏").on_hover_text("Edit row").clicked() {
                    state.start_edit(id);
                }
                if ui.button("🗑").on_hover_text("Delete row").clicked() {
                    state.delete_row(id);
                }
            });
        }
    });
}
