//! The members admin panel: toolbar, search bar, table, and footer with
//! bulk delete and pagination.

use egui::{Color32, Response, Ui};
use egui_extras::TableBuilder;
use roster_business::{MemberTableState, Record};

use crate::api::Fetcher;

use super::pagination::pagination_controls;
use super::search::search_bar;
use super::table::{columns, header, row};

/// Displays the members panel. All user intents (search, select, edit,
/// delete, paginate) mutate `state` directly; `fetcher` is only used by
/// the Refresh button.
pub fn members_panel(state: &mut MemberTableState, fetcher: &Fetcher, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        toolbar(state, fetcher, ui);
        ui.add_space(4.0);
        search_bar(state, ui);
        ui.add_space(8.0);
        members_table(state, ui);
        ui.add_space(8.0);
        footer(state, ui);
    })
    .response
}

/// Refresh button plus the fetch status line (spinner, error, or the
/// loaded-count summary).
fn toolbar(state: &mut MemberTableState, fetcher: &Fetcher, ui: &mut Ui) {
    ui.horizontal(|ui| {
        if ui.button("🔄 Refresh").clicked() && !state.is_fetching() {
            state.set_fetching();
            fetcher.spawn(ui.ctx().clone());
        }

        if state.is_fetching() {
            ui.spinner();
            ui.label("Loading...");
        } else if let Some(error) = state.error() {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
        } else if let Some(at) = state.last_fetch() {
            ui.label(format!(
                "{} members · updated {}",
                state.len(),
                at.format("%H:%M:%S")
            ));
        }
    });
}

fn members_table(state: &mut MemberTableState, ui: &mut Ui) {
    // Snapshot the visible slice so row handlers may mutate state while
    // this frame still renders the old rows.
    let rows: Vec<Record> = state.visible_page().into_iter().cloned().collect();
    let field_count = state.schema().len();

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for column in columns::table_columns(field_count) {
        builder = builder.column(column);
    }

    builder
        .header(columns::HEADER_HEIGHT, |mut header_row| {
            header::render_header(state, &mut header_row);
        })
        .body(|mut body| {
            for record in &rows {
                body.row(columns::ROW_HEIGHT, |mut table_row| {
                    row::render_row(state, record, &mut table_row);
                });
            }
        });
}

fn footer(state: &mut MemberTableState, ui: &mut Ui) {
    ui.horizontal(|ui| {
        let any_selected = state.selected_count() > 0;
        if ui
            .add_enabled(any_selected, egui::Button::new("Delete Selected"))
            .clicked()
        {
            state.delete_selected();
        }

        ui.separator();
        pagination_controls(state, ui);
    });
}
