//! First / previous / numbered / next / last pagination controls.

use egui::{Button, Response, Ui};
use roster_business::MemberTableState;

/// Renders the pagination row. The first/previous buttons are disabled on
/// page 1 and next/last on the final page; the current page button is
/// highlighted. Page numbers track the filtered count, so they shrink as
/// records are deleted or filtered away.
pub fn pagination_controls(state: &mut MemberTableState, ui: &mut Ui) -> Response {
    ui.horizontal(|ui| {
        let page = state.current_page();
        let pages = state.page_count();

        if ui.add_enabled(page > 1, Button::new("«")).clicked() {
            state.first_page();
        }
        if ui.add_enabled(page > 1, Button::new("‹")).clicked() {
            state.prev_page();
        }

        for number in 1..=pages {
            let button = Button::new(number.to_string()).selected(number == page);
            if ui.add(button).clicked() {
                state.goto_page(number);
            }
        }

        if ui.add_enabled(page < pages, Button::new("›")).clicked() {
            state.next_page();
        }
        if ui.add_enabled(page < pages, Button::new("»")).clicked() {
            state.last_page();
        }
    })
    .response
}
