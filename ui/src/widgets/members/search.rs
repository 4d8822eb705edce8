//! Search box with explicit submit.

use egui::{Response, Ui};
use roster_business::MemberTableState;

/// Search input plus submit button. The filter only applies on Enter in
/// the field or on the button, never per keystroke.
pub fn search_bar(state: &mut MemberTableState, ui: &mut Ui) -> Response {
    ui.horizontal(|ui| {
        let input =
            ui.add(egui::TextEdit::singleline(&mut state.search_input).hint_text("Search..."));

        let mut submit = ui.button("🔍 Search").clicked();

        // Check for Enter key press
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        if submit {
            state.submit_search();
        }

        input
    })
    .inner
}
