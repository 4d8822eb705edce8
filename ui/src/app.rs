use chrono::Utc;
use roster_business::MemberTableState;

use crate::api::{FetchReceiver, Fetcher, create_fetch_channel};
use crate::widgets;

/// The Roster application: one member table over one remote list.
pub struct RosterApp {
    table: MemberTableState,
    fetcher: Fetcher,
    fetch_rx: FetchReceiver,
    fetch_started: bool,
}

impl RosterApp {
    pub fn new(members_url: impl Into<String>) -> Self {
        let (tx, rx) = create_fetch_channel();
        Self {
            table: MemberTableState::new(),
            fetcher: Fetcher::new(members_url, tx),
            fetch_rx: rx,
            fetch_started: false,
        }
    }

    pub fn table(&self) -> &MemberTableState {
        &self.table
    }

    /// Applies any completed fetches. Failures only log and surface a
    /// status label; the table keeps rendering with whatever it has.
    fn poll_fetch_results(&mut self) {
        while let Ok(result) = self.fetch_rx.try_recv() {
            match result {
                Ok(records) => self.table.update_records(records, Utc::now()),
                Err(err) => {
                    log::error!("failed to fetch members: {err}");
                    self.table.set_error(err.to_string());
                }
            }
        }
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The one fetch on mount. The Refresh button in the panel re-runs
        // it on demand.
        if !self.fetch_started {
            self.fetch_started = true;
            self.table.set_fetching();
            self.fetcher.spawn(ctx.clone());
        }

        self.poll_fetch_results();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Roster");
            ui.separator();
            widgets::members_panel(&mut self.table, &self.fetcher, ui);
        });
    }
}
