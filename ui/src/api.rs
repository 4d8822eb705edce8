//! The fetch layer: one best-effort GET of the member list.
//!
//! `ehttp` runs the request off the UI thread (a worker thread on native,
//! the browser fetch API on wasm) and invokes the callback on completion.
//! The callback decodes the body and reports over a `flume` channel that
//! the app drains at the top of each frame. No retries, no timeout, no
//! cancellation; a completion arriving after the app is gone is dropped
//! when the send fails.

use roster_business::{FetchError, Record, decode_records};

pub type FetchResult = Result<Vec<Record>, FetchError>;
pub type FetchSender = flume::Sender<FetchResult>;
pub type FetchReceiver = flume::Receiver<FetchResult>;

/// Creates the channel fetch completions are delivered through.
pub fn create_fetch_channel() -> (FetchSender, FetchReceiver) {
    flume::unbounded()
}

/// Handle for issuing member-list fetches from the app and its widgets.
#[derive(Clone)]
pub struct Fetcher {
    url: String,
    tx: FetchSender,
}

impl Fetcher {
    pub fn new(url: impl Into<String>, tx: FetchSender) -> Self {
        Self {
            url: url.into(),
            tx,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues one GET of the member list and requests a repaint when the
    /// result is in.
    pub fn spawn(&self, ctx: egui::Context) {
        let request = ehttp::Request::get(&self.url);
        let tx = self.tx.clone();

        ehttp::fetch(request, move |result| {
            ctx.request_repaint();
            let outcome = match result {
                Ok(response) if response.ok => decode_records(&response.bytes),
                Ok(response) => Err(FetchError::Status(response.status)),
                Err(err) => Err(FetchError::Transport(err)),
            };
            // The receiver is gone when the app shut down mid-flight.
            let _ = tx.send(outcome);
        });
    }
}
