use super::collapse::ExpansionStore;
use super::scroll::ScrollTracker;

/// Local UI state. The messages themselves belong to the feed.
#[derive(Default)]
pub struct AppState {
    pub draft: String,
    pub expansion: ExpansionStore,
    pub scroll: ScrollTracker,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
