//! Shared state of the forecast screen.

use std::sync::Arc;
use tokio::sync::watch;

use crate::{Location, WeatherPayload};

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    pub search_active: bool,
    pub candidates: Vec<Location>,
    pub weather: Option<WeatherPayload>,
    pub loading: bool,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self { search_active: false, candidates: Vec::new(), weather: None, loading: true }
    }
}

impl ScreenState {
    /// Candidates are only listed while the search box is open.
    pub fn visible_candidates(&self) -> &[Location] {
        if self.search_active { &self.candidates } else { &[] }
    }
}

/// Handle to the one `ScreenState` both controllers mutate.
///
/// Clones share the same state. Every update notifies subscribers.
#[derive(Debug, Clone)]
pub struct Screen {
    tx: Arc<watch::Sender<ScreenState>>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ScreenState::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> ScreenState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ScreenState> {
        self.tx.subscribe()
    }

    pub fn update(&self, modify: impl FnOnce(&mut ScreenState)) {
        self.tx.send_modify(modify);
    }

    pub fn is_loading(&self) -> bool {
        self.tx.borrow().loading
    }
}
