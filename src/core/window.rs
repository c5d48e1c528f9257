//! Per-page browser context handed to every page controller
//!
//! A [`Window`] owns the page's [`Document`], its durable storage, the
//! current location and a virtual clock. Timers never fire on their own:
//! the host moves time forward with [`Window::advance`].

use crate::core::dom::Document;
use crate::core::storage::KeyValueStore;
use crate::debug;
use std::time::Duration;

/// Work deferred with [`Window::set_timeout`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    /// Change the location to the given URL
    Navigate(String),
}

#[derive(Debug, Clone)]
struct PendingTimer {
    due: Duration,
    seq: u64,
    action: TimerAction,
}

/// The page context: document, storage, location, timers and dialogs
pub struct Window {
    document: Document,
    storage: Box<dyn KeyValueStore>,
    location: String,
    history: Vec<String>,
    now: Duration,
    timers: Vec<PendingTimer>,
    next_seq: u64,
    alerts: Vec<String>,
}

impl Window {
    /// Create a window showing `document` at `about:blank`
    #[must_use]
    pub fn new(document: Document, storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            document,
            storage,
            location: "about:blank".to_string(),
            history: Vec::new(),
            now: Duration::ZERO,
            timers: Vec::new(),
            next_seq: 0,
            alerts: Vec::new(),
        }
    }

    /// Set the initial location without recording a navigation
    #[must_use]
    pub fn at(mut self, location: &str) -> Self {
        location.clone_into(&mut self.location);
        self
    }

    /// The page's document
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// The page's document, mutably
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Durable storage for this origin
    #[must_use]
    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    /// Durable storage for this origin, mutably
    pub fn storage_mut(&mut self) -> &mut dyn KeyValueStore {
        self.storage.as_mut()
    }

    /// Current location
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Every navigation performed, oldest first
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Time elapsed on the virtual clock
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Messages shown with [`alert`](Self::alert), oldest first
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Number of timers waiting to fire
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Schedule `action` to run once `delay` has elapsed
    pub fn set_timeout(&mut self, delay: Duration, action: TimerAction) {
        debug!("timer #{} scheduled in {}ms: {action:?}", self.next_seq, delay.as_millis());
        self.timers.push(PendingTimer {
            due: self.now.saturating_add(delay),
            seq: self.next_seq,
            action,
        });
        self.next_seq += 1;
    }

    /// Move the clock forward by `elapsed`, firing due timers in order
    ///
    /// Timers with equal deadlines fire in scheduling order. A navigation
    /// unloads the page, so it abandons every timer still pending.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.now.saturating_add(elapsed);
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, timer)| timer.due <= target)
                .min_by_key(|(_, timer)| (timer.due, timer.seq))
                .map(|(index, _)| index);
            let Some(index) = next else { break };

            let timer = self.timers.remove(index);
            self.now = timer.due;
            match timer.action {
                TimerAction::Navigate(url) => self.navigate(&url),
            }
        }
        self.now = target;
    }

    /// Navigate to `url` immediately
    pub fn navigate(&mut self, url: &str) {
        if !self.timers.is_empty() {
            debug!("navigation to {url} abandons {} pending timer(s)", self.timers.len());
            self.timers.clear();
        }
        url.clone_into(&mut self.location);
        self.history.push(url.to_string());
    }

    /// Show a modal message
    pub fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
