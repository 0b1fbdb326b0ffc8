//! Debounced place suggestions.
//!
//! Every accepted keystroke re-arms a single timer task. When the timer runs out
//! the task performs the geocoding lookup and reports back through a channel;
//! the controller applies those reports in [`AutocompleteController::handle_event`].
//!
//! Only one timer is alive at a time. Superseding input aborts it, and every
//! report carries the ticket of the input that produced it so a report from a
//! superseded query is dropped instead of overwriting newer suggestions.

use std::{sync::Arc, time::Duration};

use tokio::{sync::mpsc, task::AbortHandle};
use tracing::{debug, trace};

use crate::{Config, model::PlaceSuggestion, provider::WeatherProvider};

/// Queries shorter than this (after trimming) never reach the provider.
pub const MIN_QUERY_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompletePhase {
    Idle,
    Debouncing,
    Fetching,
    Suggested,
}

/// Report sent by the timer task.
#[derive(Debug, Clone, PartialEq)]
pub enum AutocompleteEvent {
    FetchStarted { ticket: u64 },
    SuggestionsLoaded { ticket: u64, suggestions: Vec<PlaceSuggestion> },
}

#[derive(Debug)]
pub struct AutocompleteController {
    provider: Arc<dyn WeatherProvider>,
    delay: Duration,
    limit: u8,
    query: String,
    suggestions: Vec<PlaceSuggestion>,
    phase: AutocompletePhase,
    ticket: u64,
    pending: Option<AbortHandle>,
    events_tx: mpsc::UnboundedSender<AutocompleteEvent>,
    events_rx: mpsc::UnboundedReceiver<AutocompleteEvent>,
}

impl AutocompleteController {
    pub fn new(provider: Arc<dyn WeatherProvider>, config: &Config) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            provider,
            delay: config.debounce(),
            limit: config.suggestion_limit,
            query: String::new(),
            suggestions: Vec::new(),
            phase: AutocompletePhase::Idle,
            ticket: 0,
            pending: None,
            events_tx,
            events_rx,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[PlaceSuggestion] {
        &self.suggestions
    }

    pub fn phase(&self) -> AutocompletePhase {
        self.phase
    }

    /// True while a timer or lookup is outstanding.
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, AutocompletePhase::Debouncing | AutocompletePhase::Fetching)
    }

    /// React to new input text.
    ///
    /// `suppressed` is set while a weather result is showing; suggestions are
    /// then cleared and nothing is scheduled. Must be called from within a
    /// tokio runtime.
    pub fn on_query_change(&mut self, text: &str, suppressed: bool) {
        self.query = text.to_string();
        self.cancel_pending();

        let trimmed = text.trim();
        if suppressed || trimmed.chars().count() < MIN_QUERY_CHARS {
            self.suggestions.clear();
            self.phase = AutocompletePhase::Idle;
            return;
        }

        self.ticket += 1;
        let ticket = self.ticket;
        let query = trimmed.to_string();
        let provider = Arc::clone(&self.provider);
        let tx = self.events_tx.clone();
        let delay = self.delay;
        let limit = self.limit;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(AutocompleteEvent::FetchStarted { ticket }).is_err() {
                return;
            }

            let suggestions = match provider.geocode(&query, limit).await {
                Ok(suggestions) => suggestions,
                Err(err) => {
                    debug!(%query, error = %err, "autocomplete lookup failed; showing no suggestions");
                    Vec::new()
                }
            };

            let _ = tx.send(AutocompleteEvent::SuggestionsLoaded { ticket, suggestions });
        });

        self.pending = Some(handle.abort_handle());
        self.phase = AutocompletePhase::Debouncing;
    }

    /// Apply one report from the timer task. Returns true if state changed.
    pub fn handle_event(&mut self, event: AutocompleteEvent) -> bool {
        match event {
            AutocompleteEvent::FetchStarted { ticket } if ticket == self.ticket && self.is_pending() => {
                self.phase = AutocompletePhase::Fetching;
                true
            }
            AutocompleteEvent::SuggestionsLoaded { ticket, suggestions }
                if ticket == self.ticket && self.is_pending() =>
            {
                self.pending = None;
                self.suggestions = suggestions;
                self.phase = AutocompletePhase::Suggested;
                true
            }
            stale => {
                trace!(?stale, current = self.ticket, "dropping stale autocomplete event");
                false
            }
        }
    }

    /// Wait for the next report from the timer task and apply it.
    ///
    /// Returns `None` without waiting when nothing is outstanding.
    pub async fn next_event(&mut self) -> Option<bool> {
        if !self.is_pending() {
            return None;
        }
        let event = self.events_rx.recv().await?;
        Some(self.handle_event(event))
    }

    /// Drive outstanding timers and lookups until the suggestion list is final.
    pub async fn settle(&mut self) {
        while self.next_event().await.is_some() {}
    }

    /// Cancel any pending lookup and drop the current suggestions.
    pub fn clear(&mut self) {
        self.cancel_pending();
        self.suggestions.clear();
        self.phase = AutocompletePhase::Idle;
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for AutocompleteController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeProvider;

    fn controller(provider: &Arc<FakeProvider>) -> AutocompleteController {
        AutocompleteController::new(provider.clone(), &Config::default())
    }

    #[tokio::test(start_paused = true)]
    async fn short_query_never_schedules_a_fetch() {
        let provider = Arc::new(FakeProvider::answering("London"));
        let mut ac = controller(&provider);

        ac.on_query_change("Lo", false);
        assert_eq!(ac.phase(), AutocompletePhase::Idle);
        assert_eq!(ac.next_event().await, None);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(provider.calls().is_empty());
        assert!(ac.suggestions().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn whitespace_does_not_count_towards_length() {
        let provider = Arc::new(FakeProvider::answering("London"));
        let mut ac = controller(&provider);

        ac.on_query_change("  Lo  ", false);
        assert_eq!(ac.phase(), AutocompletePhase::Idle);
        assert_eq!(ac.query(), "  Lo  ");
    }

    #[tokio::test(start_paused = true)]
    async fn superseding_keystroke_cancels_the_first_timer() {
        let provider = Arc::new(FakeProvider::answering("London"));
        let mut ac = controller(&provider);

        ac.on_query_change("Lon", false);
        assert_eq!(ac.phase(), AutocompletePhase::Debouncing);
        tokio::time::sleep(Duration::from_millis(200)).await;
        ac.on_query_change("Lond", false);

        ac.settle().await;
        // well past the first timer's deadline
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert_eq!(provider.geocode_queries(), vec!["Lond".to_string()]);
        assert_eq!(ac.phase(), AutocompletePhase::Suggested);
        assert_eq!(ac.suggestions().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_waits_for_the_debounce_delay() {
        let provider = Arc::new(FakeProvider::answering("London"));
        let mut ac = controller(&provider);

        ac.on_query_change("Paris", false);
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(provider.calls().is_empty());

        assert_eq!(ac.next_event().await, Some(true));
        assert_eq!(ac.phase(), AutocompletePhase::Fetching);
        assert_eq!(ac.next_event().await, Some(true));
        assert_eq!(ac.phase(), AutocompletePhase::Suggested);
        assert_eq!(provider.geocode_queries(), vec!["Paris".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn lookup_failure_yields_empty_suggestions() {
        let provider = Arc::new(FakeProvider::failing());
        let mut ac = controller(&provider);

        ac.on_query_change("Nowhere", false);
        ac.settle().await;

        assert_eq!(ac.phase(), AutocompletePhase::Suggested);
        assert!(ac.suggestions().is_empty());
        assert_eq!(provider.geocode_queries().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn shortening_the_query_clears_suggestions() {
        let provider = Arc::new(FakeProvider::answering("London"));
        let mut ac = controller(&provider);

        ac.on_query_change("London", false);
        ac.settle().await;
        assert!(!ac.suggestions().is_empty());

        ac.on_query_change("Lo", false);
        assert!(ac.suggestions().is_empty());
        assert_eq!(ac.phase(), AutocompletePhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn suppressed_input_cancels_and_clears() {
        let provider = Arc::new(FakeProvider::answering("London"));
        let mut ac = controller(&provider);

        ac.on_query_change("London", false);
        ac.on_query_change("London", true);
        assert_eq!(ac.phase(), AutocompletePhase::Idle);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(provider.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_reports_are_ignored() {
        let provider = Arc::new(FakeProvider::answering("London"));
        let mut ac = controller(&provider);

        ac.on_query_change("Berlin", false);
        let stale = AutocompleteEvent::SuggestionsLoaded {
            ticket: 0,
            suggestions: vec![crate::testing::place("Old", "XX", 0.0, 0.0)],
        };

        assert!(!ac.handle_event(stale));
        assert!(ac.suggestions().is_empty());
        assert_eq!(ac.phase(), AutocompletePhase::Debouncing);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_controller_cancels_the_timer() {
        let provider = Arc::new(FakeProvider::answering("London"));
        let mut ac = controller(&provider);

        ac.on_query_change("Madrid", false);
        drop(ac);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(provider.calls().is_empty());
    }
}
