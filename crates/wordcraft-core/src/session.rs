//! Debounced analysis for editors that re-analyze as the writer types.
//!
//! Each [`AnalysisSession::submit`] takes a ticket from a shared generation
//! counter, waits out the debounce delay, and analyzes only if no newer
//! request or [`AnalysisSession::cancel`] arrived meanwhile. A superseded
//! request resolves to `None` as soon as it is superseded.

use std::time::Duration;

use tokio::sync::watch;

use crate::analysis::{self, Analysis};
use crate::profile::StyleProfile;
use crate::suggestion::DEFAULT_SUGGESTION_LIMIT;

/// Debounce delay used by [`AnalysisSession::default`].
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Serializes analysis requests so only the latest one produces a result.
#[derive(Debug)]
pub struct AnalysisSession {
    delay: Duration,
    limit: usize,
    generation: watch::Sender<u64>,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl AnalysisSession {
    /// Create a session that waits `delay` before analyzing.
    pub fn new(delay: Duration) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            delay,
            limit: DEFAULT_SUGGESTION_LIMIT,
            generation,
        }
    }

    /// Keep at most `limit` suggestions per result.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The debounce delay.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Queue `text` for analysis.
    ///
    /// Resolves to `None` when a later `submit` or a `cancel` supersedes this
    /// request before its delay elapses.
    pub async fn submit(&self, text: &str, profile: Option<&StyleProfile>) -> Option<Analysis> {
        let ticket = self.bump();
        let mut changes = self.generation.subscribe();
        if *changes.borrow_and_update() != ticket {
            return None;
        }

        if !self.delay.is_zero() {
            tokio::select! {
                () = tokio::time::sleep(self.delay) => {}
                _ = changes.changed() => {
                    tracing::debug!(ticket, "analysis request superseded");
                    return None;
                }
            }
        }

        if *self.generation.borrow() != ticket {
            tracing::debug!(ticket, "analysis request superseded");
            return None;
        }

        tracing::debug!(ticket, "running debounced analysis");
        Some(analysis::analyze_with_limit(text, profile, self.limit))
    }

    /// Drop any pending request.
    pub fn cancel(&self) {
        let ticket = self.bump();
        tracing::debug!(ticket, "analysis requests cancelled");
    }

    fn bump(&self) -> u64 {
        let mut ticket = 0;
        self.generation.send_modify(|g| {
            *g += 1;
            ticket = *g;
        });
        ticket
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::{Instant, sleep};

    use super::*;

    const TEXT: &str = "The door was opened. She said nothing.";

    #[tokio::test(start_paused = true)]
    async fn zero_delay_analyzes_immediately() {
        let session = AnalysisSession::new(Duration::ZERO);
        let start = Instant::now();
        let analysis = session.submit(TEXT, None).await.unwrap();
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(analysis.suggestions.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_the_delay() {
        let session = AnalysisSession::new(Duration::from_millis(500));
        let start = Instant::now();
        let analysis = session.submit(TEXT, None).await;
        assert!(start.elapsed() >= Duration::from_millis(500));
        assert_eq!(analysis, Some(analysis::analyze(TEXT, None)));
    }

    #[tokio::test(start_paused = true)]
    async fn newer_request_supersedes_older() {
        let session = AnalysisSession::new(Duration::from_millis(500));
        let start = Instant::now();

        let first = async {
            let result = session.submit("Old draft.", None).await;
            (result, start.elapsed())
        };
        let second = async {
            sleep(Duration::from_millis(100)).await;
            session.submit(TEXT, None).await
        };

        let ((stale, resolved_after), fresh) = tokio::join!(first, second);
        assert!(stale.is_none());
        assert_eq!(resolved_after, Duration::from_millis(100));
        assert_eq!(fresh.unwrap().stats.word_count, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_request() {
        let session = AnalysisSession::new(Duration::from_millis(500));
        let pending = session.submit(TEXT, None);
        let cancel = async {
            sleep(Duration::from_millis(50)).await;
            session.cancel();
        };
        let (result, ()) = tokio::join!(pending, cancel);
        assert!(result.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn session_limit_applies() {
        let session = AnalysisSession::new(Duration::ZERO).with_limit(1);
        let analysis = session.submit(TEXT, None).await.unwrap();
        assert_eq!(analysis.suggestions.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn requests_after_cancel_still_run() {
        let session = AnalysisSession::new(Duration::from_millis(10));
        session.cancel();
        assert!(session.submit(TEXT, None).await.is_some());
    }
}
