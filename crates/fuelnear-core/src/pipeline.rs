//! Run lifecycle: one ranking pass per new origin, newest run wins.
//!
//! When a fresh origin arrives while a previous pipeline run is still in
//! flight, the new run supersedes the old one. The stale run is not
//! interrupted; its result is discarded at publish time instead of being
//! merged. No locks: a session is one atomic counter, and independent
//! sessions never observe each other.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::station::RankingResult;

/// Hands out run tokens and remembers which run is newest.
///
/// Each caller-visible ranking surface owns one session; server-side
/// multi-tenant callers create one per tenant and stay isolated.
#[derive(Debug, Default)]
pub struct RankSession {
    generation: AtomicU64,
}

impl RankSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run, superseding every token handed out before.
    #[must_use]
    pub fn begin(&self) -> RunToken<'_> {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        RunToken {
            session: self,
            generation,
        }
    }

    fn current(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

/// Proof of which pipeline run a result belongs to.
///
/// Thread the token through the run's suspension points (location wait,
/// remote fetch) and call [`RunToken::publish`] at the end; a superseded
/// run's result comes back as `None` and must be dropped.
#[derive(Debug)]
pub struct RunToken<'a> {
    session: &'a RankSession,
    generation: u64,
}

impl RunToken<'_> {
    /// Whether no newer run has started on this session.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.session.current() == self.generation
    }

    /// Publishes a finished run's result, or discards it when superseded.
    #[must_use]
    pub fn publish(self, result: RankingResult) -> Option<RankingResult> {
        self.is_current().then_some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_run_publishes() {
        let session = RankSession::new();
        let token = session.begin();
        assert!(token.is_current());
        assert!(token.publish(RankingResult::default()).is_some());
    }

    #[test]
    fn newer_run_supersedes_older_token() {
        let session = RankSession::new();
        let stale = session.begin();
        let fresh = session.begin();

        assert!(!stale.is_current());
        assert!(stale.publish(RankingResult::default()).is_none());

        assert!(fresh.is_current());
        assert!(fresh.publish(RankingResult::default()).is_some());
    }

    #[test]
    fn every_older_token_is_superseded() {
        let session = RankSession::new();
        let first = session.begin();
        let second = session.begin();
        let third = session.begin();

        assert!(!first.is_current());
        assert!(!second.is_current());
        assert!(third.publish(RankingResult::default()).is_some());
    }

    #[test]
    fn sessions_are_isolated() {
        let tenant_a = RankSession::new();
        let tenant_b = RankSession::new();

        let a = tenant_a.begin();
        let _b_newer = tenant_b.begin();

        assert!(
            a.is_current(),
            "a run on another session must not supersede this one"
        );
    }
}
