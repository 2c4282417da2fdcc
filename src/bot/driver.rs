use std::sync::Arc;
use std::time::Duration;

use crate::api::ListingSource;
use crate::core::CycleError;
use crate::notify::{render, Notifier};
use crate::scanner::{decode_listings, select_new, validate, PollState};

pub const STARTUP_MESSAGE: &str = "Bot started.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Starting,
    Polling,
    Idle,
    Notifying,
    Waiting,
}

/// Outcome of one successful fetch→notify pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub fetched: usize,
    pub new: usize,
    pub delivered: usize,
    pub failed: usize,
}

/// Owns the poll state and drives fetch → validate → filter → notify,
/// followed by one fixed delay per cycle.
pub struct PollDriver {
    source: Arc<dyn ListingSource>,
    notifier: Notifier,
    state: PollState,
    interval: Duration,
    phase: Phase,
}

impl PollDriver {
    pub fn new(source: Arc<dyn ListingSource>, notifier: Notifier, interval: Duration) -> Self {
        Self {
            source,
            notifier,
            state: PollState::new(),
            interval,
            phase: Phase::Starting,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Sends the startup notice and enters `Polling`.
    pub async fn start(&mut self) {
        tracing::info!("🚀 Job search bot started (poll interval: {:?})", self.interval);

        if let Err(e) = self.notifier.deliver(STARTUP_MESSAGE).await {
            tracing::warn!("❌ Failed to deliver startup message: {}", e);
        }

        self.phase = Phase::Polling;
    }

    /// Runs until the process is killed.
    pub async fn run(mut self) {
        self.start().await;

        loop {
            let _ = self.tick().await;
        }
    }

    /// One full cycle including the delay.
    ///
    /// The cycle result is captured rather than propagated, so every path
    /// reaches the sleep.
    pub async fn tick(&mut self) -> Result<CycleReport, CycleError> {
        let outcome = self.run_cycle().await;

        match &outcome {
            Ok(report) => tracing::info!(
                "📊 Cycle done: {} fetched, {} new, {} delivered, {} failed",
                report.fetched,
                report.new,
                report.delivered,
                report.failed
            ),
            Err(e) => tracing::error!("❌ Cycle failed: {}", e),
        }

        self.phase = Phase::Waiting;
        tokio::time::sleep(self.interval).await;
        self.phase = Phase::Polling;

        outcome
    }

    /// Fetch, validate, filter and notify without waiting.
    ///
    /// Fetch and validation errors abort the cycle. Render and delivery
    /// errors only skip the affected listing.
    pub async fn run_cycle(&mut self) -> Result<CycleReport, CycleError> {
        self.phase = Phase::Polling;

        let document = self.source.fetch().await?;
        let entries = validate(&document)?;
        let listings = decode_listings(entries);

        let selection = select_new(&listings, self.state.last_seen_id());
        let mut report = CycleReport {
            fetched: listings.len(),
            new: selection.new_listings.len(),
            ..CycleReport::default()
        };

        if selection.new_listings.is_empty() {
            tracing::debug!("No new listings");
            self.phase = Phase::Idle;
            return Ok(report);
        }

        tracing::info!("🆕 {} new listing(s)", report.new);
        self.phase = Phase::Notifying;

        for listing in selection.new_listings {
            let message = match render(listing) {
                Ok(message) => message,
                Err(e) => {
                    tracing::warn!("⚠️  Cannot render listing: {}", e);
                    report.failed += 1;
                    continue;
                }
            };

            match self.notifier.deliver(&message).await {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    tracing::warn!("❌ Failed to deliver listing {}: {}", listing.id, e);
                    report.failed += 1;
                }
            }
        }

        self.state.commit(selection.last_seen_id);
        Ok(report)
    }
}
