use std::collections::VecDeque;
use std::time::Duration;

use engine_logging::{engine_debug, engine_error, engine_info, engine_warn};
use homework_core::{update, CycleOutcome, CycleReport, Effect, Msg, PollState};

use crate::{BotConfig, ConfigError, Notifier, StatusSource};

/// Drives fetch, validate, notify and sleep for a single chat.
pub struct Poller {
    source: Box<dyn StatusSource>,
    notifier: Box<dyn Notifier>,
    state: PollState,
    retry_period: Duration,
}

impl Poller {
    /// Checks the configuration before anything is fetched.
    pub fn new(
        config: &BotConfig,
        source: Box<dyn StatusSource>,
        notifier: Box<dyn Notifier>,
        start_cursor: i64,
    ) -> Result<Self, ConfigError> {
        config.check()?;
        Ok(Self {
            source,
            notifier,
            state: PollState::new(start_cursor),
            retry_period: config.retry_period,
        })
    }

    pub fn cursor(&self) -> i64 {
        self.state.cursor()
    }

    /// Polls forever, sleeping the retry period after every cycle.
    pub async fn run(mut self) {
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Runs one fetch and delivers its notice. Never fails; every error ends up
    /// either in the chat or, for delivery failures, in the log.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let cursor = self.state.cursor();
        let msg = match self.source.fetch(cursor).await {
            Ok(payload) => Msg::ResponseReceived(payload),
            Err(err) => {
                engine_warn!("fetch from_date={} failed: {}", cursor, err);
                Msg::FetchFailed(err)
            }
        };

        let mut pending: VecDeque<Effect> = self.apply(msg).into();
        while let Some(effect) = pending.pop_front() {
            pending.extend(self.execute(effect).await);
        }

        let report = self.state.report().unwrap_or_else(|| CycleReport {
            outcome: CycleOutcome::Unchanged,
            delivered: false,
            cursor: self.state.cursor(),
        });
        let cycle = self.state.cycles();
        match &report.outcome {
            CycleOutcome::StatusChanged => {
                engine_info!("cycle {cycle}: status changed, cursor={}", report.cursor);
            }
            CycleOutcome::Unchanged => {
                engine_info!("cycle {cycle}: no homework updates, cursor={}", report.cursor);
            }
            CycleOutcome::Failed(kind) => {
                engine_warn!("cycle {cycle}: failed with {kind}");
            }
        }
        report
    }

    fn apply(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        effects
    }

    async fn execute(&mut self, effect: Effect) -> Vec<Effect> {
        match effect {
            Effect::Notify(notice) => match self.notifier.send(&notice.text).await {
                Ok(()) => {
                    engine_debug!("message {:?} sent ({:?})", notice.text, notice.kind);
                    self.apply(Msg::NoticeDelivered)
                }
                Err(err) => {
                    engine_error!("failed to send {:?} notice: {}", notice.kind, err);
                    self.apply(Msg::NoticeFailed(err))
                }
            },
        }
    }
}
