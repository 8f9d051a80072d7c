use crate::ErrorKind;

/// How the last poll cycle ended, before delivery of its notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    StatusChanged,
    Unchanged,
    Failed(ErrorKind),
}

/// Summary of one finished cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub outcome: CycleOutcome,
    pub delivered: bool,
    pub cursor: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PollState {
    cursor: i64,
    cycles: u64,
    pending_cursor: Option<i64>,
    outcome: Option<CycleOutcome>,
    delivered: Option<bool>,
}

impl PollState {
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    /// Timestamp the next fetch asks for updates since.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Report for the latest cycle, once its notice has been attempted.
    pub fn report(&self) -> Option<CycleReport> {
        let outcome = self.outcome.clone()?;
        let delivered = self.delivered?;
        Some(CycleReport {
            outcome,
            delivered,
            cursor: self.cursor,
        })
    }

    pub(crate) fn begin_cycle(&mut self, outcome: CycleOutcome, next_cursor: Option<i64>) {
        self.cycles += 1;
        self.outcome = Some(outcome);
        self.pending_cursor = next_cursor;
        self.delivered = None;
    }

    /// Commits the staged cursor. An undelivered status change keeps the old
    /// cursor so the next fetch returns the same record again.
    pub(crate) fn finish_cycle(&mut self, delivered: bool) {
        let pending = self.pending_cursor.take();
        let keep_cursor = !delivered && self.outcome == Some(CycleOutcome::StatusChanged);
        if let Some(cursor) = pending.filter(|_| !keep_cursor) {
            self.cursor = cursor;
        }
        self.delivered = Some(delivered);
    }
}
