//! Deferred resolutions on virtual time.
//!
//! The answer reveal and the slow lifelines resolve after a pause. Instead of
//! bare timers, each pause is a [`ScheduledTask`] stamped with the
//! [`SessionToken`] and question index it was scheduled against. The session
//! drives time forward with [`Scheduler::advance`] and discards any due task
//! whose stamp no longer matches the live state.
//!
//! Time is a `Duration` since the scheduler was created, so tests and hosts
//! control it completely.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::lifelines::Lifeline;

/// Identifies one play-through. Changes on every reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(pub u64);

impl SessionToken {
    /// Token for the next play-through.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Unique identifier for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// What to do when a task comes due.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deferred {
    /// Evaluate the locked-in answer.
    Reveal,
    /// Report a lifeline's result.
    Lifeline(Lifeline),
}

/// A pending resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: TaskId,
    pub due: Duration,
    pub token: SessionToken,
    pub question_index: usize,
    pub action: Deferred,
}

/// Queue of pending resolutions ordered by due time, then scheduling order.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks.iter().map(|t| t.due).min()
    }

    /// Schedule `action` to come due after `delay`. Due times saturate at `Duration::MAX`.
    pub fn schedule(&mut self, delay: Duration, token: SessionToken, question_index: usize, action: Deferred) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            due: self.now.saturating_add(delay),
            token,
            question_index,
            action,
        });
        id
    }

    /// Drop every task scheduled against `token`. Returns how many were dropped.
    pub fn cancel(&mut self, token: SessionToken) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.token != token);
        before - self.tasks.len()
    }

    /// Move time forward by `elapsed` and return the tasks now due, in order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ScheduledTask> {
        self.now = self.now.saturating_add(elapsed);
        self.take_due()
    }

    /// Jump to the earliest pending due time and return what comes due.
    pub fn advance_to_next(&mut self) -> Vec<ScheduledTask> {
        if let Some(due) = self.next_due() {
            self.now = self.now.max(due);
        }
        self.take_due()
    }

    fn take_due(&mut self) -> Vec<ScheduledTask> {
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) = self.tasks.drain(..).partition(|t| t.due <= now);
        self.tasks = pending;
        due.sort_by_key(|t| (t.due, t.id));
        due
    }
}
