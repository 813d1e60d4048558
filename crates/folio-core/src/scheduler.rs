//! Deferred work.
//!
//! Behaviors never sleep; they hand a [`Job`] to a [`Scheduler`] and return.
//! The host later feeds the job back into
//! [`Portfolio::run_job`](crate::runtime::Portfolio::run_job).
//!
//! - [`ManualClock`] is a deterministic fake clock for tests and headless runs.
//! - [`TokioScheduler`] sleeps on tokio timers and reports wakeups over a
//!   channel; frame jobs are left for the host to run on its next paint.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::time::Duration;

use tokio::sync::mpsc;

/// Deferred work items. Data instead of closures, so nothing scheduled
/// holds a borrow of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Job {
    HideLoader,
    RemoveLoader,
    /// Recompute navbar state and parallax for the current scroll offset
    ScrollFrame,
    FadeInBody,
    FinishSubmission,
    EndEasterEgg,
}

/// Capability to run a job later.
///
/// Scheduled jobs always run; there is no cancellation.
pub trait Scheduler {
    fn schedule_after(&mut self, delay: Duration, job: Job);

    fn schedule_next_frame(&mut self, job: Job);
}

/// A timer waiting on the [`ManualClock`]
#[derive(Debug)]
struct Timer {
    due: Duration,
    seq: u64,
    job: Job,
}

impl PartialEq for Timer {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for Timer {}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timer {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first, then FIFO)
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Fake clock: time only moves when the owner says so.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
    next_seq: u64,
    timers: BinaryHeap<Timer>,
    frames: VecDeque<Job>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// When the earliest timer fires, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.peek().map(|t| t.due)
    }

    /// Pops the earliest timer due at or before `until`, moving the clock
    /// to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<Job> {
        if self.timers.peek()?.due > until {
            return None;
        }
        let timer = self.timers.pop()?;
        self.now = self.now.max(timer.due);
        Some(timer.job)
    }

    /// Moves the clock forward to `until` once no more timers are due.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Takes every job waiting for the next frame, in request order.
    pub fn take_frame(&mut self) -> Vec<Job> {
        self.frames.drain(..).collect()
    }
}

impl Scheduler for ManualClock {
    fn schedule_after(&mut self, delay: Duration, job: Job) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            due: self.now.saturating_add(delay),
            seq,
            job,
        });
    }

    fn schedule_next_frame(&mut self, job: Job) {
        self.frames.push_back(job);
    }
}

/// A job becoming runnable
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wakeup {
    /// Timer elapsed; run now
    Timer(Job),
    /// Run on the host's next paint frame
    Frame(Job),
}

/// Scheduler backed by the tokio timer wheel.
///
/// Must be used from within a tokio runtime.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<Wakeup>,
}

impl TokioScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Wakeup>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_after(&mut self, delay: Duration, job: Job) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Wakeup::Timer(job)).is_err() {
                tracing::debug!(?job, "Receiver gone, dropping timer wakeup");
            }
        });
    }

    fn schedule_next_frame(&mut self, job: Job) {
        if self.tx.send(Wakeup::Frame(job)).is_err() {
            tracing::debug!(?job, "Receiver gone, dropping frame request");
        }
    }
}
