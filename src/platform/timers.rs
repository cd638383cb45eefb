//! Virtual-clock implementation of [`Timers`].
//!
//! Nothing fires on its own; `advance` moves the clock forward and hands back
//! every task that came due, earliest first. Tasks due at the same instant come
//! out in registration order.

use super::{CancelToken, Timers};

#[derive(Debug)]
struct Pending<T> {
    due_ms: u64,
    token: CancelToken,
    task: T,
}

#[derive(Debug)]
pub struct ManualTimers<T> {
    now_ms: u64,
    next_token: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for ManualTimers<T> {
    fn default() -> Self {
        Self { now_ms: 0, next_token: 1, pending: Vec::new() }
    }
}

impl<T> ManualTimers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due_ms).min()
    }

    /// Move the clock forward by `ms` and return the tasks that fired.
    pub fn advance(&mut self, ms: u64) -> Vec<T> {
        self.now_ms += ms;
        let now = self.now_ms;
        // token order == registration order
        self.pending.sort_by_key(|p| (p.due_ms, p.token));
        let split = self.pending.partition_point(|p| p.due_ms <= now);
        self.pending.drain(..split).map(|p| p.task).collect()
    }

}

impl<T> Timers<T> for ManualTimers<T> {
    fn after(&mut self, delay_ms: u32, task: T) -> CancelToken {
        let token = CancelToken(self.next_token);
        self.next_token += 1;
        self.pending.push(Pending { due_ms: self.now_ms + delay_ms as u64, token, task });
        token
    }

    fn cancel(&mut self, token: CancelToken) {
        self.pending.retain(|p| p.token != token);
    }

    fn cancel_all(&mut self) {
        self.pending.clear();
    }

    fn pending(&self) -> usize {
        self.pending.len()
    }
}
