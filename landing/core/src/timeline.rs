//! Deterministic timer queue used in place of browser timeouts and intervals.
//!
//! Every component in this crate schedules its "waiting" as a task on a
//! [`Timeline`]. The host (a browser driver or a test) asks for the next
//! deadline, lets that much time pass, and then drains the due tasks in order.

use std::time::Duration;

/// Handle to a scheduled task. Cancelling it prevents any further firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<T> {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
    task: T,
}

/// A virtual clock with one-shot and repeating tasks.
#[derive(Debug)]
pub struct Timeline<T> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T: Clone> Default for Timeline<T> {
    fn default() -> Self {
        Self::starting_at(Duration::ZERO)
    }
}

impl<T: Clone> Timeline<T> {
    /// Creates an empty timeline whose clock reads `now`.
    pub fn starting_at(now: Duration) -> Self {
        Timeline {
            now,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Current reading of the clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `task` to run once, `delay` from now.
    ///
    /// Deadlines past the end of the clock saturate at [`Duration::MAX`].
    pub fn after(&mut self, delay: Duration, task: T) -> TimerId {
        self.push(delay, None, task)
    }

    /// Schedules `task` to run every `period`, first firing one period from now.
    ///
    /// A zero period is bumped to one millisecond so the queue always makes progress.
    pub fn every(&mut self, period: Duration, task: T) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.push(period, Some(period), task)
    }

    /// Cancels a scheduled task. Returns `false` if it had already fired or been cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Due time of the earliest pending task.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    /// Removes and returns the earliest task due at or before `until`.
    ///
    /// Ties fire in scheduling order. The clock moves to the task's due time, so
    /// tasks scheduled by its handler are relative to the moment it fired.
    /// Repeating tasks stay queued, re-armed one period later.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= until)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(position, _)| position)?;

        let entry = &mut self.entries[position];
        self.now = self.now.max(entry.due);
        let id = entry.id;
        let period = entry.period;

        match period {
            Some(period) => match entry.due.checked_add(period) {
                Some(due) => {
                    entry.due = due;
                    Some((id, entry.task.clone()))
                }
                // The next firing is past the end of the clock.
                None => {
                    let entry = self.entries.swap_remove(position);
                    Some((id, entry.task))
                }
            },
            None => {
                let entry = self.entries.swap_remove(position);
                Some((id, entry.task))
            }
        }
    }

    /// Moves the clock forward to `to`. The clock never runs backwards.
    pub fn advance_clock(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: self.now.saturating_add(delay),
            period,
            task,
        });
        id
    }
}
