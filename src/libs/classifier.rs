//! Temporal buckets for tasks.
//!
//! Each task falls in exactly one of [`Bucket::Today`], [`Bucket::Upcoming`]
//! or [`Bucket::Overdue`] by comparing the calendar date of its due date with
//! the calendar date of `now`, both taken in `now`'s time zone. A due date at
//! midnight therefore belongs to that day only.

use super::formatter::parse_due_date;
use super::task::{Task, TaskFilter};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Today,
    Upcoming,
    Overdue,
}

impl Bucket {
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Today => "Today",
            Bucket::Upcoming => "Upcoming",
            Bucket::Overdue => "Overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub all: usize,
    pub today: usize,
    pub upcoming: usize,
    pub overdue: usize,
}

impl TaskCounts {
    pub fn get(&self, filter: TaskFilter) -> usize {
        match filter {
            TaskFilter::All => self.all,
            TaskFilter::Today => self.today,
            TaskFilter::Upcoming => self.upcoming,
            TaskFilter::Overdue => self.overdue,
        }
    }
}

/// Buckets a single due date relative to `now`.
///
/// A due date that cannot be parsed is treated as overdue so it still shows up
/// in exactly one bucket.
pub fn classify<Tz: TimeZone>(due_date: &str, now: &DateTime<Tz>) -> Bucket {
    let Some(due) = parse_due_date(due_date, &now.timezone()) else {
        return Bucket::Overdue;
    };

    match due.date_naive().cmp(&now.date_naive()) {
        Ordering::Equal => Bucket::Today,
        Ordering::Greater => Bucket::Upcoming,
        Ordering::Less => Bucket::Overdue,
    }
}

pub fn matches<Tz: TimeZone>(task: &Task, filter: TaskFilter, now: &DateTime<Tz>) -> bool {
    let bucket = match filter {
        TaskFilter::All => return true,
        TaskFilter::Today => Bucket::Today,
        TaskFilter::Upcoming => Bucket::Upcoming,
        TaskFilter::Overdue => Bucket::Overdue,
    };
    classify(&task.due_date, now) == bucket
}

pub fn compute_counts<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> TaskCounts {
    tasks.iter().fold(
        TaskCounts {
            all: tasks.len(),
            ..TaskCounts::default()
        },
        |mut counts, task| {
            match classify(&task.due_date, now) {
                Bucket::Today => counts.today += 1,
                Bucket::Upcoming => counts.upcoming += 1,
                Bucket::Overdue => counts.overdue += 1,
            }
            counts
        },
    )
}

/// Returns the tasks matching `filter`, keeping their relative order.
pub fn filter_tasks<'a, Tz: TimeZone>(tasks: &'a [Task], filter: TaskFilter, now: &DateTime<Tz>) -> Vec<&'a Task> {
    tasks.iter().filter(|task| matches(task, filter, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn midnight_boundaries_belong_to_their_own_day() {
        assert_eq!(classify("2026-10-16T00:00:00.000Z", &now()), Bucket::Today);
        assert_eq!(classify("2026-10-16T23:59:59.999Z", &now()), Bucket::Today);
        assert_eq!(classify("2026-10-17T00:00:00.000Z", &now()), Bucket::Upcoming);
        assert_eq!(classify("2026-10-15T23:59:59.999Z", &now()), Bucket::Overdue);
    }

    #[test]
    fn earlier_today_is_still_today() {
        assert_eq!(classify("2026-10-16T06:00:00.000Z", &now()), Bucket::Today);
    }

    #[test]
    fn unparseable_dates_are_overdue() {
        assert_eq!(classify("whenever", &now()), Bucket::Overdue);
    }
}
