//! Schedules and their recurrence intervals.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::types::{ActiveState, ExecutionOrder, ScheduleType, Weekday};

/// Period of an hourly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourlyPeriod {
    /// Every N hours (1, 2, 4, 6, 8 or 12).
    Hours(u8),
    /// Every N minutes (15 or 30).
    Minutes(u8),
}

/// Day of month of a monthly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthDay {
    /// A fixed day, 1 through 31.
    Day(u8),
    /// The last day of each month.
    LastDay,
}

/// How often a schedule recurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "frequency", rename_all = "snake_case")]
pub enum Interval {
    /// Runs several times a day between `start_time` and `end_time`.
    Hourly {
        /// First run of the day.
        start_time: NaiveTime,
        /// Last run of the day.
        end_time: Option<NaiveTime>,
        /// Time between runs.
        every: HourlyPeriod,
    },
    /// Runs once a day.
    Daily {
        /// Time of day.
        start_time: NaiveTime,
    },
    /// Runs on the listed week days.
    Weekly {
        /// Time of day.
        start_time: NaiveTime,
        /// Days to run on.
        weekdays: Vec<Weekday>,
    },
    /// Runs once a month.
    Monthly {
        /// Time of day.
        start_time: NaiveTime,
        /// Day to run on.
        day: MonthDay,
    },
}

/// One `<interval>` entry: a single attribute name and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Attribute name: `hours`, `minutes`, `weekDay` or `monthDay`.
    pub kind: &'static str,
    /// Attribute value.
    pub value: String,
}

impl Occurrence {
    fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl Interval {
    /// Wire name of the frequency.
    #[must_use]
    pub fn frequency(&self) -> &'static str {
        match self {
            Self::Hourly { .. } => "Hourly",
            Self::Daily { .. } => "Daily",
            Self::Weekly { .. } => "Weekly",
            Self::Monthly { .. } => "Monthly",
        }
    }

    /// Time of the first run.
    #[must_use]
    pub fn start_time(&self) -> NaiveTime {
        match self {
            Self::Hourly { start_time, .. }
            | Self::Daily { start_time }
            | Self::Weekly { start_time, .. }
            | Self::Monthly { start_time, .. } => *start_time,
        }
    }

    /// Time of the last run, for frequencies that have one.
    #[must_use]
    pub fn end_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Hourly { end_time, .. } => *end_time,
            _ => None,
        }
    }

    /// The recurrence entries of this interval.
    #[must_use]
    pub fn occurrences(&self) -> Vec<Occurrence> {
        match self {
            Self::Hourly { every, .. } => match every {
                HourlyPeriod::Hours(h) => vec![Occurrence::new("hours", h.to_string())],
                HourlyPeriod::Minutes(m) => vec![Occurrence::new("minutes", m.to_string())],
            },
            Self::Daily { .. } => Vec::new(),
            Self::Weekly { weekdays, .. } => weekdays
                .iter()
                .map(|d| Occurrence::new("weekDay", d.as_str()))
                .collect(),
            Self::Monthly { day, .. } => match day {
                MonthDay::Day(d) => vec![Occurrence::new("monthDay", d.to_string())],
                MonthDay::LastDay => vec![Occurrence::new("monthDay", "LastDay")],
            },
        }
    }
}

/// A server schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleItem {
    /// Display name. Required on create.
    pub name: Option<String>,
    /// Priority from 1 (highest) to 100. Required on create.
    pub priority: Option<u32>,
    /// What the schedule runs. Required on create.
    pub schedule_type: Option<ScheduleType>,
    /// Whether jobs run concurrently. Required on create.
    pub execution_order: Option<ExecutionOrder>,
    /// Whether the schedule is active.
    pub state: Option<ActiveState>,
    /// Recurrence. Required on create.
    pub interval: Option<Interval>,
}
