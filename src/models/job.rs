use super::helper::HelperId;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A scheduled time slot of a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    #[serde(default)]
    pub name: String,
    pub begin: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Number of helpers needed, ignored when `unlimited` is set.
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub unlimited: bool,
    #[serde(default)]
    pub helpers: Vec<HelperId>,
}

impl Shift {
    pub fn date(&self) -> NaiveDate {
        self.begin.date()
    }

    /// `2024-06-01, 10:00 - 12:00`, the end date is repeated only when the
    /// shift runs past midnight.
    pub fn time(&self) -> String {
        let begin = self.begin.format("%Y-%m-%d, %H:%M");
        if self.end.date() == self.begin.date() {
            format!("{} - {}", begin, self.end.format("%H:%M"))
        } else {
            format!("{} - {}", begin, self.end.format("%Y-%m-%d, %H:%M"))
        }
    }

    /// Same as [`Shift::time`], prefixed with the weekday.
    pub fn time_with_day(&self) -> String {
        format!("{}, {}", self.begin.format("%A"), self.time())
    }

    pub fn is_full(&self) -> bool {
        !self.unlimited && self.helpers.len() >= self.number as usize
    }

    /// `3/5` or `3/unlimited`.
    pub fn occupancy(&self) -> String {
        if self.unlimited {
            format!("{}/unlimited", self.helpers.len())
        } else {
            format!("{}/{}", self.helpers.len(), self.number)
        }
    }
}

/// A category of work at an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    /// Helpers of this job need a food handling instruction.
    #[serde(default)]
    pub infection_instruction: bool,
    #[serde(default)]
    pub coordinators: Vec<HelperId>,
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

impl Job {
    /// Shifts ordered by start time, optionally restricted to one day.
    pub fn shifts_on(&self, date: Option<NaiveDate>) -> Vec<&Shift> {
        let mut shifts: Vec<&Shift> = self
            .shifts
            .iter()
            .filter(|s| date.is_none_or(|d| s.date() == d))
            .collect();
        shifts.sort_by_key(|s| s.begin);
        shifts
    }

    pub fn has_coordinators(&self) -> bool {
        !self.coordinators.is_empty()
    }
}
