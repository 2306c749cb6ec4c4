use super::helper::{Helper, HelperId};
use super::job::Job;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An event with its helpers and jobs, fully loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(default)]
    pub ask_phone: bool,
    #[serde(default)]
    pub ask_shirt: bool,
    #[serde(default)]
    pub ask_nutrition: bool,
    #[serde(default)]
    pub helpers: Vec<Helper>,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

impl Event {
    pub fn job(&self, name: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.name == name)
    }

    pub fn capabilities(&self) -> EventCapabilities {
        EventCapabilities {
            phone: self.ask_phone,
            shirt: self.ask_shirt,
            nutrition: self.ask_nutrition,
        }
    }
}

/// Optional registration fields collected by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventCapabilities {
    pub phone: bool,
    pub shirt: bool,
    pub nutrition: bool,
}

/// Read-only index over the helpers of an event: lookup by id plus the
/// number of shifts and coordinated jobs of every helper.
#[derive(Debug)]
pub struct Roster<'a> {
    helpers: HashMap<HelperId, &'a Helper>,
    shifts: HashMap<HelperId, usize>,
    coordinated: HashMap<HelperId, usize>,
}

impl<'a> Roster<'a> {
    pub fn new(event: &'a Event) -> Self {
        let helpers = event.helpers.iter().map(|h| (h.id, h)).collect();

        let mut shifts: HashMap<HelperId, usize> = HashMap::new();
        let mut coordinated: HashMap<HelperId, usize> = HashMap::new();

        for job in &event.jobs {
            for id in &job.coordinators {
                *coordinated.entry(*id).or_default() += 1;
            }
            for shift in &job.shifts {
                for id in &shift.helpers {
                    *shifts.entry(*id).or_default() += 1;
                }
            }
        }

        Self {
            helpers,
            shifts,
            coordinated,
        }
    }

    pub fn get(&self, id: HelperId) -> Option<&'a Helper> {
        self.helpers.get(&id).copied()
    }

    /// Resolve ids in order. Unknown ids are skipped, datasets are validated on load.
    pub fn resolve(&self, ids: &[HelperId]) -> Vec<&'a Helper> {
        ids.iter().filter_map(|id| self.get(*id)).collect()
    }

    pub fn shift_count(&self, id: HelperId) -> usize {
        self.shifts.get(&id).copied().unwrap_or(0)
    }

    pub fn coordinated_count(&self, id: HelperId) -> usize {
        self.coordinated.get(&id).copied().unwrap_or(0)
    }

    /// More than one assignment in total, shifts and coordinated jobs combined.
    pub fn is_multi_assigned(&self, id: HelperId) -> bool {
        self.shift_count(id) + self.coordinated_count(id) > 1
    }
}
