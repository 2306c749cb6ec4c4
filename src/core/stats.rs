use crate::models::{Event, Helper, HelperId, Job, Nutrition, Roster};
use crate::ui::messages::{section, warning};
use crate::utils::table::Table;
use std::collections::HashSet;

/// Helpers per nutrition preference, plus who picked "other".
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionStats<'a> {
    counts: [usize; 4],
    pub helpers_other: Vec<&'a Helper>,
}

impl<'a> NutritionStats<'a> {
    pub fn collect<I>(helpers: I) -> Self
    where
        I: IntoIterator<Item = &'a Helper>,
    {
        let mut counts = [0; 4];
        let mut helpers_other = Vec::new();

        for helper in helpers {
            counts[index(helper.nutrition)] += 1;
            if helper.nutrition == Nutrition::Other {
                helpers_other.push(helper);
            }
        }

        Self {
            counts,
            helpers_other,
        }
    }

    pub fn count(&self, nutrition: Nutrition) -> usize {
        self.counts[index(nutrition)]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

fn index(nutrition: Nutrition) -> usize {
    match nutrition {
        Nutrition::NoPreference => 0,
        Nutrition::Vegetarian => 1,
        Nutrition::Vegan => 2,
        Nutrition::Other => 3,
    }
}

/// Distinct helpers of a job, coordinators included, in first-seen order.
pub fn job_helpers<'a>(roster: &Roster<'a>, job: &Job) -> Vec<&'a Helper> {
    let mut seen: HashSet<HelperId> = HashSet::new();
    let ids = job
        .coordinators
        .iter()
        .chain(job.shifts.iter().flat_map(|s| s.helpers.iter()))
        .copied()
        .filter(|id| seen.insert(*id))
        .collect::<Vec<_>>();
    roster.resolve(&ids)
}

pub struct StatsLogic;

impl StatsLogic {
    /// Prints nutrition numbers for the event and every job, then the
    /// occupancy of every shift.
    pub fn print(event: &Event) {
        if !event.ask_nutrition {
            warning(format!(
                "Nutrition is not collected for '{}', no statistics available.",
                event.name
            ));
        } else {
            section(format!("Nutrition: {}", event.name));
            println!("{}", Self::nutrition_table(event).render());

            let overall = NutritionStats::collect(&event.helpers);
            if !overall.helpers_other.is_empty() {
                section("Helpers with other nutrition");
                let mut table = Table::new(["Name", "Comment"]);
                for helper in &overall.helpers_other {
                    table.add_row(vec![helper.full_name(), helper.comment.clone()]);
                }
                println!("{}", table.render());
            }
        }

        section("Shift occupancy");
        println!("{}", Self::occupancy_table(event).render());
    }

    pub fn nutrition_table(event: &Event) -> Table {
        let roster = Roster::new(event);
        let mut table = Table::new(
            std::iter::once("Scope")
                .chain(Nutrition::ALL.iter().map(|n| n.label()))
                .chain(std::iter::once("Total")),
        );

        let mut add = |scope: &str, stats: &NutritionStats<'_>| {
            let mut row = vec![scope.to_string()];
            row.extend(Nutrition::ALL.iter().map(|n| stats.count(*n).to_string()));
            row.push(stats.total().to_string());
            table.add_row(row);
        };

        add("Event", &NutritionStats::collect(&event.helpers));
        for job in &event.jobs {
            add(&job.name, &NutritionStats::collect(job_helpers(&roster, job)));
        }

        table
    }

    pub fn occupancy_table(event: &Event) -> Table {
        let mut table = Table::new(["Job", "Shift", "Helpers", "Full"]);
        for job in &event.jobs {
            for shift in job.shifts_on(None) {
                let label = if shift.name.is_empty() {
                    shift.time()
                } else {
                    format!("{} ({})", shift.name, shift.time())
                };
                table.add_row(vec![
                    job.name.clone(),
                    label,
                    shift.occupancy(),
                    if shift.is_full() { "yes" } else { "no" }.to_string(),
                ]);
            }
        }
        table
    }
}
