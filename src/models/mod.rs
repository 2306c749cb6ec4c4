//! Event, job, shift and helper records as handed over by the data layer.

pub mod choices;
pub mod event;
pub mod helper;
pub mod job;

pub use choices::{FoodHandling, Nutrition, Shirt};
pub use event::{Event, EventCapabilities, Roster};
pub use helper::{Helper, HelperId};
pub use job::{Job, Shift};

#[cfg(test)]
mod tests {
    use super::*;

    fn helper(id: HelperId) -> Helper {
        Helper {
            id,
            firstname: format!("First{id}"),
            surname: format!("Last{id}"),
            email: String::new(),
            phone: String::new(),
            shirt: None,
            nutrition: Nutrition::default(),
            infection_instruction: None,
            comment: String::new(),
        }
    }

    fn shift(helpers: Vec<HelperId>) -> Shift {
        let begin = chrono::NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Shift {
            name: String::new(),
            begin,
            end: begin + chrono::Duration::hours(2),
            number: 4,
            unlimited: false,
            helpers,
        }
    }

    #[test]
    fn roster_counts_shifts_and_coordinated_jobs_across_event() {
        let event = Event {
            name: "Festival".into(),
            ask_phone: false,
            ask_shirt: false,
            ask_nutrition: false,
            helpers: (1..=4).map(helper).collect(),
            jobs: vec![
                Job {
                    name: "Bar".into(),
                    infection_instruction: false,
                    coordinators: vec![3],
                    shifts: vec![shift(vec![1, 2]), shift(vec![1])],
                },
                Job {
                    name: "Stage".into(),
                    infection_instruction: false,
                    coordinators: vec![],
                    shifts: vec![shift(vec![3, 4])],
                },
            ],
        };

        let roster = Roster::new(&event);
        assert_eq!(roster.shift_count(1), 2);
        assert!(roster.is_multi_assigned(1));
        assert!(!roster.is_multi_assigned(2));
        assert_eq!(roster.coordinated_count(3), 1);
        assert!(roster.is_multi_assigned(3));
        assert!(!roster.is_multi_assigned(4));

        let names: Vec<String> = roster.resolve(&[2, 99, 4]).iter().map(|h| h.full_name()).collect();
        assert_eq!(names, vec!["First2 Last2", "First4 Last4"]);
    }
}
