// src/export/columns.rs

use crate::errors::{AppError, AppResult};
use crate::models::{Event, EventCapabilities, Job};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A column a helper list can show, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Name,
    Email,
    Phone,
    Shirt,
    Nutrition,
    FoodHandling,
    Comment,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Name,
        Column::Email,
        Column::Phone,
        Column::Shirt,
        Column::Nutrition,
        Column::FoodHandling,
        Column::Comment,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Email => "email",
            Column::Phone => "phone",
            Column::Shirt => "shirt",
            Column::Nutrition => "nutrition",
            Column::FoodHandling => "foodhandling",
            Column::Comment => "comment",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Column::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Columns requested by the caller, before any gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSelection {
    pub name: bool,
    pub email: bool,
    pub phone: bool,
    pub shirt: bool,
    pub nutrition: bool,
    pub foodhandling: bool,
    pub comment: bool,
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl ColumnSelection {
    pub fn all() -> Self {
        Self {
            name: true,
            email: true,
            phone: true,
            shirt: true,
            nutrition: true,
            foodhandling: true,
            comment: true,
        }
    }

    pub fn none() -> Self {
        Self {
            name: false,
            email: false,
            phone: false,
            shirt: false,
            nutrition: false,
            foodhandling: false,
            comment: false,
        }
    }

    pub fn is_requested(&self, column: Column) -> bool {
        match column {
            Column::Name => self.name,
            Column::Email => self.email,
            Column::Phone => self.phone,
            Column::Shirt => self.shirt,
            Column::Nutrition => self.nutrition,
            Column::FoodHandling => self.foodhandling,
            Column::Comment => self.comment,
        }
    }

    pub fn with(mut self, column: Column, requested: bool) -> Self {
        let flag = match column {
            Column::Name => &mut self.name,
            Column::Email => &mut self.email,
            Column::Phone => &mut self.phone,
            Column::Shirt => &mut self.shirt,
            Column::Nutrition => &mut self.nutrition,
            Column::FoodHandling => &mut self.foodhandling,
            Column::Comment => &mut self.comment,
        };
        *flag = requested;
        self
    }
}

/// Parses `name,email,comment`, or the shorthands `all` and `none`.
impl FromStr for ColumnSelection {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::all());
        }
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Self::none());
        }

        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .try_fold(Self::none(), |selection, part| {
                Column::from_key(part)
                    .map(|c| selection.with(c, true))
                    .ok_or_else(|| AppError::InvalidColumn(part.to_string()))
            })
    }
}

/// The columns actually shown for one job: requested AND collected AND permitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EffectiveColumns(Vec<Column>);

impl EffectiveColumns {
    /// Gates every requested column against what the event collected, the
    /// job's food handling requirement and the caller's access to phone numbers.
    pub fn resolve(
        selection: &ColumnSelection,
        capabilities: EventCapabilities,
        job_food_handling: bool,
        include_sensitive: bool,
    ) -> Self {
        let permitted = |column: Column| match column {
            Column::Phone => capabilities.phone && include_sensitive,
            Column::Shirt => capabilities.shirt,
            Column::Nutrition => capabilities.nutrition,
            Column::FoodHandling => job_food_handling,
            Column::Name | Column::Email | Column::Comment => true,
        };

        Self(
            Column::ALL
                .into_iter()
                .filter(|c| selection.is_requested(*c) && permitted(*c))
                .collect(),
        )
    }

    pub fn for_job(
        selection: &ColumnSelection,
        event: &Event,
        job: &Job,
        include_sensitive: bool,
    ) -> Self {
        Self::resolve(
            selection,
            event.capabilities(),
            job.infection_instruction,
            include_sensitive,
        )
    }

    pub fn contains(&self, column: Column) -> bool {
        self.0.contains(&column)
    }

    pub fn iter(&self) -> impl Iterator<Item = Column> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVERYTHING: EventCapabilities = EventCapabilities {
        phone: true,
        shirt: true,
        nutrition: true,
    };

    #[test]
    fn all_requested_and_collected_keeps_every_column() {
        let cols = EffectiveColumns::resolve(&ColumnSelection::all(), EVERYTHING, true, true);
        assert_eq!(cols.iter().collect::<Vec<_>>(), Column::ALL.to_vec());
    }

    #[test]
    fn uncollected_data_never_shows_up() {
        let caps = EventCapabilities {
            phone: false,
            shirt: false,
            nutrition: false,
        };
        let cols = EffectiveColumns::resolve(&ColumnSelection::all(), caps, false, true);
        assert_eq!(
            cols.iter().collect::<Vec<_>>(),
            vec![Column::Name, Column::Email, Column::Comment]
        );
    }

    #[test]
    fn phone_needs_sensitive_access() {
        let cols = EffectiveColumns::resolve(&ColumnSelection::all(), EVERYTHING, true, false);
        assert!(!cols.contains(Column::Phone));
        assert!(cols.contains(Column::Shirt));
    }

    #[test]
    fn food_handling_follows_the_job() {
        let selection = ColumnSelection::none().with(Column::FoodHandling, true);
        assert!(EffectiveColumns::resolve(&selection, EVERYTHING, true, true).contains(Column::FoodHandling));
        assert!(EffectiveColumns::resolve(&selection, EVERYTHING, false, true).is_empty());
    }

    #[test]
    fn resolved_set_is_exactly_requested_and_permitted() {
        // every combination of requested flags against a partial event
        let caps = EventCapabilities {
            phone: true,
            shirt: false,
            nutrition: true,
        };
        for mask in 0u32..(1 << Column::ALL.len()) {
            let selection = Column::ALL
                .into_iter()
                .enumerate()
                .fold(ColumnSelection::none(), |s, (i, c)| s.with(c, mask & (1 << i) != 0));

            let cols = EffectiveColumns::resolve(&selection, caps, false, false);
            for c in Column::ALL {
                let expected = selection.is_requested(c)
                    && !matches!(c, Column::Phone | Column::Shirt | Column::FoodHandling);
                assert_eq!(cols.contains(c), expected, "column {c} with mask {mask:b}");
            }
        }
    }

    #[test]
    fn parses_column_lists() {
        let s: ColumnSelection = "name, email,foodhandling".parse().unwrap();
        assert!(s.name && s.email && s.foodhandling);
        assert!(!s.phone && !s.comment);

        assert_eq!("all".parse::<ColumnSelection>().unwrap(), ColumnSelection::all());
        assert_eq!("none".parse::<ColumnSelection>().unwrap(), ColumnSelection::none());

        let err = "name,age".parse::<ColumnSelection>().unwrap_err();
        assert!(matches!(err, AppError::InvalidColumn(c) if c == "age"));
    }
}
