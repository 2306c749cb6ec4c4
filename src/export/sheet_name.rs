// src/export/sheet_name.rs

use std::collections::HashSet;

/// Job names are cut to this many characters; the numeric suffix for
/// duplicates still fits in Excel's 31 character limit.
pub const SHEET_NAME_LEN: usize = 20;

const ILLEGAL: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Used when nothing printable is left of a job name.
const FALLBACK: &str = "Job";

/// Strips characters Excel refuses in sheet names and truncates to
/// [`SHEET_NAME_LEN`]. Apostrophes at either end are dropped as well.
pub fn clean_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !ILLEGAL.contains(c) && !c.is_control())
        .take(SHEET_NAME_LEN)
        .collect();

    let trimmed = cleaned.trim_matches('\'');
    if trimmed.trim().is_empty() {
        FALLBACK.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Builds one unique sheet name per job name, in order.
///
/// A cleaned name that is already taken gets `2`, `3`, ... appended.
/// Excel compares sheet names case-insensitively, so do we.
pub fn unique_sheet_names<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut used: HashSet<String> = HashSet::new();
    let mut result = Vec::new();

    for name in names {
        let base = clean_name(name);
        let mut candidate = base.clone();
        let mut counter = 2;

        while used.contains(&candidate.to_lowercase()) {
            candidate = format!("{base}{counter}");
            counter += 1;
        }

        used.insert(candidate.to_lowercase());
        result.push(candidate);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_illegal_characters_and_truncates() {
        assert_eq!(clean_name("Bar [main]: a/b\\c*?"), "Bar main abc");
        assert_eq!(clean_name("Kitchen Crew Morning Shift"), "Kitchen Crew Morning");
        assert_eq!(clean_name("'quoted'"), "quoted");
        assert_eq!(clean_name("???"), "Job");
    }

    #[test]
    fn identical_long_names_get_ascending_suffixes() {
        let jobs = vec!["Kitchen Crew Morning Shift"; 22];
        let names = unique_sheet_names(jobs.iter().copied());

        assert_eq!(names[0], "Kitchen Crew Morning");
        assert_eq!(names[1], "Kitchen Crew Morning2");
        assert_eq!(names[2], "Kitchen Crew Morning3");
        assert_eq!(names[21], "Kitchen Crew Morning22");

        let distinct: HashSet<_> = names.iter().collect();
        assert_eq!(distinct.len(), names.len());
        assert!(names.iter().all(|n| n.chars().count() <= 31));
    }

    #[test]
    fn near_duplicates_collide_after_cleaning() {
        let names = unique_sheet_names(["Bar: Early", "Bar Early", "bar early", "Bar Early2"]);
        assert_eq!(names, vec!["Bar Early", "Bar Early2", "bar early3", "Bar Early22"]);
    }
}
