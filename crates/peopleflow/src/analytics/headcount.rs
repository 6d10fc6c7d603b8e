use super::views::{LocationCountEntry, StatusCountEntry};
use crate::people::domain::{EmploymentStatus, Location, Person};
use crate::people::roster::StatusFilter;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

pub const UNKNOWN_LOCATION: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadcountSummary {
    /// People who have not left (everything except alumni).
    pub total: usize,
    /// Location display name to count, in first-seen order.
    pub by_location: IndexMap<String, usize>,
    /// Always carries every employment status, zero when absent.
    pub by_status: BTreeMap<EmploymentStatus, usize>,
}

impl Default for HeadcountSummary {
    fn default() -> Self {
        Self {
            total: 0,
            by_location: IndexMap::new(),
            by_status: EmploymentStatus::ordered()
                .into_iter()
                .map(|status| (status, 0))
                .collect(),
        }
    }
}

impl HeadcountSummary {
    pub fn status_count(&self, status: EmploymentStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn status_entries(&self, filter: &StatusFilter) -> Vec<StatusCountEntry> {
        EmploymentStatus::ordered()
            .into_iter()
            .map(|status| StatusCountEntry {
                status,
                status_label: status.label(),
                count: self.status_count(status),
                selected: filter.contains(status),
            })
            .collect()
    }

    pub fn location_entries(&self) -> Vec<LocationCountEntry> {
        self.by_location
            .iter()
            .map(|(location, count)| LocationCountEntry {
                location: location.clone(),
                count: *count,
            })
            .collect()
    }
}

pub fn summarize_headcount(people: &[Person], locations: &[Location]) -> HeadcountSummary {
    let names: HashMap<&str, &str> = locations
        .iter()
        .map(|location| (location.location_id.as_str(), location.name.as_str()))
        .collect();

    people
        .iter()
        .fold(HeadcountSummary::default(), |mut summary, person| {
            if person.employment_status != EmploymentStatus::Alumni {
                summary.total += 1;
            }

            let location = names
                .get(person.location_id.as_str())
                .copied()
                .unwrap_or(UNKNOWN_LOCATION);
            *summary
                .by_location
                .entry(location.to_string())
                .or_default() += 1;
            *summary
                .by_status
                .entry(person.employment_status)
                .or_default() += 1;

            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person(id: &str, status: &str, location: &str) -> Person {
        serde_json::from_value(json!({
            "personId": id,
            "firstName": id,
            "lastName": "Person",
            "email": format!("{id}@peopleflow.app"),
            "locationId": location,
            "employmentStatus": status,
        }))
        .expect("valid person")
    }

    fn locations() -> Vec<Location> {
        serde_json::from_value(json!([
            {"locationId": "lon", "name": "London"},
            {"locationId": "nyc", "name": "New York"}
        ]))
        .expect("valid locations")
    }

    #[test]
    fn empty_input_keeps_every_status_key() {
        let summary = summarize_headcount(&[], &[]);
        assert_eq!(summary.total, 0);
        assert!(summary.by_location.is_empty());
        assert_eq!(summary.by_status.len(), 5);
        assert!(summary.by_status.values().all(|count| *count == 0));
        assert_eq!(
            summary.by_status.keys().copied().collect::<Vec<_>>(),
            EmploymentStatus::ordered().to_vec()
        );
    }

    #[test]
    fn alumni_are_counted_by_status_but_not_in_total() {
        let people = vec![
            person("a", "Active", "lon"),
            person("b", "Active", "nyc"),
            person("c", "Alumni", "lon"),
        ];

        let summary = summarize_headcount(&people, &locations());
        assert_eq!(summary.total, 2);
        assert_eq!(summary.status_count(EmploymentStatus::Active), 2);
        assert_eq!(summary.status_count(EmploymentStatus::Alumni), 1);
        assert_eq!(summary.status_count(EmploymentStatus::Candidate), 0);
        assert_eq!(summary.by_location.get("London"), Some(&2));
        assert_eq!(summary.by_location.get("New York"), Some(&1));
    }

    #[test]
    fn unresolved_locations_fall_back_to_unknown() {
        let people = vec![person("a", "Onboarding", "mars"), person("b", "Candidate", "")];
        let summary = summarize_headcount(&people, &locations());
        assert_eq!(summary.by_location.len(), 1);
        assert_eq!(summary.by_location.get(UNKNOWN_LOCATION), Some(&2));
    }

    #[test]
    fn locations_keep_first_seen_order() {
        let people = vec![
            person("a", "Active", "nyc"),
            person("b", "Active", "lon"),
            person("c", "Active", "nyc"),
        ];
        let entries = summarize_headcount(&people, &locations()).location_entries();
        let names: Vec<&str> = entries.iter().map(|e| e.location.as_str()).collect();
        assert_eq!(names, vec!["New York", "London"]);
    }

    #[test]
    fn status_entries_mark_selected_filters() {
        let people = vec![person("a", "Onboarding", "lon")];
        let entries = summarize_headcount(&people, &locations())
            .status_entries(&StatusFilter::default());

        let onboarding = entries
            .iter()
            .find(|entry| entry.status == EmploymentStatus::Onboarding)
            .expect("onboarding entry present");
        assert_eq!(onboarding.count, 1);
        assert!(onboarding.selected);
        assert!(!entries[0].selected, "candidate is not selected by default");
    }

    #[test]
    fn summarizing_twice_is_stable() {
        let people = vec![person("a", "Active", "lon"), person("b", "Alumni", "x")];
        assert_eq!(
            summarize_headcount(&people, &locations()),
            summarize_headcount(&people, &locations())
        );
    }
}
