use super::domain::{Alumni, EmploymentStatus, Location, Person};
use crate::dataset::Dataset;
use chrono::NaiveTime;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

const ALUMNI_EMAIL_DOMAIN: &str = "alumni.peopleflow.app";
const ALUMNI_LOCATION_ID: &str = "alumni";

/// Employment statuses currently selected for the roster, in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilter {
    selected: Vec<EmploymentStatus>,
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self {
            selected: vec![EmploymentStatus::Active, EmploymentStatus::Onboarding],
        }
    }
}

impl StatusFilter {
    pub fn new<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = EmploymentStatus>,
    {
        let mut selected = Vec::new();
        for status in statuses {
            if !selected.contains(&status) {
                selected.push(status);
            }
        }
        Self { selected }
    }

    pub fn toggle(&mut self, status: EmploymentStatus) {
        if let Some(position) = self.selected.iter().position(|s| *s == status) {
            self.selected.remove(position);
        } else {
            self.selected.push(status);
        }
    }

    pub fn contains(&self, status: EmploymentStatus) -> bool {
        self.selected.contains(&status)
    }

    pub fn statuses(&self) -> &[EmploymentStatus] {
        &self.selected
    }
}

/// People visible under `filter`.
///
/// Alumni records are folded in as placeholder people only when the alumni
/// status is selected; the people list itself contributes current staff only.
pub fn select_roster(dataset: &Dataset, filter: &StatusFilter) -> Vec<Person> {
    let mut roster = dataset.current_people();
    if filter.contains(EmploymentStatus::Alumni) {
        roster.extend(dataset.alumni.iter().map(alumni_as_person));
    }

    roster.retain(|person| filter.contains(person.employment_status));
    roster
}

fn alumni_as_person(record: &Alumni) -> Person {
    Person {
        person_id: record.person_id.clone(),
        first_name: "Alumni".to_string(),
        last_name: record.alumni_id.clone(),
        preferred_name: None,
        email: record
            .alumni_email
            .clone()
            .unwrap_or_else(|| format!("{}@{ALUMNI_EMAIL_DOMAIN}", record.person_id)),
        phone: None,
        location_id: ALUMNI_LOCATION_ID.to_string(),
        employment_status: EmploymentStatus::Alumni,
        start_date: None,
        end_date: None,
        job_title: None,
        grade: None,
        cost_centre: None,
        fte: 0.0,
        manager_id: None,
        dotted_line_manager_ids: Vec::new(),
        skills: Vec::new(),
        career_history: Vec::new(),
        assigned_squad_ids: Vec::new(),
        profile_photo_url: None,
        created_at: Some(record.joined_date.and_time(NaiveTime::MIN).and_utc()),
        updated_at: Some(record.left_date.and_time(NaiveTime::MIN).and_utc()),
    }
}

/// Case-insensitive directory search over name, title, email and skills.
pub fn search_people<'a>(people: &'a [Person], query: &str) -> Vec<&'a Person> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return people.iter().collect();
    }

    people
        .iter()
        .filter(|person| matches_query(person, &needle))
        .collect()
}

fn matches_query(person: &Person, needle: &str) -> bool {
    let contains = |value: &str| value.to_lowercase().contains(needle);

    contains(&person.first_name)
        || contains(&person.last_name)
        || person.job_title.as_deref().is_some_and(contains)
        || contains(&person.email)
        || person.skills.iter().any(|skill| contains(skill))
}

/// Number of people listing each manager id as their primary manager.
pub fn direct_report_counts<'a, I>(people: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a Person>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for manager in people.into_iter().filter_map(|p| p.manager_id.as_ref()) {
        *counts.entry(manager.clone()).or_default() += 1;
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterRow {
    pub person_id: String,
    pub name: String,
    pub email: String,
    pub status: EmploymentStatus,
    pub status_label: &'static str,
    pub job_title: String,
    pub location: String,
    pub manager: String,
    pub skills: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_reports: Option<usize>,
}

/// Directory table rows; report counts are taken over `people` only.
pub fn roster_rows(
    people: &[&Person],
    locations: &[Location],
    include_report_counts: bool,
) -> Vec<RosterRow> {
    let location_names: HashMap<&str, &str> = locations
        .iter()
        .map(|location| (location.location_id.as_str(), location.name.as_str()))
        .collect();
    let counts = include_report_counts.then(|| direct_report_counts(people.iter().copied()));

    people
        .iter()
        .map(|person| RosterRow {
            person_id: person.person_id.clone(),
            name: person.full_name(),
            email: person.email.clone(),
            status: person.employment_status,
            status_label: person.employment_status.label(),
            job_title: person.job_title.clone().unwrap_or_else(|| "–".to_string()),
            location: location_names
                .get(person.location_id.as_str())
                .map(|name| name.to_string())
                .unwrap_or_else(|| person.location_id.clone()),
            manager: person
                .manager_id
                .clone()
                .unwrap_or_else(|| "Executive".to_string()),
            skills: person.skills.join(", "),
            direct_reports: counts
                .as_ref()
                .map(|counts| counts.get(&person.person_id).copied().unwrap_or(0)),
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write roster export: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode roster CSV: {0}")]
    Csv(#[from] csv::Error),
}

const CSV_HEADERS: [&str; 7] = [
    "Name", "Email", "Status", "Role", "Location", "Manager", "Skills",
];
const DIRECT_REPORTS_HEADER: &str = "Direct reports";

/// The "Direct reports" column is only written when the rows carry counts.
pub fn write_roster_csv<W: Write>(rows: &[RosterRow], writer: W) -> Result<(), ExportError> {
    let with_reports = rows.iter().any(|row| row.direct_reports.is_some());
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = CSV_HEADERS.to_vec();
    if with_reports {
        header.push(DIRECT_REPORTS_HEADER);
    }
    csv_writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![
            row.name.clone(),
            row.email.clone(),
            row.status_label.to_string(),
            row.job_title.clone(),
            row.location.clone(),
            row.manager.clone(),
            row.skills.clone(),
        ];
        if with_reports {
            record.push(
                row.direct_reports
                    .map(|count| count.to_string())
                    .unwrap_or_default(),
            );
        }
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
