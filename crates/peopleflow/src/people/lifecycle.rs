//! Employee journey: the candidate → onboarding → mobility → offboarding view.

use super::domain::{CareerEventType, EmploymentStatus, ExitReason, ExitRecord, Person};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct OnboardingEntry {
    pub person_id: String,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub manager: String,
    pub squads: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerMilestone {
    pub event_id: String,
    pub event_type: CareerEventType,
    pub event_label: &'static str,
    pub event_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct MobilityEntry {
    pub person_id: String,
    pub name: String,
    pub event_count: usize,
    pub events: Vec<CareerMilestone>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OffboardingEntry {
    pub person_id: String,
    pub name: String,
    pub last_working_day: Option<NaiveDate>,
    pub manager: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExitEntry {
    pub exit_id: String,
    pub person_id: String,
    pub reason: ExitReason,
    pub reason_label: &'static str,
    pub notice_date: NaiveDate,
    pub last_working_day: NaiveDate,
    pub eligible_for_rehire: bool,
}

impl From<&ExitRecord> for ExitEntry {
    fn from(record: &ExitRecord) -> Self {
        Self {
            exit_id: record.exit_id.clone(),
            person_id: record.person_id.clone(),
            reason: record.reason,
            reason_label: record.reason.label(),
            notice_date: record.notice_date,
            last_working_day: record.last_working_day,
            eligible_for_rehire: record.eligible_for_rehire,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateEntry {
    pub person_id: String,
    pub name: String,
    pub skills: String,
    pub applied_role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeJourney {
    pub onboarding: Vec<OnboardingEntry>,
    pub mobility: Vec<MobilityEntry>,
    pub offboarding: Vec<OffboardingEntry>,
    pub exits: Vec<ExitEntry>,
    pub talent_pipeline: Vec<CandidateEntry>,
}

impl EmployeeJourney {
    pub fn build(people: &[Person], exit_records: &[ExitRecord]) -> Self {
        let onboarding = with_status(people, EmploymentStatus::Onboarding)
            .map(|person| OnboardingEntry {
                person_id: person.person_id.clone(),
                name: person.full_name(),
                start_date: person.start_date,
                manager: manager_or_unassigned(person),
                squads: if person.assigned_squad_ids.is_empty() {
                    "None".to_string()
                } else {
                    person.assigned_squad_ids.join(", ")
                },
            })
            .collect();

        let mobility = people
            .iter()
            .filter(|person| !person.career_history.is_empty())
            .map(|person| MobilityEntry {
                person_id: person.person_id.clone(),
                name: person.full_name(),
                event_count: person.career_history.len(),
                events: person
                    .career_history
                    .iter()
                    .map(|event| CareerMilestone {
                        event_id: event.event_id.clone(),
                        event_type: event.event_type,
                        event_label: event.event_type.label(),
                        event_date: event.event_date,
                    })
                    .collect(),
            })
            .collect();

        let offboarding = with_status(people, EmploymentStatus::Offboarding)
            .map(|person| OffboardingEntry {
                person_id: person.person_id.clone(),
                name: person.full_name(),
                last_working_day: person.end_date,
                manager: manager_or_unassigned(person),
            })
            .collect();

        let talent_pipeline = with_status(people, EmploymentStatus::Candidate)
            .map(|person| CandidateEntry {
                person_id: person.person_id.clone(),
                name: person.full_name(),
                skills: if person.skills.is_empty() {
                    "TBC".to_string()
                } else {
                    person.skills.join(", ")
                },
                applied_role: person.job_title.clone().unwrap_or_else(|| "–".to_string()),
            })
            .collect();

        Self {
            onboarding,
            mobility,
            offboarding,
            exits: exit_records.iter().map(ExitEntry::from).collect(),
            talent_pipeline,
        }
    }

    pub fn onboarding_is_empty(&self) -> bool {
        self.onboarding.is_empty()
    }

    pub fn mobility_is_empty(&self) -> bool {
        self.mobility.is_empty()
    }

    /// True when neither offboarding people nor exit records exist.
    pub fn offboarding_is_empty(&self) -> bool {
        self.offboarding.is_empty() && self.exits.is_empty()
    }

    pub fn talent_pipeline_is_empty(&self) -> bool {
        self.talent_pipeline.is_empty()
    }
}

fn with_status(
    people: &[Person],
    status: EmploymentStatus,
) -> impl Iterator<Item = &Person> + '_ {
    people
        .iter()
        .filter(move |person| person.employment_status == status)
}

fn manager_or_unassigned(person: &Person) -> String {
    person
        .manager_id
        .clone()
        .unwrap_or_else(|| "Unassigned".to_string())
}
