use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Lifecycle position of a person, from first contact to departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Candidate,
    Active,
    Onboarding,
    Offboarding,
    Alumni,
}

impl EmploymentStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Candidate,
            Self::Active,
            Self::Onboarding,
            Self::Offboarding,
            Self::Alumni,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Candidate => "Candidate",
            Self::Active => "Active",
            Self::Onboarding => "Onboarding",
            Self::Offboarding => "Offboarding",
            Self::Alumni => "Alumni",
        }
    }

    /// Statuses that make up the current workforce view (everyone but alumni).
    pub const fn is_current(self) -> bool {
        !matches!(self, Self::Alumni)
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "unknown employment status '{0}' (expected one of candidate, active, onboarding, offboarding, alumni)"
)]
pub struct UnknownStatus(pub String);

impl FromStr for EmploymentStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "candidate" => Ok(Self::Candidate),
            "active" => Ok(Self::Active),
            "onboarding" => Ok(Self::Onboarding),
            "offboarding" => Ok(Self::Offboarding),
            "alumni" => Ok(Self::Alumni),
            _ => Err(UnknownStatus(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub location_id: String,
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerEventType {
    Promotion,
    Transfer,
    RoleChange,
    Review,
    Exit,
}

impl CareerEventType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Promotion => "Promotion",
            Self::Transfer => "Transfer",
            Self::RoleChange => "Role Change",
            Self::Review => "Review",
            Self::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerEvent {
    pub event_id: String,
    pub person_id: String,
    pub event_type: CareerEventType,
    pub event_date: NaiveDate,
    #[serde(default)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub person_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub location_id: String,
    pub employment_status: EmploymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_centre: Option<String>,
    #[serde(default)]
    pub fte: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    #[serde(default)]
    pub dotted_line_manager_ids: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub career_history: Vec<CareerEvent>,
    #[serde(default)]
    pub assigned_squad_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn reports_dotted_to(&self, manager_id: &str) -> bool {
        self.dotted_line_manager_ids
            .iter()
            .any(|id| id == manager_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub role_id: String,
    pub title: String,
    pub department: String,
    #[serde(default)]
    pub grade_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_centre: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub is_vacant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiring_need_id: Option<String>,
}

/// Canonical approval stages shown as kanban columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HiringStatus {
    Requested,
    Approved,
    Sourcing,
    Filled,
    Withdrawn,
}

impl HiringStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Requested,
            Self::Approved,
            Self::Sourcing,
            Self::Filled,
            Self::Withdrawn,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Requested => "Requested",
            Self::Approved => "Approved",
            Self::Sourcing => "Sourcing",
            Self::Filled => "Filled",
            Self::Withdrawn => "Withdrawn",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|status| status.label() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringNeed {
    pub hiring_need_id: String,
    #[serde(default)]
    pub created_by: String,
    pub role_id: String,
    #[serde(default)]
    pub location_id: String,
    #[serde(default)]
    pub justification: String,
    /// Kept verbatim so that non-canonical stages still reach the pipeline counts.
    pub approval_status: String,
    pub opened_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_date: Option<NaiveDate>,
    #[serde(default)]
    pub internal_candidate_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_candidate_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filled_by: Option<String>,
}

impl HiringNeed {
    pub fn stage(&self) -> Option<HiringStatus> {
        HiringStatus::from_label(&self.approval_status)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadMember {
    pub person_id: String,
    pub squad_id: String,
    #[serde(default)]
    pub role_in_squad: String,
    pub allocation: f64,
    pub join_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquadStatus {
    Active,
    Paused,
    Closed,
}

impl SquadStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Squad {
    pub squad_id: String,
    pub name: String,
    #[serde(default)]
    pub objective: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub members: Vec<SquadMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_initiative: Option<String>,
    pub status: SquadStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitReason {
    Resignation,
    Termination,
    Retirement,
    Redundancy,
}

impl ExitReason {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Resignation => "Resignation",
            Self::Termination => "Termination",
            Self::Retirement => "Retirement",
            Self::Redundancy => "Redundancy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitRecord {
    pub exit_id: String,
    pub person_id: String,
    pub reason: ExitReason,
    pub notice_date: NaiveDate,
    pub last_working_day: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_feedback: Option<String>,
    pub eligible_for_rehire: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipationStatus {
    Active,
    Dormant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alumni {
    pub alumni_id: String,
    pub person_id: String,
    pub rehire_eligible: bool,
    pub joined_date: NaiveDate,
    pub left_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alumni_email: Option<String>,
    pub participation_status: ParticipationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(
            "ONBOARDING".parse::<EmploymentStatus>(),
            Ok(EmploymentStatus::Onboarding)
        );
        assert_eq!(
            " alumni ".parse::<EmploymentStatus>(),
            Ok(EmploymentStatus::Alumni)
        );
        let err = "contractor"
            .parse::<EmploymentStatus>()
            .expect_err("unknown status rejected");
        assert!(err.to_string().starts_with("unknown employment status 'contractor'"));
    }

    #[test]
    fn hiring_stage_only_maps_canonical_labels() {
        assert_eq!(HiringStatus::from_label("Sourcing"), Some(HiringStatus::Sourcing));
        assert_eq!(HiringStatus::from_label("OnHold"), None);
        assert_eq!(HiringStatus::from_label("sourcing"), None);
    }

    #[test]
    fn person_deserializes_with_sparse_fields() {
        let person: Person = serde_json::from_str(
            r#"{
                "personId": "p-1",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@peopleflow.app",
                "locationId": "loc-lon",
                "employmentStatus": "Active",
                "managerId": "p-0",
                "dottedLineManagerIds": ["p-9"]
            }"#,
        )
        .expect("sparse person deserializes");

        assert_eq!(person.full_name(), "Ada Lovelace");
        assert_eq!(person.manager_id.as_deref(), Some("p-0"));
        assert!(person.reports_dotted_to("p-9"));
        assert!(person.skills.is_empty());
        assert_eq!(person.fte, 0.0);
    }
}
