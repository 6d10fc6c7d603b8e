use crate::people::domain::{EmploymentStatus, SquadStatus};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatusCountEntry {
    pub status: EmploymentStatus,
    pub status_label: &'static str,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationCountEntry {
    pub location: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadcountView {
    pub total: usize,
    pub statuses: Vec<StatusCountEntry>,
    pub locations: Vec<LocationCountEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CriticalRoleEntry {
    pub role_id: String,
    pub title: String,
    pub department: String,
    pub required_skills: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SquadUtilisationEntry {
    pub squad_id: String,
    pub name: String,
    pub status: SquadStatus,
    pub total_allocation: f64,
    pub utilisation_pct: u32,
    pub over_allocated: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LifecycleCoverage {
    pub onboarding: usize,
    pub offboarding: usize,
    pub candidates: usize,
}
