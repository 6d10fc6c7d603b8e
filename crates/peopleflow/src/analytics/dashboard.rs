use super::headcount::summarize_headcount;
use super::pipeline::{summarize_hiring_pipeline, HiringPipelineDatum};
use super::squads::compute_squad_loads;
use super::views::{
    CriticalRoleEntry, HeadcountView, LifecycleCoverage, SquadUtilisationEntry,
};
use crate::dataset::Dataset;
use crate::people::domain::{EmploymentStatus, Person};
use crate::people::lifecycle::ExitEntry;
use crate::people::roster::StatusFilter;
use serde::Serialize;

/// Overview page: every aggregate the cockpit shows on its landing view.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub headcount: HeadcountView,
    pub hiring_pipeline: Vec<HiringPipelineDatum>,
    pub critical_roles: Vec<CriticalRoleEntry>,
    pub squad_utilisation: Vec<SquadUtilisationEntry>,
    pub recent_exits: Vec<ExitEntry>,
    pub lifecycle: LifecycleCoverage,
}

impl DashboardSummary {
    /// `roster` drives the people-based sections; hiring, roles, squads and
    /// exits always come from the whole dataset.
    pub fn build(
        roster: &[Person],
        dataset: &Dataset,
        filter: &StatusFilter,
        over_allocation_threshold: f64,
    ) -> Self {
        let headcount = summarize_headcount(roster, &dataset.locations);

        let critical_roles = dataset
            .roles
            .iter()
            .filter(|role| role.is_vacant)
            .map(|role| CriticalRoleEntry {
                role_id: role.role_id.clone(),
                title: role.title.clone(),
                department: role.department.clone(),
                required_skills: role.required_skills.join(", "),
            })
            .collect();

        let squad_utilisation = compute_squad_loads(&dataset.squads)
            .iter()
            .map(|load| load.to_entry(over_allocation_threshold))
            .collect();

        let count = |status: EmploymentStatus| {
            roster
                .iter()
                .filter(|person| person.employment_status == status)
                .count()
        };

        Self {
            headcount: HeadcountView {
                total: headcount.total,
                statuses: headcount.status_entries(filter),
                locations: headcount.location_entries(),
            },
            hiring_pipeline: summarize_hiring_pipeline(&dataset.hiring_needs),
            critical_roles,
            squad_utilisation,
            recent_exits: dataset.exit_records.iter().map(ExitEntry::from).collect(),
            lifecycle: LifecycleCoverage {
                onboarding: count(EmploymentStatus::Onboarding),
                offboarding: count(EmploymentStatus::Offboarding),
                candidates: count(EmploymentStatus::Candidate),
            },
        }
    }
}
