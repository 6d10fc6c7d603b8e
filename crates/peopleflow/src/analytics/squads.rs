use super::as_percent;
use super::views::SquadUtilisationEntry;
use crate::people::domain::{Person, Squad, SquadStatus};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadLoad<'a> {
    pub squad: &'a Squad,
    /// Sum of member allocation fractions; never clamped.
    pub total_allocation: f64,
}

impl SquadLoad<'_> {
    pub fn utilisation_pct(&self) -> u32 {
        as_percent(self.total_allocation)
    }

    pub fn is_over_allocated(&self, threshold: f64) -> bool {
        self.total_allocation > threshold
    }

    pub fn to_entry(&self, threshold: f64) -> SquadUtilisationEntry {
        SquadUtilisationEntry {
            squad_id: self.squad.squad_id.clone(),
            name: self.squad.name.clone(),
            status: self.squad.status,
            total_allocation: self.total_allocation,
            utilisation_pct: self.utilisation_pct(),
            over_allocated: self.is_over_allocated(threshold),
        }
    }
}

pub fn compute_squad_loads(squads: &[Squad]) -> Vec<SquadLoad<'_>> {
    squads
        .iter()
        .map(|squad| SquadLoad {
            squad,
            total_allocation: squad.members.iter().map(|member| member.allocation).sum(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct SquadMemberLine {
    pub person_id: String,
    pub name: String,
    pub role_in_squad: String,
    pub allocation_pct: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SquadCard {
    pub squad_id: String,
    pub name: String,
    pub status: SquadStatus,
    pub status_label: &'static str,
    pub objective: String,
    pub owner: String,
    pub initiative: String,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub members: Vec<SquadMemberLine>,
    pub total_allocation_pct: u32,
    pub over_allocated: bool,
}

/// Squad roster cards with names resolved against the visible people.
#[derive(Debug, Clone, Serialize)]
pub struct SquadPanel {
    pub threshold: f64,
    pub cards: Vec<SquadCard>,
}

impl SquadPanel {
    pub fn build(squads: &[Squad], people: &[Person], threshold: f64) -> Self {
        let names: HashMap<&str, &Person> = people
            .iter()
            .map(|person| (person.person_id.as_str(), person))
            .collect();
        let lookup_name = |id: &str| -> String {
            if id.is_empty() {
                return "Unassigned".to_string();
            }
            names
                .get(id)
                .map(|person| person.full_name())
                .unwrap_or_else(|| "Unknown".to_string())
        };

        let cards = compute_squad_loads(squads)
            .into_iter()
            .map(|load| {
                let squad = load.squad;
                SquadCard {
                    squad_id: squad.squad_id.clone(),
                    name: squad.name.clone(),
                    status: squad.status,
                    status_label: squad.status.label(),
                    objective: squad.objective.clone(),
                    owner: lookup_name(&squad.owner_id),
                    initiative: squad
                        .related_initiative
                        .clone()
                        .unwrap_or_else(|| "–".to_string()),
                    start_date: squad.start_date,
                    end_date: squad.end_date,
                    members: squad
                        .members
                        .iter()
                        .map(|member| SquadMemberLine {
                            person_id: member.person_id.clone(),
                            name: lookup_name(&member.person_id),
                            role_in_squad: member.role_in_squad.clone(),
                            allocation_pct: as_percent(member.allocation),
                        })
                        .collect(),
                    total_allocation_pct: load.utilisation_pct(),
                    over_allocated: load.is_over_allocated(threshold),
                }
            })
            .collect();

        Self { threshold, cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn squad(id: &str, owner: &str, allocations: &[f64]) -> Squad {
        let members: Vec<_> = allocations
            .iter()
            .enumerate()
            .map(|(index, allocation)| {
                json!({
                    "personId": format!("p{index}"),
                    "squadId": id,
                    "roleInSquad": "Engineer",
                    "allocation": allocation,
                    "joinDate": "2025-01-01"
                })
            })
            .collect();

        serde_json::from_value(json!({
            "squadId": id,
            "name": format!("Squad {id}"),
            "objective": "Ship it",
            "startDate": "2025-01-01",
            "ownerId": owner,
            "members": members,
            "status": "Active"
        }))
        .expect("valid squad")
    }

    fn people() -> Vec<Person> {
        serde_json::from_value(json!([
            {"personId": "p0", "firstName": "Mae", "lastName": "Jemison",
             "email": "mae@x", "locationId": "l", "employmentStatus": "Active"}
        ]))
        .expect("valid people")
    }

    #[test]
    fn totals_are_summed_without_clamping() {
        let squads = vec![squad("s1", "p0", &[0.6, 0.9]), squad("s2", "p0", &[])];
        let loads = compute_squad_loads(&squads);

        assert_eq!(loads.len(), 2);
        assert_eq!(loads[0].squad.squad_id, "s1");
        assert!((loads[0].total_allocation - 1.5).abs() < 1e-9);
        assert_eq!(loads[0].utilisation_pct(), 150);
        assert!(loads[0].is_over_allocated(1.0));
        assert_eq!(loads[1].total_allocation, 0.0);
        assert!(!loads[1].is_over_allocated(1.0));
        assert_eq!(loads, compute_squad_loads(&squads));
    }

    #[test]
    fn empty_squad_list_yields_no_loads() {
        assert!(compute_squad_loads(&[]).is_empty());
    }

    #[test]
    fn load_serializes_with_camel_case_keys() {
        let squads = vec![squad("s1", "p0", &[0.5])];
        let value = serde_json::to_value(&compute_squad_loads(&squads)).expect("loads serialize");
        assert_eq!(value[0]["totalAllocation"], 0.5);
        assert_eq!(value[0]["squad"]["squadId"], "s1");
    }

    #[test]
    fn panel_resolves_names_and_flags_over_allocation() {
        let squads = vec![
            squad("s1", "p0", &[0.5, 0.75, 0.5]),
            squad("s2", "", &[0.5]),
            squad("s3", "ghost", &[]),
        ];
        let panel = SquadPanel::build(&squads, &people(), 1.5);

        let first = &panel.cards[0];
        assert_eq!(first.owner, "Mae Jemison");
        assert_eq!(first.members[0].name, "Mae Jemison");
        assert_eq!(first.members[1].name, "Unknown");
        assert_eq!(first.members[1].allocation_pct, 75);
        assert_eq!(first.total_allocation_pct, 175);
        assert!(first.over_allocated);
        assert_eq!(first.initiative, "–");

        assert_eq!(panel.cards[1].owner, "Unassigned");
        assert!(!panel.cards[1].over_allocated);
        assert_eq!(panel.cards[2].owner, "Unknown");
    }
}
