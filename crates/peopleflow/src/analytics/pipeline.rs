use crate::people::domain::{HiringNeed, HiringStatus, Role};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

const ROLE_PLACEHOLDER: &str = "Role TBD";
const DEPARTMENT_PLACEHOLDER: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiringPipelineDatum {
    pub status: String,
    pub count: usize,
}

/// Count hiring needs per literal approval status, in first-seen order.
///
/// Statuses outside the canonical stages are counted like any other value.
pub fn summarize_hiring_pipeline(needs: &[HiringNeed]) -> Vec<HiringPipelineDatum> {
    let mut buckets: IndexMap<&str, usize> = IndexMap::new();
    for need in needs {
        *buckets.entry(need.approval_status.as_str()).or_default() += 1;
    }

    buckets
        .into_iter()
        .map(|(status, count)| HiringPipelineDatum {
            status: status.to_string(),
            count,
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct HiringCard {
    pub hiring_need_id: String,
    pub role_title: String,
    pub department: String,
    pub opened_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_date: Option<NaiveDate>,
    pub justification: String,
    pub internal_candidates: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HiringColumn {
    pub stage: HiringStatus,
    pub stage_label: &'static str,
    pub cards: Vec<HiringCard>,
}

/// Kanban view of hiring needs with one column per canonical stage.
#[derive(Debug, Clone, Serialize)]
pub struct HiringBoard {
    pub columns: Vec<HiringColumn>,
    /// Needs whose approval status matches no column.
    pub unclassified: usize,
}

impl HiringBoard {
    pub fn build(needs: &[HiringNeed], roles: &[Role]) -> Self {
        let role_lookup: HashMap<&str, &Role> = roles
            .iter()
            .map(|role| (role.role_id.as_str(), role))
            .collect();

        let columns = HiringStatus::ordered()
            .into_iter()
            .map(|stage| HiringColumn {
                stage,
                stage_label: stage.label(),
                cards: needs
                    .iter()
                    .filter(|need| need.stage() == Some(stage))
                    .map(|need| card(need, role_lookup.get(need.role_id.as_str()).copied()))
                    .collect(),
            })
            .collect();

        let unclassified = needs.iter().filter(|need| need.stage().is_none()).count();

        Self {
            columns,
            unclassified,
        }
    }

    pub fn column(&self, stage: HiringStatus) -> Option<&HiringColumn> {
        self.columns.iter().find(|column| column.stage == stage)
    }
}

fn card(need: &HiringNeed, role: Option<&Role>) -> HiringCard {
    HiringCard {
        hiring_need_id: need.hiring_need_id.clone(),
        role_title: role
            .map(|role| role.title.clone())
            .unwrap_or_else(|| ROLE_PLACEHOLDER.to_string()),
        department: role
            .map(|role| role.department.clone())
            .unwrap_or_else(|| DEPARTMENT_PLACEHOLDER.to_string()),
        opened_date: need.opened_date,
        closed_date: need.closed_date,
        justification: need.justification.clone(),
        internal_candidates: need.internal_candidate_ids.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn need(id: &str, role: &str, status: &str) -> HiringNeed {
        serde_json::from_value(json!({
            "hiringNeedId": id,
            "createdBy": "p-1",
            "roleId": role,
            "locationId": "lon",
            "justification": "Backfill",
            "approvalStatus": status,
            "openedDate": "2025-01-06",
            "internalCandidateIds": ["p-7"]
        }))
        .expect("valid hiring need")
    }

    fn roles() -> Vec<Role> {
        serde_json::from_value(json!([
            {"roleId": "r-1", "title": "Staff Engineer", "department": "Platform",
             "gradeLevel": "L6", "isVacant": true}
        ]))
        .expect("valid roles")
    }

    #[test]
    fn pipeline_groups_by_literal_status() {
        let needs = vec![
            need("h1", "r-1", "Approved"),
            need("h2", "r-1", "Approved"),
            need("h3", "r-1", "Sourcing"),
        ];

        let pipeline = summarize_hiring_pipeline(&needs);
        assert_eq!(pipeline.len(), 2);
        assert!(pipeline.contains(&HiringPipelineDatum {
            status: "Approved".to_string(),
            count: 2
        }));
        assert!(pipeline.contains(&HiringPipelineDatum {
            status: "Sourcing".to_string(),
            count: 1
        }));
        assert_eq!(pipeline, summarize_hiring_pipeline(&needs));
    }

    #[test]
    fn pipeline_counts_non_canonical_statuses() {
        let needs = vec![need("h1", "r-1", "OnHold"), need("h2", "r-1", "Filled")];
        let pipeline = summarize_hiring_pipeline(&needs);
        assert_eq!(pipeline[0].status, "OnHold");
        assert_eq!(pipeline[1].status, "Filled");
        assert!(summarize_hiring_pipeline(&[]).is_empty());
    }

    #[test]
    fn board_orders_columns_and_defaults_missing_roles() {
        let needs = vec![
            need("h1", "r-1", "Sourcing"),
            need("h2", "r-missing", "Requested"),
            need("h3", "r-1", "Paused"),
        ];

        let board = HiringBoard::build(&needs, &roles());
        let labels: Vec<&str> = board.columns.iter().map(|c| c.stage_label).collect();
        assert_eq!(
            labels,
            vec!["Requested", "Approved", "Sourcing", "Filled", "Withdrawn"]
        );

        let requested = board
            .column(HiringStatus::Requested)
            .expect("requested column");
        assert_eq!(requested.cards[0].role_title, "Role TBD");
        assert_eq!(requested.cards[0].department, "Unknown");

        let sourcing = board.column(HiringStatus::Sourcing).expect("sourcing column");
        assert_eq!(sourcing.cards[0].role_title, "Staff Engineer");
        assert_eq!(sourcing.cards[0].internal_candidates, 1);

        assert!(board
            .column(HiringStatus::Approved)
            .is_some_and(|column| column.cards.is_empty()));
        assert_eq!(board.unclassified, 1);
    }
}
