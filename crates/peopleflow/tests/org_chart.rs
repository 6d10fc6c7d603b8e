mod common;

use peopleflow::people::{
    build_forest, detached_people, select_roster, EmploymentStatus, OrgNode, StatusFilter,
};
use std::collections::HashSet;

fn ids<'a>(nodes: &[OrgNode<'a>]) -> Vec<&'a str> {
    nodes
        .iter()
        .map(|node| node.person.person_id.as_str())
        .collect()
}

#[test]
fn default_roster_builds_two_trees() {
    let dataset = common::sample_dataset();
    let roster = select_roster(&dataset, &StatusFilter::default());
    let forest = build_forest(&roster);

    // p-007's manager is not in the dataset, so they head their own tree
    assert_eq!(ids(&forest), vec!["p-001", "p-007"]);

    let cpo = &forest[0];
    assert_eq!(ids(&cpo.reports), vec!["p-002", "p-003"]);
    assert_eq!(ids(&cpo.reports[0].reports), vec!["p-004"]);
    assert_eq!(cpo.headcount(), 4);
    assert_eq!(cpo.depth(), 3);

    let product = &cpo.reports[1];
    assert_eq!(ids(&product.dotted_reports), vec!["p-004", "p-007"]);
    assert!(detached_people(&roster, &forest).is_empty());
}

#[test]
fn dotted_line_to_primary_ancestor_is_not_duplicated() {
    let dataset = common::sample_dataset();
    let filter = StatusFilter::new(
        EmploymentStatus::ordered()
            .into_iter()
            .filter(|status| status.is_current()),
    );
    let roster = select_roster(&dataset, &filter);
    let forest = build_forest(&roster);

    assert_eq!(ids(&forest), vec!["p-001", "p-006", "p-007"]);

    // p-005 reports to p-002 and dotted to p-001, who already manages that branch
    let cpo = &forest[0];
    assert!(cpo.dotted_reports.is_empty());
    let engineering = &cpo.reports[0];
    assert_eq!(ids(&engineering.reports), vec!["p-004", "p-005"]);
}

#[test]
fn every_current_person_is_placed_exactly_once() {
    let dataset = common::sample_dataset();
    let people = dataset.current_people();
    let forest = build_forest(&people);

    let mut seen = HashSet::new();
    for node in forest.iter().flat_map(OrgNode::walk_primary) {
        assert!(
            seen.insert(node.person.person_id.as_str()),
            "{} placed twice",
            node.person.person_id
        );
    }

    let placed: usize = forest.iter().map(OrgNode::headcount).sum();
    assert_eq!(placed, people.len());
}

#[test]
fn forest_serializes_nested_reports() {
    let dataset = common::sample_dataset();
    let roster = select_roster(&dataset, &StatusFilter::default());
    let forest = build_forest(&roster);

    let value = serde_json::to_value(&forest).expect("forest serializes");
    assert_eq!(value[0]["person"]["personId"], "p-001");
    assert_eq!(value[0]["reports"][0]["reports"][0]["person"]["firstName"], "Kwame");
    assert_eq!(
        value[0]["reports"][1]["dottedReports"][1]["person"]["personId"],
        "p-007"
    );
    assert!(value[0].get("dotted_reports").is_none());
}
