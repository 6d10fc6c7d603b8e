//! Organisation tree reconstruction from a flat people list.
//!
//! Primary (manager) lines form the spine of each tree; dotted lines are
//! materialised as full copies of the dotted report's own subtree. Each descent
//! carries the ancestor trail by value, and nobody already on the trail can be
//! placed again below it, so cyclic reporting data always terminates. A dotted
//! report is also dropped when that person already sits in the node's own
//! primary subtree.

use super::domain::Person;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// One person in the organisation forest with both reporting branches resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgNode<'a> {
    pub person: &'a Person,
    pub reports: Vec<OrgNode<'a>>,
    pub dotted_reports: Vec<OrgNode<'a>>,
}

impl<'a> OrgNode<'a> {
    /// Number of people in the primary subtree, this node included.
    pub fn headcount(&self) -> usize {
        1 + self.reports.iter().map(OrgNode::headcount).sum::<usize>()
    }

    /// Levels in the primary subtree; a node without reports has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.reports.iter().map(OrgNode::depth).max().unwrap_or(0)
    }

    /// Pre-order traversal over this node and its primary descendants.
    pub fn walk_primary(&self) -> PrimaryWalk<'_, 'a> {
        PrimaryWalk { stack: vec![self] }
    }
}

pub struct PrimaryWalk<'n, 'a> {
    stack: Vec<&'n OrgNode<'a>>,
}

impl<'n, 'a> Iterator for PrimaryWalk<'n, 'a> {
    type Item = &'n OrgNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.reports.iter().rev());
        Some(node)
    }
}

/// Build the organisation forest for `people`.
///
/// Roots are people without a manager, people whose manager is not part of
/// `people`, and people listed as their own manager. Input order is kept for
/// roots, reports and dotted reports alike.
pub fn build_forest(people: &[Person]) -> Vec<OrgNode<'_>> {
    let builder = ForestBuilder::new(people);
    let forest: Vec<OrgNode<'_>> = builder
        .roots
        .iter()
        .map(|root| builder.node(root, &HashSet::new()))
        .collect();

    debug!(
        people = people.len(),
        roots = forest.len(),
        "organisation forest built"
    );
    forest
}

/// People that never appear on the primary spine of `forest`.
///
/// These are members (and descendants) of manager cycles that no root reaches,
/// e.g. two people listed as each other's manager.
pub fn detached_people<'a>(people: &'a [Person], forest: &[OrgNode<'a>]) -> Vec<&'a Person> {
    let placed: HashSet<&str> = forest
        .iter()
        .flat_map(OrgNode::walk_primary)
        .map(|node| node.person.person_id.as_str())
        .collect();

    people
        .iter()
        .filter(|person| !placed.contains(person.person_id.as_str()))
        .collect()
}

struct ForestBuilder<'a> {
    people: &'a [Person],
    by_manager: HashMap<&'a str, Vec<&'a Person>>,
    roots: Vec<&'a Person>,
}

impl<'a> ForestBuilder<'a> {
    fn new(people: &'a [Person]) -> Self {
        let known: HashSet<&str> = people
            .iter()
            .map(|person| person.person_id.as_str())
            .collect();

        let mut by_manager: HashMap<&'a str, Vec<&'a Person>> = HashMap::new();
        let mut roots = Vec::new();

        for person in people {
            match person.manager_id.as_deref() {
                Some(manager) if manager != person.person_id && known.contains(manager) => {
                    by_manager.entry(manager).or_default().push(person);
                }
                _ => roots.push(person),
            }
        }

        Self {
            people,
            by_manager,
            roots,
        }
    }

    fn node(&self, person: &'a Person, trail: &HashSet<&'a str>) -> OrgNode<'a> {
        let mut trail = trail.clone();
        trail.insert(person.person_id.as_str());

        let reports: Vec<OrgNode<'a>> = self
            .by_manager
            .get(person.person_id.as_str())
            .into_iter()
            .flatten()
            .copied()
            .filter(|report| !trail.contains(report.person_id.as_str()))
            .map(|report| self.node(report, &trail))
            .collect();

        let below: HashSet<&'a str> = reports
            .iter()
            .flat_map(OrgNode::walk_primary)
            .map(|node| node.person.person_id.as_str())
            .collect();

        let dotted_reports = self
            .people
            .iter()
            .filter(|candidate| {
                let id = candidate.person_id.as_str();
                candidate.reports_dotted_to(&person.person_id)
                    && !trail.contains(id)
                    && !below.contains(id)
            })
            .map(|candidate| self.node(candidate, &trail))
            .collect();

        OrgNode {
            person,
            reports,
            dotted_reports,
        }
    }
}
