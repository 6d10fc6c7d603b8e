//! Plain-text renderings of the cockpit views.

use chrono::NaiveDate;
use peopleflow::analytics::{DashboardSummary, HiringBoard, HiringPipelineDatum, SquadPanel};
use peopleflow::people::{EmployeeJourney, OrgNode, Person, RosterRow};

const DOTTED_MARKER: &str = "··· ";

fn date_or_tbc(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "TBC".to_string())
}

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub(crate) fn dashboard(summary: &DashboardSummary) -> String {
    let mut lines = vec![format!("Headcount: {}", summary.headcount.total)];

    lines.push("\nStatuses".to_string());
    for entry in &summary.headcount.statuses {
        let mark = if entry.selected { "x" } else { " " };
        lines.push(format!("- [{mark}] {}: {}", entry.status_label, entry.count));
    }

    lines.push("\nLocations".to_string());
    if summary.headcount.locations.is_empty() {
        lines.push("- none".to_string());
    }
    for entry in &summary.headcount.locations {
        lines.push(format!("- {}: {}", entry.location, entry.count));
    }

    lines.push("\nHiring pipeline".to_string());
    lines.extend(pipeline_lines(&summary.hiring_pipeline));

    lines.push("\nCritical roles".to_string());
    if summary.critical_roles.is_empty() {
        lines.push("- none vacant".to_string());
    }
    for role in &summary.critical_roles {
        lines.push(format!(
            "- {} ({}): {}",
            role.title, role.department, role.required_skills
        ));
    }

    lines.push("\nSquad utilisation".to_string());
    for squad in &summary.squad_utilisation {
        let flag = if squad.over_allocated {
            " (over-allocated)"
        } else {
            ""
        };
        lines.push(format!("- {}: {}%{flag}", squad.name, squad.utilisation_pct));
    }

    lines.push("\nRecent exits".to_string());
    if summary.recent_exits.is_empty() {
        lines.push("- none".to_string());
    }
    for exit in &summary.recent_exits {
        let rehire = if exit.eligible_for_rehire {
            "rehire eligible"
        } else {
            "not rehireable"
        };
        lines.push(format!(
            "- {} {}, last day {}, {rehire}",
            exit.person_id, exit.reason_label, exit.last_working_day
        ));
    }

    let lifecycle = summary.lifecycle;
    lines.push(format!(
        "\nLifecycle: {} onboarding, {} offboarding, {} candidates",
        lifecycle.onboarding, lifecycle.offboarding, lifecycle.candidates
    ));

    finish(lines)
}

fn pipeline_lines(pipeline: &[HiringPipelineDatum]) -> Vec<String> {
    if pipeline.is_empty() {
        return vec!["- no hiring needs".to_string()];
    }
    pipeline
        .iter()
        .map(|datum| format!("- {}: {}", datum.status, datum.count))
        .collect()
}

fn person_label(person: &Person) -> String {
    match person.job_title.as_deref() {
        Some(title) => format!("{} ({title})", person.full_name()),
        None => person.full_name(),
    }
}

pub(crate) fn org_chart(forest: &[OrgNode<'_>], detached: &[&Person]) -> String {
    let mut lines = Vec::new();
    for root in forest {
        push_node(&mut lines, root, 0, false);
    }
    if lines.is_empty() {
        lines.push("No people match the selected statuses".to_string());
    }
    if !detached.is_empty() {
        lines.push("\nNot placed (manager cycle)".to_string());
        lines.extend(detached.iter().map(|person| format!("- {}", person_label(person))));
    }
    finish(lines)
}

fn push_node(lines: &mut Vec<String>, node: &OrgNode<'_>, depth: usize, dotted: bool) {
    let marker = if dotted { DOTTED_MARKER } else { "" };
    lines.push(format!(
        "{}{marker}{}",
        "  ".repeat(depth),
        person_label(node.person)
    ));
    for report in &node.reports {
        push_node(lines, report, depth + 1, false);
    }
    for report in &node.dotted_reports {
        push_node(lines, report, depth + 1, true);
    }
}

pub(crate) fn roster(rows: &[RosterRow]) -> String {
    if rows.is_empty() {
        return finish(vec!["No people found".to_string()]);
    }

    let lines = rows
        .iter()
        .map(|row| {
            let mut line = format!(
                "- {} <{}> | {} | {} | {} | manager {}",
                row.name, row.email, row.status_label, row.job_title, row.location, row.manager
            );
            if !row.skills.is_empty() {
                line.push_str(&format!(" | {}", row.skills));
            }
            if let Some(count) = row.direct_reports {
                line.push_str(&format!(" | {count} direct reports"));
            }
            line
        })
        .collect();
    finish(lines)
}

pub(crate) fn squads(panel: &SquadPanel) -> String {
    let mut lines = vec![format!(
        "Over-allocation threshold: {}%",
        (panel.threshold * 100.0).round()
    )];
    if panel.cards.is_empty() {
        lines.push("No squads".to_string());
    }

    for card in &panel.cards {
        let flag = if card.over_allocated {
            " OVER-ALLOCATED"
        } else {
            ""
        };
        lines.push(format!(
            "\n{} [{}] {}%{flag}",
            card.name, card.status_label, card.total_allocation_pct
        ));
        lines.push(format!("  Owner: {} | Initiative: {}", card.owner, card.initiative));
        let end = card
            .end_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "ongoing".to_string());
        lines.push(format!("  Runs {} -> {end}", card.start_date));
        for member in &card.members {
            lines.push(format!(
                "  - {} ({}) {}%",
                member.name, member.role_in_squad, member.allocation_pct
            ));
        }
    }
    finish(lines)
}

pub(crate) fn hiring(pipeline: &[HiringPipelineDatum], board: &HiringBoard) -> String {
    let mut lines = vec!["Hiring pipeline".to_string()];
    lines.extend(pipeline_lines(pipeline));

    for column in &board.columns {
        lines.push(format!("\n{} ({})", column.stage_label, column.cards.len()));
        for card in &column.cards {
            let closed = card
                .closed_date
                .map(|date| format!(", closed {date}"))
                .unwrap_or_default();
            lines.push(format!(
                "- {} / {}: opened {}{closed}, {} internal candidates",
                card.role_title, card.department, card.opened_date, card.internal_candidates
            ));
        }
    }
    if board.unclassified > 0 {
        lines.push(format!(
            "\n{} needs with an unrecognised approval status",
            board.unclassified
        ));
    }
    finish(lines)
}

pub(crate) fn journey(journey: &EmployeeJourney) -> String {
    let mut lines = vec!["Onboarding".to_string()];
    if journey.onboarding_is_empty() {
        lines.push("- nobody onboarding".to_string());
    }
    for entry in &journey.onboarding {
        lines.push(format!(
            "- {}: starts {}, manager {}, squads {}",
            entry.name,
            date_or_tbc(entry.start_date),
            entry.manager,
            entry.squads
        ));
    }

    lines.push("\nCareer mobility".to_string());
    if journey.mobility_is_empty() {
        lines.push("- no career events".to_string());
    }
    for entry in &journey.mobility {
        let events: Vec<String> = entry
            .events
            .iter()
            .map(|event| format!("{} {}", event.event_label, event.event_date))
            .collect();
        lines.push(format!("- {}: {}", entry.name, events.join(", ")));
    }

    lines.push("\nOffboarding".to_string());
    if journey.offboarding_is_empty() {
        lines.push("- nobody leaving".to_string());
    }
    for entry in &journey.offboarding {
        lines.push(format!(
            "- {}: last day {}, manager {}",
            entry.name,
            date_or_tbc(entry.last_working_day),
            entry.manager
        ));
    }
    for exit in &journey.exits {
        lines.push(format!(
            "- exit {} ({}): {}, notice {}",
            exit.person_id, exit.reason_label, exit.last_working_day, exit.notice_date
        ));
    }

    lines.push("\nTalent pipeline".to_string());
    if journey.talent_pipeline_is_empty() {
        lines.push("- no candidates".to_string());
    }
    for entry in &journey.talent_pipeline {
        lines.push(format!(
            "- {} for {}: {}",
            entry.name, entry.applied_role, entry.skills
        ));
    }

    finish(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use peopleflow::people::{build_forest, roster_rows};
    use serde_json::json;

    fn people() -> Vec<Person> {
        serde_json::from_value(json!([
            {"personId": "a", "firstName": "Ada", "lastName": "Lovelace", "email": "ada@x",
             "locationId": "l", "employmentStatus": "Active", "jobTitle": "CTO"},
            {"personId": "b", "firstName": "Bo", "lastName": "Chen", "email": "bo@x",
             "locationId": "l", "employmentStatus": "Active", "managerId": "a"},
            {"personId": "c", "firstName": "Cy", "lastName": "Reyes", "email": "cy@x",
             "locationId": "l", "employmentStatus": "Onboarding", "managerId": "a",
             "dottedLineManagerIds": ["b"]}
        ]))
        .expect("valid people")
    }

    #[test]
    fn org_chart_indents_reports_and_marks_dotted_lines() {
        let people = people();
        let forest = build_forest(&people);
        let text = org_chart(&forest, &[]);

        assert_eq!(
            text,
            "Ada Lovelace (CTO)\n  Bo Chen\n    ··· Cy Reyes\n  Cy Reyes\n"
        );
    }

    #[test]
    fn org_chart_lists_detached_people() {
        let people = people();
        let text = org_chart(&[], &[&people[1]]);
        assert!(text.starts_with("No people match"));
        assert!(text.contains("Not placed (manager cycle)\n- Bo Chen"));
    }

    #[test]
    fn journey_reports_empty_sections() {
        let view = EmployeeJourney::build(&[], &[]);
        let text = journey(&view);
        assert!(text.contains("- nobody onboarding"));
        assert!(text.contains("- no career events"));
        assert!(text.contains("- nobody leaving"));
        assert!(text.contains("- no candidates"));
    }

    #[test]
    fn hiring_board_lists_every_stage() {
        let board = HiringBoard::build(&[], &[]);
        let text = hiring(&[], &board);
        assert!(text.contains("- no hiring needs"));
        for stage in ["Requested", "Approved", "Sourcing", "Filled", "Withdrawn"] {
            assert!(text.contains(&format!("\n{stage} (0)")));
        }
        assert!(!text.contains("unrecognised"));
    }

    #[test]
    fn roster_rows_show_report_counts_when_requested() {
        let people = people();
        let refs: Vec<&Person> = people.iter().collect();
        let rows = roster_rows(&refs, &[], true);
        let text = roster(&rows);

        assert!(text.contains("- Ada Lovelace <ada@x> | Active | CTO | l | manager Executive"));
        assert!(text.contains("| 2 direct reports"));
        assert!(text.contains("Bo Chen <bo@x> | Active | – | l | manager a | 0 direct reports"));
    }
}
