use crate::render;
use clap::{Args, Parser, Subcommand};
use peopleflow::analytics::{
    summarize_hiring_pipeline, DashboardSummary, HiringBoard, HiringPipelineDatum, SquadPanel,
};
use peopleflow::config::AppConfig;
use peopleflow::error::AppError;
use peopleflow::people::{
    build_forest, detached_people, roster_rows, search_people, select_roster, write_roster_csv,
    EmployeeJourney, EmploymentStatus, Person, StatusFilter,
};
use peopleflow::{telemetry, Dataset};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "peopleflow",
    about = "Org charts, headcount, hiring and squad views over a PeopleFlow dataset",
    version
)]
struct Cli {
    /// Path to the dataset JSON (falls back to APP_DATASET)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,
    /// Employment status to include; repeat to select several
    #[arg(long = "status", value_name = "STATUS", global = true, value_parser = parse_status)]
    statuses: Vec<EmploymentStatus>,
    /// Print the view model as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Headcount, hiring, roles, squads and exits overview (default command)
    Dashboard,
    /// Organisation chart with dotted-line reports
    Org,
    /// People directory with search and CSV export
    Roster(RosterArgs),
    /// Squad cards with allocation and over-allocation flags
    Squads,
    /// Hiring pipeline counts and kanban board
    Hiring,
    /// Onboarding, mobility, offboarding and talent pipeline
    Journey,
}

#[derive(Args, Debug, Default)]
struct RosterArgs {
    /// Case-insensitive match on name, title, email or skill
    #[arg(long)]
    search: Option<String>,
    /// Add a direct report count per person
    #[arg(long)]
    manager_view: bool,
    /// Also write the listed rows to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Serialize)]
struct HiringReport {
    pipeline: Vec<HiringPipelineDatum>,
    board: HiringBoard,
}

fn parse_status(raw: &str) -> Result<EmploymentStatus, String> {
    raw.parse::<EmploymentStatus>().map_err(|err| err.to_string())
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let path = cli
        .dataset
        .or_else(|| config.dataset.path.clone())
        .ok_or(AppError::MissingDataset)?;
    let dataset = Dataset::from_path(&path)?;

    let filter = if cli.statuses.is_empty() {
        config.analytics.default_statuses.clone()
    } else {
        StatusFilter::new(cli.statuses)
    };
    let roster = select_roster(&dataset, &filter);
    let threshold = config.analytics.over_allocation_threshold;

    info!(
        dataset = %path.display(),
        environment = ?config.environment,
        people = dataset.people.len(),
        roster = roster.len(),
        "dataset loaded"
    );

    let json = cli.json;
    match cli.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => {
            let summary = DashboardSummary::build(&roster, &dataset, &filter, threshold);
            emit(json, &summary, || render::dashboard(&summary))
        }
        Command::Org => {
            let forest = build_forest(&roster);
            let detached = detached_people(&roster, &forest);
            if !detached.is_empty() {
                warn!(
                    count = detached.len(),
                    "people in manager cycles left out of the org chart"
                );
            }
            emit(json, &forest, || render::org_chart(&forest, &detached))
        }
        Command::Roster(args) => run_roster(args, &roster, &dataset, json),
        Command::Squads => {
            let panel = SquadPanel::build(&dataset.squads, &roster, threshold);
            emit(json, &panel, || render::squads(&panel))
        }
        Command::Hiring => {
            let report = HiringReport {
                pipeline: summarize_hiring_pipeline(&dataset.hiring_needs),
                board: HiringBoard::build(&dataset.hiring_needs, &dataset.roles),
            };
            emit(json, &report, || {
                render::hiring(&report.pipeline, &report.board)
            })
        }
        Command::Journey => {
            let journey = journey_view(&roster, &dataset);
            emit(json, &journey, || render::journey(&journey))
        }
    }
}

/// Journey over the selected roster, like every other people-based view.
fn journey_view(roster: &[Person], dataset: &Dataset) -> EmployeeJourney {
    EmployeeJourney::build(roster, &dataset.exit_records)
}

fn run_roster(
    args: RosterArgs,
    roster: &[Person],
    dataset: &Dataset,
    json: bool,
) -> Result<(), AppError> {
    let RosterArgs {
        search,
        manager_view,
        csv,
    } = args;

    let matches = search_people(roster, search.as_deref().unwrap_or(""));
    let rows = roster_rows(&matches, &dataset.locations, manager_view);

    if let Some(path) = csv {
        write_roster_csv(&rows, File::create(&path)?)?;
        info!(path = %path.display(), rows = rows.len(), "roster exported");
    }

    emit(json, &rows, || render::roster(&rows))
}

fn emit<T, F>(json: bool, value: &T, text: F) -> Result<(), AppError>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, value)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", text())?;
    }
    Ok(())
}
