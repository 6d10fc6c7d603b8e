pub mod domain;
pub mod hierarchy;
pub mod lifecycle;
pub mod roster;

pub use domain::{
    Alumni, CareerEvent, CareerEventType, EmploymentStatus, ExitReason, ExitRecord, HiringNeed,
    HiringStatus, Location, ParticipationStatus, Person, Role, Squad, SquadMember, SquadStatus,
    UnknownStatus,
};
pub use hierarchy::{build_forest, detached_people, OrgNode};
pub use lifecycle::EmployeeJourney;
pub use roster::{
    direct_report_counts, roster_rows, search_people, select_roster, write_roster_csv,
    ExportError, RosterRow, StatusFilter,
};
