//! Dashboard aggregates over roster, hiring and squad collections.

pub mod dashboard;
mod headcount;
mod pipeline;
mod squads;
pub mod views;

pub use dashboard::DashboardSummary;
pub use headcount::{summarize_headcount, HeadcountSummary, UNKNOWN_LOCATION};
pub use pipeline::{
    summarize_hiring_pipeline, HiringBoard, HiringCard, HiringColumn, HiringPipelineDatum,
};
pub use squads::{compute_squad_loads, SquadCard, SquadLoad, SquadMemberLine, SquadPanel};

/// Whole-number percentage for an allocation fraction (0.75 -> 75).
pub(crate) fn as_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round().max(0.0) as u32
}
