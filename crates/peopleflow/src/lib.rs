//! Data-shaping core of the PeopleFlow cockpit: organisation charts, headcount,
//! hiring and squad analytics, and lifecycle views over an in-memory dataset.

pub mod analytics;
pub mod config;
pub mod dataset;
pub mod error;
pub mod people;
pub mod telemetry;

pub use analytics::{
    compute_squad_loads, summarize_headcount, summarize_hiring_pipeline, HeadcountSummary,
    HiringPipelineDatum, SquadLoad,
};
pub use dataset::{Dataset, DatasetError};
pub use people::{build_forest, OrgNode};
