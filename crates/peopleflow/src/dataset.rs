//! Typed input feed for every view: the JSON export of the people system.

use crate::people::domain::{
    Alumni, ExitRecord, HiringNeed, Location, Person, Role, Squad,
};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub hiring_needs: Vec<HiringNeed>,
    #[serde(default)]
    pub squads: Vec<Squad>,
    #[serde(default)]
    pub exit_records: Vec<ExitRecord>,
    #[serde(default)]
    pub alumni: Vec<Alumni>,
}

impl Dataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading dataset");
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let dataset: Self = serde_json::from_reader(reader)?;
        debug!(
            people = dataset.people.len(),
            locations = dataset.locations.len(),
            hiring_needs = dataset.hiring_needs.len(),
            squads = dataset.squads.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Everyone still attached to the organisation in some form (not alumni).
    pub fn current_people(&self) -> Vec<Person> {
        self.people
            .iter()
            .filter(|person| person.employment_status.is_current())
            .cloned()
            .collect()
    }

    pub fn location_name(&self, location_id: &str) -> Option<&str> {
        self.locations
            .iter()
            .find(|location| location.location_id == location_id)
            .map(|location| location.name.as_str())
    }
}
