//! Project, build and the read-only project summary

use super::ids::ProjectId;
use crate::error::{PitstopError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A CI project: a repository plus the lane to run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub project_name: String,
    pub lane: String,
}

/// Outcome of a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStatus {
    Success,
    Failure,
    Pending,
    MissingFastfile,
    CiProblem,
}

/// A single build of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub number: u64,
    pub status: BuildStatus,
    /// Start time
    pub timestamp: DateTime<Utc>,
}

/// Display projection of a project and its most recent build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project name, also shown in commit statuses
    pub name: String,
    /// Lane to run
    pub lane: String,
    pub id: ProjectId,
    pub latest_status: BuildStatus,
    pub latest_timestamp: DateTime<Utc>,
}

impl ProjectSummary {
    pub fn new(project: &Project, latest_build: &Build) -> Self {
        Self {
            name: project.project_name.clone(),
            lane: project.lane.clone(),
            id: project.id.clone(),
            latest_status: latest_build.status,
            latest_timestamp: latest_build.timestamp,
        }
    }

    /// Build a summary from untyped records, e.g. ones read back from a JSON
    /// data folder.
    ///
    /// # Errors
    /// Returns `InvalidInput` naming the record that does not have the
    /// expected shape.
    pub fn from_json(project: &Value, latest_build: &Value) -> Result<Self> {
        let project: Project = serde_json::from_value(project.clone()).map_err(|e| {
            PitstopError::invalid_input(format!("expected a project record: {e}"))
        })?;
        let latest_build: Build = serde_json::from_value(latest_build.clone()).map_err(|e| {
            PitstopError::invalid_input(format!("expected a build record: {e}"))
        })?;

        Ok(Self::new(&project, &latest_build))
    }
}
