use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::maketest::merge::error::{Result, ToolError};

/// Default fragment locating the destination value column in the
/// non-interactive merge.
pub const DEFAULT_DEST_VALUE: &str = "Project01-Automated";

/// Header fragments naming the key and value columns of the three tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnConventions {
    /// External identifier in the scores table.
    pub source_key: String,
    /// Value copied out of the scores table.
    pub source_value: String,
    /// External identifier in the mapping table.
    pub map_source: String,
    /// Destination identifier in the mapping table.
    pub map_dest: String,
    /// Destination identifier in the destination table.
    pub dest_key: String,
}

impl Default for ColumnConventions {
    fn default() -> Self {
        Self {
            source_key: "GitHub ID".to_string(),
            source_value: "Score".to_string(),
            map_source: "GitHub ID".to_string(),
            map_dest: "SIS Login ID".to_string(),
            dest_key: "SIS Login ID".to_string(),
        }
    }
}

impl ColumnConventions {
    /// Loads conventions from a JSON object. Fields left out keep their
    /// defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ToolError::MissingInput(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Loads conventions from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }
}
