//! On-disk snapshot of the user's schedule, profile and chat history.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use timeblock_core::conversation::{Message, UserProfile};
use timeblock_core::{Event, Suggestion};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub history: Vec<Message>,
}

/// Load the snapshot, or an empty one if the file doesn't exist yet.
pub fn load(path: &Path) -> Result<Snapshot> {
    if !path.exists() {
        return Ok(Snapshot::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule at {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse schedule at {}", path.display()))
}

pub fn save(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory at {}", parent.display()))?;
    }

    let contents = serde_json::to_string_pretty(snapshot).context("Failed to serialize schedule")?;

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write schedule at {}", path.display()))?;

    Ok(())
}
