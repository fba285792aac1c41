pub mod accept;
pub mod add;
pub mod chat;
pub mod config;
pub mod day;
pub mod import;
pub mod onboard;
pub mod profile;
pub mod reject;
pub mod remove;
pub mod reply;
pub mod suggestions;
pub mod week;

use std::path::PathBuf;

use anyhow::{Context, Result};
use timeblock_core::Schedule;
use timeblock_core::clock::SystemClock;
use timeblock_core::config::TimeblockConfig;
use timeblock_core::conversation::{Conversation, UserProfile};

use crate::notifier::Notifier;
use crate::store::{self, Snapshot};

/// Everything a command needs, loaded once per invocation.
pub struct AppContext {
    pub config: TimeblockConfig,
    pub path: PathBuf,
    pub schedule: Schedule,
    pub profile: Option<UserProfile>,
    pub conversation: Conversation,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        let config = TimeblockConfig::load()?;
        let path = config.data_path();
        let snapshot = store::load(&path)?;

        let schedule = Schedule::new(snapshot.events, snapshot.suggestions, SystemClock)
            .with_context(|| format!("Invalid schedule in {}", path.display()))?
            .with_settings(config.settings()?)
            .with_observer(Notifier);

        Ok(AppContext {
            config,
            path,
            schedule,
            profile: snapshot.profile,
            conversation: Conversation::new(snapshot.history),
        })
    }

    /// Write everything back to the snapshot file.
    pub fn save(self) -> Result<()> {
        let (events, suggestions) = self.schedule.into_parts();
        let snapshot = Snapshot {
            events,
            suggestions,
            profile: self.profile,
            history: self.conversation.messages,
        };
        store::save(&self.path, &snapshot)
    }
}
