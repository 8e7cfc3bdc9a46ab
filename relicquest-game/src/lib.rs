//! Relicquest Game Engine
//!
//! Platform-agnostic core logic for the Relicquest treasure-hunt
//! mini-game: the five-step expedition chain, its run bookkeeping, and
//! the persisted player progress model. No UI or platform-specific
//! dependencies live here.

pub mod progress;
pub mod rng;
pub mod sequencer;
pub mod steps;
pub mod story;

// Re-export commonly used types
pub use progress::{decode_history, encode_history, PlayerProfile, ProgressRecord};
pub use rng::StepRngs;
pub use sequencer::{
    FailureKind, NoopSleeper, Run, RunPhase, RunStatus, Sequencer, Sleeper, StepFailure,
    StepOutcome, FAILURE_LABEL, SUCCESS_LABEL,
};
pub use steps::{SequenceConfig, StepId, StepSpec};
pub use story::{StoryText, SEGMENT_SEPARATOR};

use async_trait::async_trait;

/// Trait for abstracting the story-text asset source.
/// Platform-specific implementations should provide this.
#[async_trait(?Send)]
pub trait StoryLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the story document from the platform-specific source.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be fetched.
    async fn load_story(&self) -> Result<StoryText, Self::Error>;
}

/// Trait for abstracting progress persistence.
/// Platform-specific implementations should provide this.
pub trait ProgressStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Overwrite all three stored values unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error if the values cannot be written.
    fn save_progress(&self, record: &ProgressRecord) -> Result<(), Self::Error>;

    /// Read the stored values back. Absent or unreadable values degrade
    /// to absent / empty instead of erroring.
    fn load_progress(&self) -> ProgressRecord;
}

/// Main engine tying the sequencer's collaborators together.
pub struct GameEngine<L, S>
where
    L: StoryLoader,
    S: ProgressStorage,
{
    loader: L,
    storage: S,
}

impl<L, S> GameEngine<L, S>
where
    L: StoryLoader,
    S: ProgressStorage,
{
    /// Create a new engine with the provided loader and storage.
    pub const fn new(loader: L, storage: S) -> Self {
        Self { loader, storage }
    }

    /// Load the story document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be fetched.
    pub async fn load_story(&self) -> Result<StoryText, L::Error> {
        self.loader.load_story().await
    }

    /// Read the persisted profile and history.
    #[must_use]
    pub fn load_progress(&self) -> ProgressRecord {
        self.storage.load_progress()
    }

    /// Append exactly one outcome label to the stored history and
    /// overwrite the stored profile with `profile`.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated record cannot be written.
    pub fn record_outcome(&self, profile: &PlayerProfile, label: &str) -> Result<(), S::Error> {
        let mut history = self.storage.load_progress().history;
        history.push(label.to_string());
        self.storage.save_progress(&ProgressRecord {
            player_id: Some(profile.id.clone()),
            player_name: Some(profile.name.clone()),
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;

    struct FixtureLoader;

    #[async_trait(?Send)]
    impl StoryLoader for FixtureLoader {
        type Error = Infallible;

        async fn load_story(&self) -> Result<StoryText, Self::Error> {
            Ok(StoryText::from_text("lib---temple---chest---lock"))
        }
    }

    #[derive(Clone, Default)]
    struct MemoryStorage {
        record: Rc<RefCell<ProgressRecord>>,
    }

    impl ProgressStorage for MemoryStorage {
        type Error = Infallible;

        fn save_progress(&self, record: &ProgressRecord) -> Result<(), Self::Error> {
            *self.record.borrow_mut() = record.clone();
            Ok(())
        }

        fn load_progress(&self) -> ProgressRecord {
            self.record.borrow().clone()
        }
    }

    #[tokio::test]
    async fn engine_loads_story_and_roundtrips_progress() {
        let engine = GameEngine::new(FixtureLoader, MemoryStorage::default());
        let story = engine.load_story().await.unwrap();
        assert_eq!(story.temple, "temple");

        let profile = PlayerProfile {
            id: String::from("p-1"),
            name: String::from("Indy"),
        };
        engine.record_outcome(&profile, SUCCESS_LABEL).unwrap();

        let loaded = engine.load_progress();
        assert_eq!(loaded.player_id.as_deref(), Some("p-1"));
        assert_eq!(loaded.player_name.as_deref(), Some("Indy"));
        assert_eq!(loaded.history, vec![String::from(SUCCESS_LABEL)]);
    }

    #[tokio::test]
    async fn each_completed_run_adds_exactly_one_label() {
        let engine = GameEngine::new(FixtureLoader, MemoryStorage::default());
        let profile = PlayerProfile {
            id: String::from("p-2"),
            name: String::from("Lara"),
        };

        for round in 1..=4_usize {
            let before = engine.load_progress().history.len();
            let label = if round % 2 == 0 { FAILURE_LABEL } else { SUCCESS_LABEL };
            engine.record_outcome(&profile, label).unwrap();
            assert_eq!(engine.load_progress().history.len(), before + 1);
        }
        assert_eq!(engine.load_progress().history.len(), 4);
    }

    #[test]
    fn fresh_storage_loads_absent_values() {
        let engine = GameEngine::new(FixtureLoader, MemoryStorage::default());
        let loaded = engine.load_progress();
        assert!(loaded.player_id.is_none());
        assert!(loaded.player_name.is_none());
        assert!(loaded.history.is_empty());
    }
}
