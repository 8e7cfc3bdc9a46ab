//! Page flow for the single-document UI: exactly one page is active at
//! a time; activating one deactivates the rest.

use relicquest_game::StepId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Start,
    Library,
    TreasureMap,
    Chest,
    End,
    Fail,
}

impl Page {
    /// Every page, in document order.
    pub const ALL: [Self; 6] = [
        Self::Start,
        Self::Library,
        Self::TreasureMap,
        Self::Chest,
        Self::End,
        Self::Fail,
    ];

    /// Stable DOM id of the page's section.
    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Start => "start-page",
            Self::Library => "library-page",
            Self::TreasureMap => "treasure-map-page",
            Self::Chest => "chest-page",
            Self::End => "end-page",
            Self::Fail => "fail-page",
        }
    }

    /// Heading shown while the page is active.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Start => "Expedition Camp",
            Self::Library => "The Ancient Library",
            Self::TreasureMap => "The Treasure Map",
            Self::Chest => "The Chest Room",
            Self::End => "The Legendary Treasure",
            Self::Fail => "The Quest Ends Here",
        }
    }

    /// Page shown once `step` has resolved.
    #[must_use]
    pub const fn after_step(step: StepId) -> Self {
        match step {
            StepId::InitialClue => Self::Library,
            StepId::Decode => Self::TreasureMap,
            StepId::Search | StepId::Unlock => Self::Chest,
            StepId::Open => Self::End,
        }
    }
}
