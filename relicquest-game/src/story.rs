//! The narrative text asset: one document split on `---` into four
//! ordered scene segments.

use serde::{Deserialize, Serialize};

use crate::steps::StepId;

/// Literal separator between segments of the story document.
pub const SEGMENT_SEPARATOR: &str = "---";

/// The four scene texts, in document order. Segment counts are not
/// validated: a short document leaves trailing scenes empty, and extra
/// segments are ignored, so a malformed asset misaligns silently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryText {
    pub library: String,
    pub temple: String,
    pub treasure: String,
    pub mechanism: String,
}

impl StoryText {
    /// Split the raw asset body positionally into the four scenes.
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        let mut parts = raw.split(SEGMENT_SEPARATOR);
        let mut next = || {
            parts
                .next()
                .map(|segment| segment.trim().to_string())
                .unwrap_or_default()
        };
        Self {
            library: next(),
            temple: next(),
            treasure: next(),
            mechanism: next(),
        }
    }

    /// Scene text shown alongside `step`'s message, if the step has one.
    #[must_use]
    pub fn for_step(&self, step: StepId) -> Option<&str> {
        match step {
            StepId::InitialClue => Some(&self.library),
            StepId::Decode => Some(&self.temple),
            StepId::Search => Some(&self.treasure),
            StepId::Unlock => Some(&self.mechanism),
            StepId::Open => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_segments_align_with_scenes() {
        let story = StoryText::from_text("lib\n---\ntemple\n---\nchest\n---\nlock");
        assert_eq!(story.library, "lib");
        assert_eq!(story.temple, "temple");
        assert_eq!(story.treasure, "chest");
        assert_eq!(story.mechanism, "lock");
    }

    #[test]
    fn short_documents_leave_trailing_scenes_empty() {
        let story = StoryText::from_text("only the library");
        assert_eq!(story.library, "only the library");
        assert!(story.temple.is_empty());
        assert!(story.treasure.is_empty());
        assert!(story.mechanism.is_empty());
    }

    #[test]
    fn extra_segments_are_ignored() {
        let story = StoryText::from_text("a---b---c---d---e---f");
        assert_eq!(story.mechanism, "d");
    }

    #[test]
    fn every_step_before_open_has_a_scene() {
        let story = StoryText::from_text("a---b---c---d");
        for id in [StepId::InitialClue, StepId::Decode, StepId::Search, StepId::Unlock] {
            assert!(story.for_step(id).is_some());
        }
        assert!(story.for_step(StepId::Open).is_none());
    }
}
