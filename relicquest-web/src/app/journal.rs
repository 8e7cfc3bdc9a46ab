//! The on-screen message journal: which lines appear after each step,
//! and how persisted records are rendered.

use relicquest_game::{StepId, StepOutcome, StoryText};

/// One line in the journal region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub text: String,
    pub error: bool,
}

impl LogEntry {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: false,
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: true,
        }
    }
}

/// Journal lines produced by one resolved step: the step message
/// interleaved with its scene text. Scene text leads into the library
/// and mechanism reveals and trails the others; the final step has no
/// scene of its own.
#[must_use]
pub fn entries_for_step(outcome: &StepOutcome, story: &StoryText) -> Vec<LogEntry> {
    let scene = story.for_step(outcome.step).map(LogEntry::info);
    let message = LogEntry::info(outcome.message.clone());
    match (outcome.step, scene) {
        (StepId::InitialClue | StepId::Unlock, Some(scene)) => vec![scene, message],
        (_, Some(scene)) => vec![message, scene],
        (_, None) => vec![message],
    }
}

/// Journal line for a terminal failure.
#[must_use]
pub fn failure_entry(reason: &str) -> LogEntry {
    LogEntry::error(format!("Quest failed: {reason}"))
}

/// One row of the player-info record list.
#[must_use]
pub fn record_line(index: usize, label: &str) -> String {
    format!("Game {}: {}", index + 1, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story() -> StoryText {
        StoryText::from_text("lib---temple---chest---lock")
    }

    fn outcome(step: StepId) -> StepOutcome {
        StepOutcome {
            step,
            message: step.success_message().to_string(),
        }
    }

    #[test]
    fn scene_text_leads_the_library_reveal() {
        let entries = entries_for_step(&outcome(StepId::InitialClue), &story());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "lib");
        assert_eq!(entries[1].text, StepId::InitialClue.success_message());
    }

    #[test]
    fn scene_text_trails_the_decode_reveal() {
        let entries = entries_for_step(&outcome(StepId::Decode), &story());
        assert_eq!(entries[0].text, StepId::Decode.success_message());
        assert_eq!(entries[1].text, "temple");
    }

    #[test]
    fn final_step_logs_only_its_message() {
        let entries = entries_for_step(&outcome(StepId::Open), &story());
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].error);
    }

    #[test]
    fn failure_entries_are_marked() {
        let entry = failure_entry("a temple guard blocks the way!");
        assert!(entry.error);
        assert!(entry.text.contains("guard"));
    }

    #[test]
    fn record_lines_are_one_indexed() {
        assert_eq!(record_line(0, "success"), "Game 1: success");
        assert_eq!(record_line(4, "failure"), "Game 5: failure");
    }
}
