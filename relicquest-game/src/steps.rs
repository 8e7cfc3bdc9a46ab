//! The fixed five-step expedition chain: identities, timing, and odds.

use serde::{Deserialize, Serialize};

/// Identity of a step in the fixed expedition sequence.
///
/// Steps have no identity beyond their position in the chain; the enum
/// order is the execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    /// Find the first clue in the old library.
    InitialClue,
    /// Decode the ancient script on the clue.
    Decode,
    /// Search the temple for the chest.
    Search,
    /// Work the lock mechanism open.
    Unlock,
    /// Open the chest.
    Open,
}

impl StepId {
    /// All steps in execution order.
    pub const SEQUENCE: [Self; 5] = [
        Self::InitialClue,
        Self::Decode,
        Self::Search,
        Self::Unlock,
        Self::Open,
    ];

    /// Stable string id used in logs and persisted records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InitialClue => "initial-clue",
            Self::Decode => "decode",
            Self::Search => "search",
            Self::Unlock => "unlock",
            Self::Open => "open",
        }
    }

    /// Message produced when the step resolves.
    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::InitialClue => "You found the first clue in the ancient library...",
            Self::Decode => "Decoded! The treasure lies within an old temple...",
            Self::Search => "You found a mysterious chest...",
            Self::Unlock => "The mechanism gives way; the chest can be opened!",
            Self::Open => "Congratulations! You found the legendary treasure!",
        }
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timing and odds for one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepSpec {
    pub id: StepId,
    /// How long the step suspends before resolving.
    pub delay_ms: u32,
    /// Probability in [0, 1] that the step resolves. Steps at 1.0 never
    /// fail through the probabilistic path.
    pub success_chance: f64,
}

/// The full chain table. Injectable so tests can pin the odds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceConfig {
    pub steps: [StepSpec; 5],
}

impl SequenceConfig {
    /// The shipped chain: delays and odds of the original hunt.
    #[must_use]
    pub const fn default_config() -> Self {
        Self {
            steps: [
                StepSpec {
                    id: StepId::InitialClue,
                    delay_ms: 1000,
                    success_chance: 1.0,
                },
                StepSpec {
                    id: StepId::Decode,
                    delay_ms: 1500,
                    success_chance: 1.0,
                },
                StepSpec {
                    id: StepId::Search,
                    delay_ms: 2000,
                    success_chance: 0.7,
                },
                StepSpec {
                    id: StepId::Unlock,
                    delay_ms: 1500,
                    success_chance: 0.7,
                },
                StepSpec {
                    id: StepId::Open,
                    delay_ms: 1000,
                    success_chance: 1.0,
                },
            ],
        }
    }

    /// Look up the spec for `id`. Unknown entries fall back to an
    /// instant, always-succeeding spec rather than panicking.
    #[must_use]
    pub fn spec(&self, id: StepId) -> StepSpec {
        self.steps
            .iter()
            .find(|spec| spec.id == id)
            .copied()
            .unwrap_or(StepSpec {
                id,
                delay_ms: 0,
                success_chance: 1.0,
            })
    }

    /// Override one step's success chance (test hook).
    #[must_use]
    pub fn with_chance(mut self, id: StepId, chance: f64) -> Self {
        if let Some(spec) = self.steps.iter_mut().find(|spec| spec.id == id) {
            spec.success_chance = chance;
        }
        self
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_order_is_fixed() {
        let cfg = SequenceConfig::default_config();
        let ids: Vec<StepId> = cfg.steps.iter().map(|spec| spec.id).collect();
        assert_eq!(ids, StepId::SEQUENCE.to_vec());
    }

    #[test]
    fn default_odds_match_shipped_chain() {
        let cfg = SequenceConfig::default_config();
        assert!((cfg.spec(StepId::Search).success_chance - 0.7).abs() < f64::EPSILON);
        assert!((cfg.spec(StepId::Unlock).success_chance - 0.7).abs() < f64::EPSILON);
        for id in [StepId::InitialClue, StepId::Decode, StepId::Open] {
            assert!((cfg.spec(id).success_chance - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn with_chance_overrides_only_the_named_step() {
        let cfg = SequenceConfig::default_config().with_chance(StepId::Search, 0.0);
        assert!((cfg.spec(StepId::Search).success_chance).abs() < f64::EPSILON);
        assert!((cfg.spec(StepId::Unlock).success_chance - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn string_ids_are_stable() {
        let ids: Vec<&str> = StepId::SEQUENCE.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, ["initial-clue", "decode", "search", "unlock", "open"]);
    }
}
