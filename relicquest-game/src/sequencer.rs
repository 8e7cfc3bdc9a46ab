//! The expedition chain: five ordered asynchronous steps with a
//! first-failure short-circuit.
//!
//! A failed step settles the run immediately; later steps never start
//! and no second settlement can occur.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::StepRngs;
use crate::steps::{SequenceConfig, StepId};

/// History label appended after a run that reached the treasure.
pub const SUCCESS_LABEL: &str = "success";
/// History label appended after a run that ended early.
pub const FAILURE_LABEL: &str = "failure";

/// Why a run ended early. Each variant is a distinct, user-displayable
/// reason; none are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepFailure {
    /// `decode` received an empty clue. Independent of randomness.
    #[error("there is no clue to decode!")]
    EmptyClue,
    /// A guard interrupted the temple search.
    #[error("a temple guard blocks the way!")]
    GuardEncountered,
    /// The lock resisted.
    #[error("the mechanism is too intricate to unlock...")]
    MechanismTooComplex,
}

/// Broad classification of a failure, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A step precondition was violated.
    Precondition,
    /// A random roll came up short.
    Probabilistic,
}

impl StepFailure {
    #[must_use]
    pub const fn kind(self) -> FailureKind {
        match self {
            Self::EmptyClue => FailureKind::Precondition,
            Self::GuardEncountered | Self::MechanismTooComplex => FailureKind::Probabilistic,
        }
    }

    /// The step this failure belongs to.
    #[must_use]
    pub const fn step(self) -> StepId {
        match self {
            Self::EmptyClue => StepId::Decode,
            Self::GuardEncountered => StepId::Search,
            Self::MechanismTooComplex => StepId::Unlock,
        }
    }
}

/// Progress marker for a run. Transitions move strictly forward;
/// `Succeeded` and `Failed` are terminal. A new attempt starts over
/// from `NotStarted` with a fresh [`Run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    NotStarted,
    Step(StepId),
    Succeeded,
    Failed,
}

/// Terminal status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunStatus {
    InProgress,
    Succeeded,
    Failed,
}

/// One resolved step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub step: StepId,
    pub message: String,
}

/// Transient record of a single play-through. Discarded once its
/// outcome label has been appended to the persisted history.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    phase: RunPhase,
    outcomes: Vec<StepOutcome>,
    failure: Option<StepFailure>,
}

impl Run {
    fn new() -> Self {
        Self {
            phase: RunPhase::NotStarted,
            outcomes: Vec::new(),
            failure: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> RunPhase {
        self.phase
    }

    #[must_use]
    pub const fn status(&self) -> RunStatus {
        match self.phase {
            RunPhase::NotStarted | RunPhase::Step(_) => RunStatus::InProgress,
            RunPhase::Succeeded => RunStatus::Succeeded,
            RunPhase::Failed => RunStatus::Failed,
        }
    }

    /// Steps resolved so far, in execution order.
    #[must_use]
    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub const fn failure(&self) -> Option<StepFailure> {
        self.failure
    }

    /// History label contributed by this run: exactly one per completed
    /// run, none while it is still in progress.
    #[must_use]
    pub const fn outcome_label(&self) -> Option<&'static str> {
        match self.phase {
            RunPhase::Succeeded => Some(SUCCESS_LABEL),
            RunPhase::Failed => Some(FAILURE_LABEL),
            RunPhase::NotStarted | RunPhase::Step(_) => None,
        }
    }

    fn begin(&mut self, step: StepId) {
        debug_assert!(
            matches!(self.phase, RunPhase::NotStarted | RunPhase::Step(_)),
            "terminal runs cannot advance"
        );
        self.phase = RunPhase::Step(step);
    }

    fn record(&mut self, outcome: StepOutcome) {
        self.outcomes.push(outcome);
    }

    fn fail(&mut self, failure: StepFailure) {
        self.failure = Some(failure);
        self.phase = RunPhase::Failed;
    }

    fn finish(&mut self) {
        self.phase = RunPhase::Succeeded;
    }
}

/// Platform delay source. Browser implementations schedule a timer so
/// the UI stays responsive between steps; tests resolve immediately.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep_ms(&self, ms: u32);
}

/// Sleeper that never suspends.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSleeper;

#[async_trait(?Send)]
impl Sleeper for NoopSleeper {
    async fn sleep_ms(&self, _ms: u32) {}
}

/// Executes the fixed chain. Steps run strictly in sequence within one
/// logical flow; nothing here guards against a second concurrent run,
/// so callers disable the trigger while a run is active.
pub struct Sequencer<S: Sleeper> {
    cfg: SequenceConfig,
    rngs: StepRngs,
    sleeper: S,
}

impl<S: Sleeper> Sequencer<S> {
    pub const fn new(cfg: SequenceConfig, rngs: StepRngs, sleeper: S) -> Self {
        Self { cfg, rngs, sleeper }
    }

    /// Shipped chain with OS-entropy odds.
    #[must_use]
    pub fn with_entropy(sleeper: S) -> Self {
        Self::new(SequenceConfig::default_config(), StepRngs::from_entropy(), sleeper)
    }

    /// Run the chain start to finish, invoking `on_step` after each
    /// resolved step so a presentation layer can react between delays.
    /// Stops at the first failure; later steps never execute.
    pub async fn run_sequence<F>(&self, mut on_step: F) -> Run
    where
        F: FnMut(&StepOutcome),
    {
        let mut run = Run::new();
        let mut carried: Option<String> = None;

        for id in StepId::SEQUENCE {
            run.begin(id);
            match self.attempt_step(id, carried.as_deref()).await {
                Ok(message) => {
                    log::debug!("step {id} resolved");
                    let outcome = StepOutcome { step: id, message };
                    on_step(&outcome);
                    carried = Some(outcome.message.clone());
                    run.record(outcome);
                }
                Err(failure) => {
                    log::debug!("step {id} failed: {failure}");
                    run.fail(failure);
                    return run;
                }
            }
        }

        run.finish();
        run
    }

    /// Execute a single step: suspend for its delay, check its
    /// precondition, then roll its odds. `input` is the previous step's
    /// message; only `decode` inspects it.
    pub async fn attempt_step(
        &self,
        id: StepId,
        input: Option<&str>,
    ) -> Result<String, StepFailure> {
        let spec = self.cfg.spec(id);
        self.sleeper.sleep_ms(spec.delay_ms).await;

        if id == StepId::Decode && input.is_none_or(str::is_empty) {
            return Err(StepFailure::EmptyClue);
        }

        if let Some(reason) = Self::probabilistic_failure(id) {
            if !self.rngs.roll(id, spec.success_chance) {
                return Err(reason);
            }
        }

        Ok(id.success_message().to_string())
    }

    const fn probabilistic_failure(id: StepId) -> Option<StepFailure> {
        match id {
            StepId::Search => Some(StepFailure::GuardEncountered),
            StepId::Unlock => Some(StepFailure::MechanismTooComplex),
            StepId::InitialClue | StepId::Decode | StepId::Open => None,
        }
    }
}
