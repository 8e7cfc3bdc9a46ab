//! Event wiring between the DOM and the expedition engine.

use wasm_bindgen::JsCast;
use web_sys::HtmlAudioElement;
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::app::page::Page;
use crate::app::state::AppState;
use crate::game::create_web_game_engine;

/// Callbacks handed down to the page components.
#[derive(Clone)]
pub struct Handlers {
    pub on_player_id: Callback<String>,
    pub on_player_name: Callback<String>,
    pub on_start: Callback<()>,
    pub on_toggle_music: Callback<()>,
    pub on_show_records: Callback<()>,
    pub on_close_records: Callback<()>,
}

pub fn build_handlers(state: &AppState) -> Handlers {
    Handlers {
        on_player_id: build_text_input(state.player_id.clone()),
        on_player_name: build_text_input(state.player_name.clone()),
        on_start: build_start(state),
        on_toggle_music: build_toggle_music(state),
        on_show_records: build_show_records(state),
        on_close_records: build_close_records(state),
    }
}

fn build_text_input(handle: UseStateHandle<String>) -> Callback<String> {
    Callback::from(move |value: String| handle.set(value))
}

fn build_start(state: &AppState) -> Callback<()> {
    #[cfg(target_arch = "wasm32")]
    {
        let state = state.clone();
        Callback::from(move |()| {
            if *state.running {
                return;
            }
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                run_expedition(state).await;
            });
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = state;
        Callback::from(|()| {})
    }
}

fn build_toggle_music(state: &AppState) -> Callback<()> {
    let audio_ref = state.audio_ref.clone();
    let playing = state.music_playing.clone();
    Callback::from(move |()| {
        let Some(audio) = audio_ref.get().and_then(|node| node.dyn_into::<HtmlAudioElement>().ok())
        else {
            return;
        };
        if *playing {
            let _ = audio.pause();
            playing.set(false);
        } else {
            audio.set_loop(true);
            let _ = audio.play();
            playing.set(true);
        }
    })
}

fn build_show_records(state: &AppState) -> Callback<()> {
    let records = state.records.clone();
    let show_records = state.show_records.clone();
    Callback::from(move |()| {
        records.set(create_web_game_engine().load_progress());
        show_records.set(true);
    })
}

fn build_close_records(state: &AppState) -> Callback<()> {
    let show_records = state.show_records.clone();
    Callback::from(move |()| show_records.set(false))
}

/// Drive one run of the chain: fetch the story, execute the steps,
/// reflect each resolution into the journal and page flow, then append
/// the run's single outcome label to the persisted history.
#[cfg(target_arch = "wasm32")]
async fn run_expedition(state: AppState) {
    use crate::app::journal;
    use crate::game::{BrowserSleeper, PlayerProfile, RunStatus, Sequencer};

    state.running.set(true);
    state.journal.set(Vec::new());
    state.page.set(Page::Start);

    let engine = create_web_game_engine();
    let profile = PlayerProfile {
        id: (*state.player_id).clone(),
        name: (*state.player_name).clone(),
    };

    let story = match engine.load_story().await {
        Ok(story) => story,
        Err(err) => {
            state.push_journal([journal::failure_entry(&err.to_string())]);
            state.page.set(Page::Fail);
            persist_outcome(&engine, &profile, crate::game::FAILURE_LABEL);
            state.running.set(false);
            return;
        }
    };

    let sequencer = Sequencer::with_entropy(BrowserSleeper);
    let run = {
        let state = state.clone();
        let story = story.clone();
        sequencer
            .run_sequence(move |outcome| {
                state.push_journal(journal::entries_for_step(outcome, &story));
                state.page.set(Page::after_step(outcome.step));
            })
            .await
    };

    if run.status() == RunStatus::Failed {
        if let Some(failure) = run.failure() {
            state.push_journal([journal::failure_entry(&failure.to_string())]);
        }
        state.page.set(Page::Fail);
    }
    if let Some(label) = run.outcome_label() {
        persist_outcome(&engine, &profile, label);
    }
    state.running.set(false);
}

#[cfg(target_arch = "wasm32")]
fn persist_outcome(
    engine: &crate::game::GameEngine<crate::game::WebStoryLoader, crate::game::WebProgressStorage>,
    profile: &crate::game::PlayerProfile,
    label: &str,
) {
    if let Err(err) = engine.record_outcome(profile, label) {
        log::error!("failed to persist game record: {err}");
    }
}
