use yew::prelude::*;

use crate::app::handlers::Handlers;
use crate::app::page::Page;
use crate::app::state::AppState;
use crate::pages::records::RecordsModal;
use crate::pages::scene::{Journal, ScenePanel};
use crate::pages::start::StartForm;

pub fn render_app(state: &AppState, handlers: &Handlers) -> Html {
    let active = *state.page;
    html! {
        <div class="app-shell">
            <header class="toolbar">
                <button
                    id="music-control"
                    onclick={to_unit(&handlers.on_toggle_music)}
                >
                    { if *state.music_playing { "Pause Music" } else { "Play Music" } }
                </button>
                <button
                    id="show-info-button"
                    onclick={to_unit(&handlers.on_show_records)}
                >
                    { "Player Info" }
                </button>
            </header>

            <audio ref={state.audio_ref.clone()} src="audio/background.mp3" />

            { for Page::ALL.iter().map(|&page| html! {
                <ScenePanel page={page} active={page == active}>
                    { (page == Page::Start).then(|| html! {
                        <StartForm
                            player_id={(*state.player_id).clone()}
                            player_name={(*state.player_name).clone()}
                            running={*state.running}
                            on_player_id={handlers.on_player_id.clone()}
                            on_player_name={handlers.on_player_name.clone()}
                            on_start={handlers.on_start.clone()}
                        />
                    }).unwrap_or_default() }
                </ScenePanel>
            }) }

            <Journal entries={(*state.journal).clone()} />

            <RecordsModal
                open={*state.show_records}
                record={(*state.records).clone()}
                on_close={handlers.on_close_records.clone()}
            />
        </div>
    }
}

fn to_unit(callback: &Callback<()>) -> Callback<MouseEvent> {
    let callback = callback.clone();
    Callback::from(move |_event: MouseEvent| callback.emit(()))
}
