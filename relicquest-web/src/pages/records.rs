use relicquest_game::ProgressRecord;
use yew::prelude::*;

use crate::app::journal::record_line;

/// Player-info window: identity plus the numbered win/loss history.
#[derive(Properties, Clone, PartialEq)]
pub struct RecordsModalProps {
    pub open: bool,
    pub record: ProgressRecord,
    pub on_close: Callback<()>,
}

#[function_component(RecordsModal)]
pub fn records_modal(props: &RecordsModalProps) -> Html {
    if !props.open {
        return Html::default();
    }
    let on_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_event: MouseEvent| on_close.emit(()))
    };
    let player_id = props.record.player_id.clone().unwrap_or_default();
    let player_name = props.record.player_name.clone().unwrap_or_default();

    html! {
        <div id="info-window" class="modal">
            <p id="player-id-display">{ format!("Player ID: {player_id}") }</p>
            <p id="player-name-display">{ format!("Player Name: {player_name}") }</p>
            <ol id="game-record-list">
                { for props.record.history.iter().enumerate().map(|(index, label)| html! {
                    <li>{ record_line(index, label) }</li>
                }) }
            </ol>
            <button id="close-info-button" onclick={on_click}>{ "Close" }</button>
        </div>
    }
}
