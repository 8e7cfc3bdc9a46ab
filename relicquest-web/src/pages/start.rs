use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Identity form and run trigger. The inputs are stored raw; nothing is
/// validated before persistence.
#[derive(Properties, Clone, PartialEq)]
pub struct StartFormProps {
    pub player_id: AttrValue,
    pub player_name: AttrValue,
    /// Disables the trigger while a run is active.
    pub running: bool,
    pub on_player_id: Callback<String>,
    pub on_player_name: Callback<String>,
    pub on_start: Callback<()>,
}

#[function_component(StartForm)]
pub fn start_form(props: &StartFormProps) -> Html {
    let on_id_input = text_input_callback(props.on_player_id.clone());
    let on_name_input = text_input_callback(props.on_player_name.clone());
    let on_click = {
        let on_start = props.on_start.clone();
        Callback::from(move |_event: MouseEvent| on_start.emit(()))
    };

    html! {
        <div class="start-form">
            <label for="playerId">{ "Player ID" }</label>
            <input
                id="playerId"
                type="text"
                value={props.player_id.clone()}
                oninput={on_id_input}
            />
            <label for="playerName">{ "Player Name" }</label>
            <input
                id="playerName"
                type="text"
                value={props.player_name.clone()}
                oninput={on_name_input}
            />
            <button
                id="start-button"
                disabled={props.running}
                onclick={on_click}
            >
                { "Begin the Hunt" }
            </button>
        </div>
    }
}

fn text_input_callback(target: Callback<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        let value = event.target_unchecked_into::<HtmlInputElement>().value();
        target.emit(value);
    })
}
