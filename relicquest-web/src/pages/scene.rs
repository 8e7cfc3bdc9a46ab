use yew::prelude::*;

use crate::app::journal::LogEntry;
use crate::app::page::Page;

/// One scene section. Exactly one panel carries the `active` class at a
/// time; the others stay in the document but hidden.
#[derive(Properties, Clone, PartialEq)]
pub struct ScenePanelProps {
    pub page: Page,
    pub active: bool,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ScenePanel)]
pub fn scene_panel(props: &ScenePanelProps) -> Html {
    let class = if props.active { "page active" } else { "page" };
    html! {
        <section id={props.page.dom_id()} class={class}>
            <h2>{ props.page.title() }</h2>
            { props.children.clone() }
        </section>
    }
}

/// The running message log beneath the scene panels.
#[derive(Properties, Clone, PartialEq)]
pub struct JournalProps {
    pub entries: Vec<LogEntry>,
}

#[function_component(Journal)]
pub fn journal(props: &JournalProps) -> Html {
    html! {
        <div id="messages" class="journal">
            { for props.entries.iter().map(|entry| {
                let class = entry.error.then_some("error");
                html! { <p class={class}>{ entry.text.clone() }</p> }
            }) }
        </div>
    }
}
