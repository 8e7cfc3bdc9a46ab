use relicquest_game::ProgressRecord;
use yew::prelude::*;

use crate::app::journal::LogEntry;
use crate::app::page::Page;

#[derive(Clone)]
pub struct AppState {
    pub page: UseStateHandle<Page>,
    pub journal: UseStateHandle<Vec<LogEntry>>,
    pub player_id: UseStateHandle<String>,
    pub player_name: UseStateHandle<String>,
    /// The trigger is disabled while a run is active; the sequencer has
    /// no internal mutual exclusion.
    pub running: UseStateHandle<bool>,
    pub show_records: UseStateHandle<bool>,
    pub records: UseStateHandle<ProgressRecord>,
    pub music_playing: UseStateHandle<bool>,
    pub audio_ref: NodeRef,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        page: use_state(|| Page::Start),
        journal: use_state(Vec::<LogEntry>::new),
        player_id: use_state(String::new),
        player_name: use_state(String::new),
        running: use_state(|| false),
        show_records: use_state(|| false),
        records: use_state(ProgressRecord::default),
        music_playing: use_state(|| false),
        audio_ref: NodeRef::default(),
    }
}

impl AppState {
    /// Append entries to the journal in one state update.
    pub fn push_journal(&self, entries: impl IntoIterator<Item = LogEntry>) {
        let mut lines = (*self.journal).clone();
        lines.extend(entries);
        self.journal.set(lines);
    }
}
