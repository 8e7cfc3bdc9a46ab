//! Web-specific implementations of the relicquest-game platform traits:
//! story loading over fetch, progress persistence in `localStorage`, and
//! a `setTimeout`-backed sleeper.

use async_trait::async_trait;
use wasm_bindgen_futures::JsFuture;

use crate::dom;

// Re-export all types from relicquest-game
pub use relicquest_game::*;

/// URL of the story asset, relative to the page.
pub const STORY_URL: &str = "story.txt";

/// `localStorage` key for the raw player id.
pub const PLAYER_ID_KEY: &str = "playerId";
/// `localStorage` key for the raw player display name.
pub const PLAYER_NAME_KEY: &str = "playerName";
/// `localStorage` key for the JSON history array.
pub const GAME_RECORD_KEY: &str = "gameRecord";

/// Story loader that fetches the text asset at run start.
pub struct WebStoryLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebStoryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("story request failed with status {0}")]
    Status(u16),
}

#[async_trait(?Send)]
impl StoryLoader for WebStoryLoader {
    type Error = WebStoryError;

    async fn load_story(&self) -> Result<StoryText, Self::Error> {
        let network = |err| WebStoryError::Network(dom::js_error_message(&err));
        let response = dom::fetch_response(STORY_URL).await.map_err(network)?;
        if !response.ok() {
            return Err(WebStoryError::Status(response.status()));
        }
        let body = response.text().map_err(network)?;
        let text = JsFuture::from(body).await.map_err(network)?;
        Ok(StoryText::from_text(&text.as_string().unwrap_or_default()))
    }
}

/// Progress store backed by `localStorage`, scoped to the browser
/// origin. Values are written raw; the history is a JSON string array.
pub struct WebProgressStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("storage error: {0}")]
    Storage(String),
}

impl WebStorageError {
    fn from_js(value: wasm_bindgen::JsValue) -> Self {
        Self::Storage(dom::js_error_message(&value))
    }
}

impl ProgressStorage for WebProgressStorage {
    type Error = WebStorageError;

    fn save_progress(&self, record: &ProgressRecord) -> Result<(), Self::Error> {
        let storage = dom::local_storage().map_err(WebStorageError::from_js)?;
        storage
            .set_item(PLAYER_ID_KEY, record.player_id.as_deref().unwrap_or_default())
            .map_err(WebStorageError::from_js)?;
        storage
            .set_item(
                PLAYER_NAME_KEY,
                record.player_name.as_deref().unwrap_or_default(),
            )
            .map_err(WebStorageError::from_js)?;
        storage
            .set_item(GAME_RECORD_KEY, &encode_history(&record.history))
            .map_err(WebStorageError::from_js)
    }

    fn load_progress(&self) -> ProgressRecord {
        let Ok(storage) = dom::local_storage() else {
            return ProgressRecord::default();
        };
        let read = |key: &str| storage.get_item(key).ok().flatten();
        ProgressRecord {
            player_id: read(PLAYER_ID_KEY),
            player_name: read(PLAYER_NAME_KEY),
            history: decode_history(read(GAME_RECORD_KEY).as_deref()),
        }
    }
}

/// Sleeper backed by `setTimeout`, keeping the UI responsive between
/// steps.
pub struct BrowserSleeper;

#[async_trait(?Send)]
impl Sleeper for BrowserSleeper {
    async fn sleep_ms(&self, ms: u32) {
        let duration = i32::try_from(ms).unwrap_or(i32::MAX);
        if let Err(err) = dom::sleep_ms(duration).await {
            dom::console_error(&format!(
                "timer failed: {}",
                dom::js_error_message(&err)
            ));
        }
    }
}

/// Create a web-compatible game engine with `WebStoryLoader` and
/// `WebProgressStorage`.
#[must_use]
pub fn create_web_game_engine() -> GameEngine<WebStoryLoader, WebProgressStorage> {
    GameEngine::new(WebStoryLoader, WebProgressStorage)
}
