//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The board list is only ever replaced wholesale with a fresh server copy.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Board;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All boards with their tasks, exactly as last fetched
    pub boards: Vec<Board>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the board list with a freshly fetched one
pub fn store_replace_boards(store: &AppStore, boards: Vec<Board>) {
    *store.boards().write() = boards;
}

/// The board that hosts the task input: the first one in server order
pub fn first_board_id(boards: &[Board]) -> Option<u32> {
    boards.first().map(|board| board.id)
}
