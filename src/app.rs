//! Task Boards App
//!
//! Root component: page header, board creation dialog and the board list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{BoardList, Button, NewBoardModal};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(ApiClient::new(&config.api_base_url), store, config.user_id);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    let (creating_board, set_creating_board) = signal(false);

    // Load boards on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Err(e) = ctx.refresh().await {
                log::error!("Failed to fetch boards: {}", e);
            }
        });
    });

    view! {
        <div class="page">
            <header class="page-header">
                <div>
                    <h1>"Task Boards"</h1>
                    <p class="tagline">"Manage your focus with style"</p>
                </div>
                <Button extra_class="new-board-btn" on_click=move |_| set_creating_board.set(true)>
                    "+ New Board"
                </Button>
            </header>

            <NewBoardModal is_open=creating_board set_is_open=set_creating_board />

            <BoardList />
        </div>
    }
}
