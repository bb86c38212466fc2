//! Application Context
//!
//! Shared state provided via Leptos Context API, plus the mutation flows.
//! Every mutation is followed by a full board refetch that replaces the store.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{NewBoard, NewTask};
use crate::moves::TaskMove;
use crate::store::{store_replace_boards, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// REST client
    api: StoredValue<ApiClient, LocalStorage>,
    /// Board list store
    pub store: AppStore,
    /// Owner of created boards and tasks
    user_id: u32,
}

impl AppContext {
    pub fn new(api: ApiClient, store: AppStore, user_id: u32) -> Self {
        Self {
            api: StoredValue::new_local(api),
            store,
            user_id,
        }
    }

    fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Refetch all boards and replace the store
    pub async fn refresh(self) -> ApiResult<()> {
        let boards = self.api().fetch_boards().await?;
        log::debug!("Loaded {} boards", boards.len());
        store_replace_boards(&self.store, boards);
        Ok(())
    }

    pub async fn create_board(self, name: String) -> ApiResult<()> {
        self.api()
            .create_board(&NewBoard { name: &name, user_id: self.user_id })
            .await?;
        log::info!("Created board {:?}", name);
        self.refresh().await
    }

    pub async fn delete_board(self, board_id: u32) -> ApiResult<()> {
        self.api().delete_board(board_id).await?;
        log::info!("Deleted board {}", board_id);
        self.refresh().await
    }

    pub async fn create_task(self, board_id: u32, description: String) -> ApiResult<()> {
        let args = NewTask {
            description: &description,
            board_id,
            user_id: self.user_id,
        };
        self.api().create_task(&args).await?;
        log::info!("Created task on board {}", board_id);
        self.refresh().await
    }

    pub async fn delete_task(self, task_id: u32) -> ApiResult<()> {
        self.api().delete_task(task_id).await?;
        log::info!("Deleted task {}", task_id);
        self.refresh().await
    }

    pub async fn move_task(self, task_move: TaskMove) -> ApiResult<()> {
        self.api().move_task(task_move.task_id, task_move.to_board).await?;
        log::info!(
            "Moved task {} from board {} to board {}",
            task_move.task_id,
            task_move.from_board,
            task_move.to_board
        );
        self.refresh().await
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
