//! Board Endpoints

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{Board, NewBoard};

impl ApiClient {
    /// All boards with their tasks embedded
    pub async fn fetch_boards(&self) -> ApiResult<Vec<Board>> {
        let url = self.boards_url();
        self.fetch_data(self.http.get(&url), "GET", &url).await
    }

    /// Create a board; the response body is not read, callers refetch
    pub async fn create_board(&self, board: &NewBoard<'_>) -> ApiResult<()> {
        let url = self.boards_url();
        self.execute(self.http.post(&url).json(board), "POST", &url).await?;
        Ok(())
    }

    /// Delete a board; the server removes its tasks too
    pub async fn delete_board(&self, id: u32) -> ApiResult<()> {
        let url = self.board_url(id);
        self.execute(self.http.delete(&url), "DELETE", &url).await?;
        Ok(())
    }
}
