//! Task Endpoints

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{MoveTask, NewTask};

// Mutation responses are never decoded: any 2xx counts, and the caller
// refetches the board list for the authoritative state.
impl ApiClient {
    pub async fn create_task(&self, task: &NewTask<'_>) -> ApiResult<()> {
        let url = self.tasks_url();
        self.execute(self.http.post(&url).json(task), "POST", &url).await?;
        Ok(())
    }

    /// Reassign a task to another board
    pub async fn move_task(&self, id: u32, board_id: u32) -> ApiResult<()> {
        let url = self.task_url(id);
        let body = MoveTask { board_id };
        self.execute(self.http.put(&url).json(&body), "PUT", &url).await?;
        Ok(())
    }

    pub async fn delete_task(&self, id: u32) -> ApiResult<()> {
        let url = self.task_url(id);
        self.execute(self.http.delete(&url), "DELETE", &url).await?;
        Ok(())
    }
}
