//! Drag-and-Drop Move Resolution
//!
//! Decides what a drop means given the last fetched board list.

use crate::models::{Board, Task};

/// Board reassignment produced by a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskMove {
    pub task_id: u32,
    pub from_board: u32,
    pub to_board: u32,
}

/// Look up a task anywhere in the board list
pub fn find_task(boards: &[Board], task_id: u32) -> Option<&Task> {
    boards
        .iter()
        .flat_map(|board| board.tasks.iter())
        .find(|task| task.id == task_id)
}

/// Resolve a drop of `task_id` onto `target_board`
///
/// Returns `None` when the task is unknown or already on that board.
pub fn resolve_drop(boards: &[Board], task_id: u32, target_board: u32) -> Option<TaskMove> {
    let task = find_task(boards, task_id)?;
    if task.board_id == target_board {
        return None;
    }
    Some(TaskMove {
        task_id,
        from_board: task.board_id,
        to_board: target_board,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_task(id: u32, board_id: u32) -> Task {
        Task {
            id,
            description: format!("Task {}", id),
            board_id,
            user_id: 1,
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap()),
        }
    }

    fn make_board(id: u32, tasks: Vec<Task>) -> Board {
        Board {
            id,
            name: format!("Board {}", id),
            user_id: 1,
            tasks,
        }
    }

    fn boards() -> Vec<Board> {
        vec![
            make_board(1, vec![make_task(10, 1), make_task(11, 1)]),
            make_board(2, vec![make_task(20, 2)]),
            make_board(3, vec![]),
        ]
    }

    #[test]
    fn test_find_task() {
        let boards = boards();
        assert_eq!(find_task(&boards, 20).map(|t| t.board_id), Some(2));
        assert!(find_task(&boards, 99).is_none());
    }

    #[test]
    fn test_drop_on_own_board_is_noop() {
        assert_eq!(resolve_drop(&boards(), 11, 1), None);
    }

    #[test]
    fn test_drop_on_other_board_moves() {
        assert_eq!(
            resolve_drop(&boards(), 11, 3),
            Some(TaskMove { task_id: 11, from_board: 1, to_board: 3 })
        );
    }

    #[test]
    fn test_drop_of_unknown_task() {
        assert_eq!(resolve_drop(&boards(), 42, 2), None);
    }
}
