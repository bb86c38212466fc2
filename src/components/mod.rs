//! UI Components
//!
//! Reusable Leptos components.

mod button;
mod confirm_modal;
mod task_card;
mod board_column;
mod board_list;
mod drag_preview;
mod new_board_modal;

pub use button::{Button, ButtonVariant};
pub use confirm_modal::ConfirmModal;
pub use task_card::{TaskCard, TaskCardBody};
pub use board_column::BoardColumn;
pub use board_list::BoardList;
pub use drag_preview::DragPreview;
pub use new_board_modal::NewBoardModal;
