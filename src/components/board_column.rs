//! Board Column Component
//!
//! One board: header with task count, task list, optional inline task
//! input, and a delete confirmation. The column is also a drop target.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseenter, DndSignals};

use crate::components::{ConfirmModal, TaskCard};
use crate::context::use_app_context;
use crate::models::is_blank_input;
use crate::store::{first_board_id, AppStateStoreFields};

/// Inline input for adding a task to a board
#[component]
fn NewTaskInput(board_id: u32) -> impl IntoView {
    let ctx = use_app_context();

    let (description, set_description) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = description.get();
        if is_blank_input(&text) { return; }

        spawn_local(async move {
            match ctx.create_task(board_id, text).await {
                Ok(()) => set_description.set(String::new()),
                Err(e) => log::error!("Failed to create task: {}", e),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit" class="new-task-btn">"+"</button>
        </form>
    }
}

/// A board column, read from the store by id
#[component]
pub fn BoardColumn(board_id: u32, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let board = Memo::new(move |_| {
        store.boards().read().iter().find(|b| b.id == board_id).cloned()
    });
    let name = move || board.get().map(|b| b.name).unwrap_or_default();
    let tasks = move || board.get().map(|b| b.tasks).unwrap_or_default();
    let task_count = move || board.with(|b| b.as_ref().map_or(0, |b| b.tasks.len()));

    // Only the first board accepts new tasks
    let is_task_creatable = move || first_board_id(&store.boards().read()) == Some(board_id);

    let (modal_open, set_modal_open) = signal(false);

    let confirm_delete = move |_: ()| {
        spawn_local(async move {
            match ctx.delete_board(board_id).await {
                Ok(()) => set_modal_open.set(false),
                Err(e) => log::error!("Failed to delete board {}: {}", board_id, e),
            }
        });
    };

    let column_class = move || {
        if dnd.is_drop_target(board_id) { "board-column drop-target" } else { "board-column" }
    };

    view! {
        <div
            class=column_class
            on:mouseenter=make_on_target_mouseenter(dnd, board_id)
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <div class="board-header">
                <div class="board-title">
                    <h2>{name}</h2>
                    <span class="task-count">{task_count}</span>
                </div>
                <button
                    class="board-delete-btn"
                    title="Delete Board"
                    on:click=move |_| set_modal_open.set(true)
                >
                    "🗑"
                </button>
            </div>

            <div class="task-list">
                <For
                    each=tasks
                    key=|task| task.id
                    children=move |task| view! { <TaskCard task=task dnd=dnd /> }
                />
                <Show when=move || task_count() == 0>
                    <div class="empty-tasks">"No tasks yet"</div>
                </Show>
            </div>

            <Show when=is_task_creatable>
                <NewTaskInput board_id=board_id />
            </Show>
        </div>

        <ConfirmModal
            is_open=modal_open
            title="Delete Board"
            on_close=move |_| set_modal_open.set(false)
            on_confirm=confirm_delete
            confirm_text="Delete"
        >
            <p>
                "Are you sure you want to delete "
                <strong>{name}</strong>
                "? This will permanently remove all tasks within this board."
            </p>
        </ConfirmModal>
    }
}
