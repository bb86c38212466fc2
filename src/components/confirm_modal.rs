//! Confirm Modal Component
//!
//! Reusable yes/no overlay used by the board and task deletion flows and by
//! board creation.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Time the overlay stays mounted after closing, for the fade-out
const CLOSE_ANIMATION_MS: u32 = 300;

/// Modal dialog with Cancel and Confirm buttons
///
/// Backdrop click, the ✕ button and Cancel all run `on_close`.
#[component]
pub fn ConfirmModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into, default = "Confirm".to_string())] confirm_text: String,
    #[prop(default = ButtonVariant::Danger)] confirm_variant: ButtonVariant,
    children: ChildrenFn,
) -> impl IntoView {
    let (show, set_show) = signal(is_open.get_untracked());
    let title = StoredValue::new(title);
    let confirm_text = StoredValue::new(confirm_text);

    Effect::new(move |_| {
        if is_open.get() {
            set_show.set(true);
        } else {
            Timeout::new(CLOSE_ANIMATION_MS, move || set_show.set(false)).forget();
        }
    });

    let overlay_class = move || {
        if is_open.get() { "modal-overlay open" } else { "modal-overlay closing" }
    };

    view! {
        <Show when=move || show.get() || is_open.get()>
            <div class=overlay_class>
                <div class="modal-backdrop" on:click=move |_| on_close.run(()) />
                <div class="modal-panel">
                    <div class="modal-header">
                        <h2 class="modal-title">{title.get_value()}</h2>
                        <button class="modal-close-btn" on:click=move |_| on_close.run(())>
                            "✕"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                    <div class="modal-actions">
                        <Button variant=ButtonVariant::Secondary on_click=move |_| on_close.run(())>
                            "Cancel"
                        </Button>
                        <Button variant=confirm_variant on_click=move |_| on_confirm.run(())>
                            {confirm_text.get_value()}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
