//! Confirmation modal shared by the dashboard and the layout chrome.

use leptos::prelude::*;

/// Centered dialog with an OK button and an optional Cancel button.
/// Backdrop click and Escape close it.
#[component]
pub fn Modal(
    on_ok: Callback<()>,
    on_close: Callback<()>,
    #[prop(into, default = "OK".to_owned())] ok_text: String,
    #[prop(default = true)] show_cancel: bool,
    children: Children,
) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="modal__backdrop" on:click=on_backdrop>
            <div
                class="modal"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <button class="modal__close" on:click=move |_| on_close.run(()) title="Đóng">
                    "✕"
                </button>
                <div class="modal__body">{children()}</div>
                <div class="modal__actions">
                    <Show when=move || show_cancel>
                        <button class="button button--secondary" on:click=move |_| on_close.run(())>
                            "Hủy"
                        </button>
                    </Show>
                    <button class="button button--primary" on:click=move |_| on_ok.run(())>
                        {ok_text}
                    </button>
                </div>
            </div>
        </div>
    }
}
