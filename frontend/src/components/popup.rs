//! Popup notification component.
//!
//! Non-blocking overlay raised whenever a request resolves. Dismisses on
//! click or after [`POPUP_DISMISS_MS`].

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::POPUP_DISMISS_MS;
use crate::types::Popup;

#[component]
pub fn PopupNotice(
    popup: ReadSignal<Option<Popup>>,
    set_popup: WriteSignal<Option<Popup>>,
) -> impl IntoView {
    // Auto-dismiss; a newer popup wins over a stale timer.
    create_effect(move |_| {
        let Some(current) = popup.get() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(POPUP_DISMISS_MS).await;
            set_popup.update(|p| {
                if p.as_ref() == Some(&current) {
                    *p = None;
                }
            });
        });
    });

    view! {
        <Show
            when=move || popup.get().is_some()
            fallback=|| view! { }
        >
            <div class=move || {
                let kind_class = popup.get().map(|p| p.kind.css_class()).unwrap_or_default();
                format!("popup {}", kind_class)
            }>
                <span class="popup-message">
                    {move || popup.get().map(|p| format!("{} {}", p.kind.emoji(), p.message)).unwrap_or_default()}
                </span>
                <button class="popup-close" on:click=move |_| set_popup.set(None)>
                    "×"
                </button>
            </div>
        </Show>
    }
}
