//! Feature selector component.
//!
//! One card per backend operation; clicking a card makes it the active
//! mode for the next upload.

use leptos::*;

use crate::types::Mode;

#[component]
pub fn FeatureCards(mode: ReadSignal<Mode>, set_mode: WriteSignal<Mode>) -> impl IntoView {
    view! {
        <div class="features-section">
            <For
                each=move || Mode::ALL
                key=|m| m.endpoint()
                children=move |m: Mode| {
                    view! {
                        <div
                            class="feature-option"
                            class:selected=move || mode.get() == m
                            on:click=move |_| set_mode.set(m)
                        >
                            <h3>{m.title()}</h3>
                            <p>{m.description()}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
