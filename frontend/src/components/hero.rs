//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Blockchain Image Processor"</h1>
            <p class="subtitle">
                "Upload, verify, and validate your images with blockchain technology"
            </p>
        </div>
    }
}
