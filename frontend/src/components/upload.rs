//! Image upload component.
//!
//! Owns the page's request cycle: file selection and client-side type
//! filtering, preview lifecycle, precondition checks, the backend call,
//! and rendering of the resolved status, error, transaction link and
//! validation report.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, Url};

use crate::config::{is_supported_image_type, IMAGE_ACCEPT_FILTER};
use crate::outcome::{explorer_tx_url, interpret, popup_for, truncate_hash, Outcome};
use crate::services::api::upload_image;
use crate::types::{Mode, Popup};

#[component]
pub fn UploadSection(
    mode: ReadSignal<Mode>,
    wallet_address: ReadSignal<Option<String>>,
    set_popup: WriteSignal<Option<Popup>>,
) -> impl IntoView {
    let (selected_file, set_selected_file) = create_signal(None::<web_sys::File>);
    let (preview_url, set_preview_url) = create_signal(None::<String>);
    let (status, set_status) = create_signal(None::<String>);
    let (error, set_error) = create_signal(None::<String>);
    let (is_loading, set_is_loading) = create_signal(false);
    let (trx_hash, set_trx_hash) = create_signal(None::<String>);
    let (validation, set_validation) = create_signal(None::<serde_json::Value>);

    // The preview URL holds browser resources; release it when the page
    // goes away.
    on_cleanup(move || {
        if let Some(url) = preview_url.try_get_untracked().flatten() {
            let _ = Url::revoke_object_url(&url);
        }
    });

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let mime = file.type_();
        if !is_supported_image_type(&mime) {
            log::warn!("Rejected file {} with type {:?}", file.name(), mime);
            set_error.set(Some(format!(
                "Unsupported file type {:?}. Please select a JPEG or PNG image.",
                mime
            )));
            return;
        }

        // Only one preview may be alive at a time.
        if let Some(old) = preview_url.get_untracked() {
            let _ = Url::revoke_object_url(&old);
        }
        match Url::create_object_url_with_blob(&file) {
            Ok(url) => set_preview_url.set(Some(url)),
            Err(e) => log::warn!("Failed to create preview URL: {:?}", e),
        }

        set_selected_file.set(Some(file));
        set_status.set(None);
        set_error.set(None);
        set_trx_hash.set(None);
        set_validation.set(None);
    };

    let trigger_file_input = move |_| {
        if let Some(input) = gloo_utils::document().get_element_by_id("fileInput") {
            if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                html_input.click();
            }
        }
    };

    let on_submit = move |_| {
        if is_loading.get_untracked() {
            return;
        }

        let Some(file) = selected_file.get_untracked() else {
            set_error.set(Some("Please select an image first".to_string()));
            return;
        };

        let current_mode = mode.get_untracked();
        if current_mode.requires_wallet() && wallet_address.get_untracked().is_none() {
            set_error.set(Some("Please connect your wallet first".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_status.set(Some("Processing...".to_string()));
        set_error.set(None);
        set_trx_hash.set(None);
        set_validation.set(None);

        spawn_local(async move {
            match upload_image(current_mode, &file).await {
                Ok(response) => {
                    let outcome = interpret(current_mode, &response);
                    set_popup.set(Some(popup_for(current_mode, &outcome)));
                    match outcome {
                        Outcome::Accepted { status, trx_hash } => {
                            log::info!("✅ {} accepted: {}", current_mode, status);
                            set_status.set(Some(status));
                            set_trx_hash.set(trx_hash);
                            if current_mode == Mode::Check {
                                set_validation.set(response.validation);
                            }
                        }
                        Outcome::Rejected { error } => {
                            log::warn!("❌ {} rejected: {}", current_mode, error);
                            set_status.set(None);
                            set_error.set(Some(error));
                        }
                    }
                }
                Err(e) => {
                    let message = e.to_string();
                    log::error!("❌ {} request failed: {}", current_mode, message);
                    set_status.set(None);
                    set_error.set(Some(message.clone()));
                    set_popup.set(Some(Popup::error(message)));
                }
            }

            set_is_loading.set(false);
        });
    };

    view! {
        <div class="upload-section">
            <div class="drop-zone" on:click=trigger_file_input>
                <Show
                    when=move || preview_url.get().is_some()
                    fallback=|| view! {
                        <i class="upload-icon">"📁"</i>
                        <p>"Click or drag and drop your image here"</p>
                    }
                >
                    <img
                        class="image-preview"
                        alt="Preview"
                        src=move || preview_url.get().unwrap_or_default()
                    />
                </Show>

                <input
                    type="file"
                    id="fileInput"
                    accept=IMAGE_ACCEPT_FILTER
                    style="display:none"
                    on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                    on:change=on_file_change
                />
            </div>

            <button
                class="upload-button"
                on:click=on_submit
                disabled=move || is_loading.get()
            >
                {move || if is_loading.get() {
                    "Processing...".to_string()
                } else {
                    mode.get().action_label().to_string()
                }}
            </button>

            <Show
                when=move || status.get().is_some()
                fallback=|| view! { }
            >
                <div class="status-message">
                    {move || status.get().unwrap_or_default()}
                    {move || trx_hash.get().map(|hash| {
                        let href = explorer_tx_url(&hash);
                        let label = truncate_hash(&hash);
                        view! {
                            <span class="tx-ref">
                                " Transaction: "
                                <a href=href target="_blank" rel="noopener noreferrer">{label}</a>
                            </span>
                        }
                    })}
                </div>
            </Show>

            <Show
                when=move || validation.get().is_some()
                fallback=|| view! { }
            >
                <ul class="validation-report">
                    {move || {
                        validation.get()
                            .and_then(|report| report.as_object().cloned())
                            .map(|props| {
                                props.iter().map(|(key, value)| {
                                    let rendered = match value {
                                        serde_json::Value::String(s) => s.clone(),
                                        other => other.to_string(),
                                    };
                                    view! {
                                        <li>
                                            <span class="prop-name">{key.clone()}</span>
                                            ": "
                                            {rendered}
                                        </li>
                                    }
                                }).collect_view()
                            })
                    }}
                </ul>
            </Show>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}
