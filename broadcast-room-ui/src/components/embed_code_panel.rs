/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Embed tab: a preview of the join button and the iframe snippet that
//! puts the request form on another site.

use broadcast_room_types::embed_code::{embed_code, EmbedSize, EMBED_PATH};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::icons::{CloseIcon, MicIcon};
use crate::components::join_request_form::JoinRequestForm;
use crate::constants::submit_delay_ms;
use crate::context::{notify, ToastCtx, ToastVariant};

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[function_component(EmbedCodePanel)]
pub fn embed_code_panel() -> Html {
    let toasts = use_context::<ToastCtx>();
    let size = use_state(EmbedSize::default);
    let show_modal = use_state(|| false);

    let code = embed_code(&page_origin(), *size);

    let on_size_change = {
        let size = size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(next) = EmbedSize::from_key(&select.value()) {
                size.set(next);
            }
        })
    };

    let on_copy = {
        let code = code.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(clipboard) = web_sys::window().map(|w| w.navigator().clipboard()) else {
                return;
            };
            let promise = clipboard.write_text(&code);
            let toasts = toasts.clone();
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => notify(
                        toasts.as_ref(),
                        "Copied",
                        "The embed code was copied to the clipboard",
                        ToastVariant::Default,
                    ),
                    Err(e) => {
                        log::warn!("Clipboard write failed: {e:?}");
                        notify(
                            toasts.as_ref(),
                            "Copy failed",
                            "Select the code and copy it manually",
                            ToastVariant::Destructive,
                        );
                    }
                }
            });
        })
    };

    let on_preview = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(EMBED_PATH, "_blank") {
                log::warn!("Failed to open embed preview: {e:?}");
            }
        }
    });

    let open_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: MouseEvent| show_modal.set(true))
    };
    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: MouseEvent| show_modal.set(false))
    };
    let on_request_sent = Callback::from(|name: String| {
        log::info!("Join request from embedded widget: {name}");
    });

    html! {
        <div class="embed-code-panel">
            <div class="card join-cta">
                <div class="avatar avatar-light"><MicIcon /></div>
                <h2>{"Join the audio broadcast"}</h2>
                <p>{"Take part in the voice conversation with others"}</p>
                <button class="btn btn-light open-join-modal" onclick={open_modal}>
                    <MicIcon />{"Request to join"}
                </button>
            </div>

            if *show_modal {
                <div class="glass-backdrop join-modal" role="dialog" aria-modal="true">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h3>{"Request to join the broadcast"}</h3>
                            <button class="btn-icon close-join-modal" aria-label="Close" onclick={close_modal}>
                                <CloseIcon />
                            </button>
                        </div>
                        <JoinRequestForm
                            {on_request_sent}
                            delay_ms={submit_delay_ms()}
                            embedded=true
                        />
                    </div>
                </div>
            }

            <div class="card embed-code">
                <h2>{"Embed code"}</h2>
                <p>{"Add the broadcast join button to your website with the following code:"}</p>
                <label class="embed-size">
                    {"Size"}
                    <select onchange={on_size_change}>
                        { for EmbedSize::ALL.iter().map(|s| {
                            let (w, h) = s.dimensions();
                            html! {
                                <option value={s.key()} selected={*s == *size}>
                                    { format!("{} ({w}×{h})", s.label()) }
                                </option>
                            }
                        }) }
                    </select>
                </label>
                <textarea class="embed-code-text" readonly=true rows="6" value={code} />
                <div class="embed-actions">
                    <button class="btn btn-outline copy-code" onclick={on_copy}>{"Copy code"}</button>
                    <button class="btn btn-outline preview-embed" onclick={on_preview}>{"Preview"}</button>
                </div>
                <div class="embed-guide">
                    <h4>{"Embedding guide:"}</h4>
                    <ul>
                        <li>{"Pick the width and height that fit your page"}</li>
                        <li>{"Visitors will see the request-to-join form"}</li>
                        <li>{"Requests show up in the admin panel for approval"}</li>
                        <li>{"The widget works on any website"}</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
