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

//! The "request to join" form.
//!
//! Validation happens locally; a valid name goes through a simulated
//! submission delay before `on_request_sent` fires with the trimmed name.
//! Once sent, the form is replaced by a static confirmation.

use std::time::Duration;

use broadcast_room_types::name::{validate_display_name, MAX_NAME_CHARS};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::platform::time::sleep;
use yew::prelude::*;

use crate::components::icons::MicIcon;
use crate::constants::DEFAULT_SUBMIT_DELAY_MS;
use crate::context::{notify, ToastCtx, ToastVariant};

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Editing,
    Submitting,
    Sent(String),
}

#[derive(Properties, PartialEq)]
pub struct JoinRequestFormProps {
    /// Fired once, with the trimmed name, after the submission delay.
    pub on_request_sent: Callback<String>,
    #[prop_or(DEFAULT_SUBMIT_DELAY_MS)]
    pub delay_ms: u32,
    /// Rendered inside an iframe; only changes the card styling.
    #[prop_or_default]
    pub embedded: bool,
}

#[function_component(JoinRequestForm)]
pub fn join_request_form(props: &JoinRequestFormProps) -> Html {
    let toasts = use_context::<ToastCtx>();
    let name = use_state(String::new);
    let phase = use_state(|| Phase::Editing);

    let card_class = classes!("card", "join-request", props.embedded.then_some("embedded"));

    if let Phase::Sent(sent_name) = &*phase {
        return html! {
            <div class={card_class}>
                <div class="join-request-sent">
                    <div class="spinner" aria-hidden="true"></div>
                    <h3>{"Request sent"}</h3>
                    <p class="join-request-greeting">
                        { format!("Hi {sent_name}, your request to join the audio broadcast has been sent. Please wait for the admin to approve it.") }
                    </p>
                    <p class="hint">{"You will be notified once your request is approved."}</p>
                </div>
            </div>
        };
    }

    let oninput = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let phase = phase.clone();
        let on_request_sent = props.on_request_sent.clone();
        let delay = Duration::from_millis(u64::from(props.delay_ms));
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *phase != Phase::Editing {
                return;
            }
            let trimmed = match validate_display_name(&name) {
                Ok(trimmed) => trimmed,
                Err(err) => {
                    log::debug!("Join request refused: {err}");
                    notify(toasts.as_ref(), err.title(), err.description(), ToastVariant::Destructive);
                    return;
                }
            };

            phase.set(Phase::Submitting);
            let phase = phase.clone();
            let toasts = toasts.clone();
            let on_request_sent = on_request_sent.clone();
            spawn_local(async move {
                sleep(delay).await;
                phase.set(Phase::Sent(trimmed.clone()));
                on_request_sent.emit(trimmed);
                notify(
                    toasts.as_ref(),
                    "Request sent",
                    "Your request to join the audio broadcast was sent. Please wait for the admin to approve it.",
                    ToastVariant::Default,
                );
            });
        })
    };

    let submitting = *phase == Phase::Submitting;
    let can_submit = !submitting && !name.trim().is_empty();

    html! {
        <div class={card_class}>
            <div class="card-header">
                <div class="avatar avatar-blue"><MicIcon /></div>
                <h2>{"Join the audio broadcast"}</h2>
                <p class="subtitle">{"Enter your name to request a place in the shared audio broadcast"}</p>
            </div>
            <form class="join-request-form" {onsubmit}>
                <input
                    type="text"
                    class="name-input"
                    placeholder="Your name..."
                    maxlength={MAX_NAME_CHARS.to_string()}
                    value={(*name).clone()}
                    disabled={submitting}
                    {oninput}
                />
                <div class="char-counter">
                    { format!("{}/{}", name.chars().count(), MAX_NAME_CHARS) }
                </div>
                <button type="submit" class="btn btn-primary submit-request" disabled={!can_submit}>
                    if submitting {
                        <span class="spinner-inline" aria-hidden="true"></span>
                        {"Sending..."}
                    } else {
                        {"Send join request"}
                    }
                </button>
            </form>
            <p class="hint">{"Your request will be shown to the admin for approval"}</p>
        </div>
    }
}
