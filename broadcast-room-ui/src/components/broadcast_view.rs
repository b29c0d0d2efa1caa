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

//! The room itself: a fixed grid of participant slots and the local
//! microphone toggle.

use broadcast_room_types::MAX_ACTIVE_PARTICIPANTS;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::icons::{MicIcon, MicOffIcon};
use crate::context::{notify, RosterCtx, ToastCtx, ToastVariant};
use crate::model::MicrophoneCapture;

#[derive(Debug, Clone, Copy, PartialEq)]
enum MicState {
    Idle,
    Starting,
    Recording,
}

#[derive(Properties, PartialEq)]
pub struct BroadcastViewProps {
    #[prop_or_default]
    pub is_admin: bool,
    #[prop_or_default]
    pub on_admin_click: Callback<()>,
}

#[function_component(BroadcastView)]
pub fn broadcast_view(props: &BroadcastViewProps) -> Html {
    let roster = use_context::<RosterCtx>();
    let toasts = use_context::<ToastCtx>();
    let capture = use_mut_ref(|| None::<MicrophoneCapture>);
    let mic_state = use_state(|| MicState::Idle);

    let participants: Vec<String> = roster
        .as_ref()
        .map(|r| {
            r.roster
                .partitions()
                .approved
                .iter()
                .map(|req| req.name.clone())
                .collect()
        })
        .unwrap_or_default();

    let on_toggle = {
        let capture = capture.clone();
        let mic_state = mic_state.clone();
        Callback::from(move |_: MouseEvent| match *mic_state {
            MicState::Starting => {}
            MicState::Recording => {
                if let Some(active) = capture.borrow_mut().take() {
                    active.stop();
                }
                mic_state.set(MicState::Idle);
                notify(
                    toasts.as_ref(),
                    "Broadcast stopped",
                    "You left the shared audio broadcast",
                    ToastVariant::Default,
                );
            }
            MicState::Idle => {
                mic_state.set(MicState::Starting);
                let capture = capture.clone();
                let mic_state = mic_state.clone();
                let toasts = toasts.clone();
                spawn_local(async move {
                    match MicrophoneCapture::start().await {
                        Ok(active) => {
                            *capture.borrow_mut() = Some(active);
                            mic_state.set(MicState::Recording);
                            notify(
                                toasts.as_ref(),
                                "Broadcast started",
                                "You are now connected to the shared audio broadcast",
                                ToastVariant::Default,
                            );
                        }
                        Err(e) => {
                            log::warn!("{e}");
                            mic_state.set(MicState::Idle);
                            notify(
                                toasts.as_ref(),
                                "Microphone error",
                                "Make sure microphone access is allowed",
                                ToastVariant::Destructive,
                            );
                        }
                    }
                });
            }
        })
    };

    let on_admin_click = props.on_admin_click.reform(|_: MouseEvent| ());
    let recording = *mic_state == MicState::Recording;

    html! {
        <div class="broadcast-view">
            <div class="broadcast-header">
                <div>
                    <h1>{"Shared audio broadcast"}</h1>
                    <p class="subtitle">{ format!("An audio room for {MAX_ACTIVE_PARTICIPANTS} people") }</p>
                </div>
                if props.is_admin {
                    <button class="btn btn-outline admin-button" onclick={on_admin_click}>
                        {"Admin panel"}
                    </button>
                }
            </div>

            <div class="participant-grid">
                { for (0..MAX_ACTIVE_PARTICIPANTS).map(|index| {
                    let name = participants.get(index);
                    let active = name.is_some();
                    html! {
                        <div key={index} class={classes!("participant-slot", active.then_some("active"))}>
                            <div class="participant-avatar"><MicIcon /></div>
                            <p class="participant-name">
                                { name.cloned().unwrap_or_else(|| format!("Participant {}", index + 1)) }
                            </p>
                            if active {
                                <span class="badge">{"Connected"}</span>
                            }
                        </div>
                    }
                }) }
            </div>

            <div class="card broadcast-controls">
                <h2>{"Broadcast controls"}</h2>
                <button
                    class={classes!("btn", "mic-toggle", if recording { "btn-destructive" } else { "btn-primary" })}
                    disabled={*mic_state == MicState::Starting}
                    onclick={on_toggle}
                >
                    if recording {
                        <MicOffIcon />{"Stop broadcast"}
                    } else {
                        <MicIcon />{"Start broadcast"}
                    }
                </button>
                <p class="active-count">
                    { format!(
                        "Active participants: {} / {}",
                        participants.len(),
                        MAX_ACTIVE_PARTICIPANTS
                    ) }
                </p>
            </div>
        </div>
    }
}
