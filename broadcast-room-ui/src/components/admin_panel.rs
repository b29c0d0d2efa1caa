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

//! Moderation dashboard over the shared [`RosterCtx`].
//!
//! Actions are checked against the roster before they are dispatched, so a
//! toast is only shown for a transition that actually happens. Anything
//! else (unknown id, banned request, stale button) is logged and dropped.

use broadcast_room_types::roster::{Moderation, Transition};
use broadcast_room_types::{RequestId, MAX_ACTIVE_PARTICIPANTS};
use yew::prelude::*;

use crate::components::icons::BanIcon;
use crate::components::request_card::RequestCard;
use crate::context::{notify, RosterAction, RosterCtx, ToastCtx, ToastVariant};

#[derive(Properties, PartialEq)]
pub struct AdminPanelProps {
    pub on_back: Callback<()>,
}

fn moderation_toast(t: &Transition) -> (&'static str, String, ToastVariant) {
    match t.action {
        Moderation::Approve => (
            "Approved",
            format!("{} was admitted to the audio broadcast", t.name),
            ToastVariant::Default,
        ),
        Moderation::Reject => (
            "Rejected",
            format!("{}'s request was rejected", t.name),
            ToastVariant::Destructive,
        ),
        Moderation::Ban => (
            "Banned",
            format!("{} is banned from sending broadcast requests", t.name),
            ToastVariant::Destructive,
        ),
        Moderation::RemoveFromBroadcast => (
            "Removed",
            format!("{} was removed from the audio broadcast", t.name),
            ToastVariant::Default,
        ),
    }
}

#[function_component(AdminPanel)]
pub fn admin_panel(props: &AdminPanelProps) -> Html {
    let roster = use_context::<RosterCtx>()
        .expect("Roster context provider is missing – this is a bug");
    let toasts = use_context::<ToastCtx>();
    let now_ms = js_sys::Date::now() as i64;

    let on_action = {
        let roster = roster.clone();
        Callback::from(move |(id, moderation): (RequestId, Moderation)| {
            match roster.roster.check(&id, moderation) {
                Ok(t) => {
                    roster.dispatch(RosterAction::Moderate(id, moderation));
                    let (title, description, variant) = moderation_toast(&t);
                    notify(toasts.as_ref(), title, description, variant);
                }
                Err(e) => log::debug!("Ignoring moderation action: {e}"),
            }
        })
    };

    let on_back = props.on_back.reform(|_: MouseEvent| ());

    let parts = roster.roster.partitions();
    let card = |request: &&broadcast_room_types::JoinRequest| {
        html! {
            <RequestCard
                key={request.id.to_string()}
                request={(*request).clone()}
                {now_ms}
                on_action={on_action.clone()}
            />
        }
    };

    html! {
        <div class="admin-panel">
            <div class="admin-header">
                <button class="btn btn-outline back-button" onclick={on_back}>
                    {"Back to broadcast"}
                </button>
                <div>
                    <h1>{"Admin panel"}</h1>
                    <p class="subtitle">{"Manage requests to join the audio broadcast"}</p>
                </div>
            </div>

            <div class="admin-stats">
                <div class="stat stat-pending">
                    <div class="stat-value">{ parts.pending.len() }</div>
                    <div class="stat-label">{"Pending requests"}</div>
                </div>
                <div class="stat stat-approved">
                    <div class="stat-value">{ parts.approved.len() }</div>
                    <div class="stat-label">{"Approved participants"}</div>
                </div>
                <div class="stat stat-banned">
                    <div class="stat-value">{ parts.banned.len() }</div>
                    <div class="stat-label">{"Banned users"}</div>
                </div>
                <div class="stat stat-capacity">
                    <div class="stat-value">{ MAX_ACTIVE_PARTICIPANTS }</div>
                    <div class="stat-label">{"Maximum"}</div>
                </div>
            </div>

            if roster.roster.over_capacity() {
                <div class="capacity-warning" role="alert">
                    { format!(
                        "{} participants are approved; the room is meant for {}.",
                        parts.approved.len(),
                        MAX_ACTIVE_PARTICIPANTS
                    ) }
                </div>
            }

            <div class="admin-columns">
                <section class="card pending-requests">
                    <h2>{"New join requests"}</h2>
                    if parts.pending.is_empty() {
                        <p class="empty">{"No new requests"}</p>
                    } else {
                        <div class="request-list">{ for parts.pending.iter().map(&card) }</div>
                    }
                </section>
                <section class="card approved-requests">
                    <h2>{"Approved participants"}</h2>
                    if parts.approved.is_empty() {
                        <p class="empty">{"No approved participants"}</p>
                    } else {
                        <div class="request-list">{ for parts.approved.iter().map(&card) }</div>
                    }
                </section>
            </div>

            if !parts.banned.is_empty() {
                <section class="card banned-requests">
                    <h2><BanIcon />{"Banned users"}</h2>
                    <div class="request-grid">{ for parts.banned.iter().map(&card) }</div>
                </section>
            }
        </div>
    }
}
