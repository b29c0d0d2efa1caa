// SPDX-License-Identifier: MIT OR Apache-2.0

use broadcast_room_types::roster::Moderation;
use broadcast_room_types::{JoinRequest, RequestId, RequestStatus};
use yew::prelude::*;

use crate::components::icons::{BanIcon, CheckIcon, CloseIcon, GlobeIcon};

#[derive(Properties, PartialEq)]
pub struct RequestCardProps {
    pub request: JoinRequest,
    /// Current time in Unix milliseconds, for the "requested N minutes ago" line.
    pub now_ms: i64,
    pub on_action: Callback<(RequestId, Moderation)>,
}

/// One join request with the moderation buttons its status allows.
#[function_component(RequestCard)]
pub fn request_card(props: &RequestCardProps) -> Html {
    let request = &props.request;
    let status = request.status();

    let action = |moderation: Moderation| {
        let id = request.id.clone();
        props
            .on_action
            .reform(move |_: MouseEvent| (id.clone(), moderation))
    };

    let flag = request.country_code.as_ref().map(|_| {
        html! {
            <span class="flag" title={request.country.clone().unwrap_or_default()}>
                { request.flag() }
            </span>
        }
    });

    let actions = match status {
        RequestStatus::Pending => html! {
            <div class="request-actions">
                <button class="btn btn-approve" title="Approve" onclick={action(Moderation::Approve)}>
                    <CheckIcon />
                </button>
                <button class="btn btn-reject" title="Reject" onclick={action(Moderation::Reject)}>
                    <CloseIcon />
                </button>
                <button class="btn btn-ban" title="Ban" onclick={action(Moderation::Ban)}>
                    <BanIcon />
                </button>
            </div>
        },
        RequestStatus::Approved => html! {
            <div class="request-actions">
                <button class="btn btn-remove" onclick={action(Moderation::RemoveFromBroadcast)}>
                    {"Remove from broadcast"}
                </button>
                <button class="btn btn-ban" title="Ban" onclick={action(Moderation::Ban)}>
                    <BanIcon />
                </button>
            </div>
        },
        RequestStatus::Rejected | RequestStatus::Banned => html! {},
    };

    html! {
        <div class={classes!("request-card", format!("request-card-{status}"))} data-request-id={request.id.to_string()}>
            <div class="request-header">
                <h3 class="request-name">{ &request.name }</h3>
                { flag }
            </div>
            if status == RequestStatus::Pending {
                <p class="request-age">
                    { format!("Requested {} minutes ago", request.minutes_waiting(props.now_ms)) }
                </p>
            } else {
                <span class={classes!("status-badge", status.css_class())}>{ status.label() }</span>
            }
            <div class="request-location">
                <GlobeIcon />
                <div class="request-location-lines">
                    <span class="request-ip">
                        { format!("IP: {}", request.ip.as_deref().unwrap_or("Not available")) }
                    </span>
                    <span class="request-city">{ request.location_line() }</span>
                </div>
            </div>
            { actions }
        </div>
    }
}
