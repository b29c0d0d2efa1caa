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

//! The page served inside third-party iframes.
//!
//! A sent request is enriched with a best-effort location lookup and posted
//! to the hosting window. Enrichment failures never reach the visitor.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::join_request_form::JoinRequestForm;
use crate::constants::{geo_client, parent_origin, submit_delay_ms};
use crate::embed_bridge::{enriched_join_message, post_to_parent};

/// Enrich and forward one join request. Every failure is logged and dropped.
pub async fn forward_join_request(name: String, timestamp: i64) {
    let geo = match geo_client() {
        Ok(geo) => geo,
        Err(e) => {
            log::warn!("Geolocation disabled: {e}");
            broadcast_room_client::GeoClient::new(broadcast_room_client::DEFAULT_GEO_API_URL)
        }
    };
    let message = enriched_join_message(&name, timestamp, &geo).await;
    match post_to_parent(&message, parent_origin().as_deref()) {
        Ok(true) => log::info!("Join request for '{name}' posted to host page"),
        Ok(false) => log::info!("Join request for '{name}' not forwarded: page is not framed"),
        Err(e) => log::warn!("Failed to forward join request: {e}"),
    }
}

#[function_component(EmbedPage)]
pub fn embed_page() -> Html {
    let on_request_sent = Callback::from(|name: String| {
        log::info!("Join request from embedded page: {name}");
        let timestamp = js_sys::Date::now() as i64;
        spawn_local(forward_join_request(name, timestamp));
    });

    html! {
        <div class="embed-page">
            <JoinRequestForm {on_request_sent} delay_ms={submit_delay_ms()} embedded=true />
        </div>
    }
}
