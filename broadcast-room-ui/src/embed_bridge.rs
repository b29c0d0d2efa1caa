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

//! Cross-window messaging between the embedded request form and its host.
//!
//! Sending is fire-and-forget: no acknowledgement, no retry. Receiving only
//! accepts messages whose origin is on an explicit allow-list.

use broadcast_room_types::{EmbedMessage, JoinRequestPayload};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;
use yew::Callback;

/// Target origin used when none is configured.
pub const WILDCARD_ORIGIN: &str = "*";

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("No window available")]
    NoWindow,

    #[error("Failed to serialize message: {0}")]
    Serialize(String),

    #[error("postMessage failed: {0:?}")]
    Post(JsValue),

    #[error("Failed to install message listener: {0:?}")]
    Listen(JsValue),
}

/// Post `message` to the parent window.
///
/// Returns `Ok(false)` without posting when the page is not framed.
pub fn post_to_parent(message: &EmbedMessage, target_origin: Option<&str>) -> Result<bool, BridgeError> {
    let window = web_sys::window().ok_or(BridgeError::NoWindow)?;
    let parent = match window.parent() {
        Ok(Some(parent)) if !js_sys::Object::is(parent.as_ref(), window.as_ref()) => parent,
        _ => return Ok(false),
    };

    let origin = match target_origin {
        Some(origin) => origin,
        None => {
            log::warn!("No parentOrigin configured; posting join request to any origin");
            WILDCARD_ORIGIN
        }
    };

    let value =
        serde_wasm_bindgen::to_value(message).map_err(|e| BridgeError::Serialize(e.to_string()))?;
    parent
        .post_message(&value, origin)
        .map_err(BridgeError::Post)?;
    Ok(true)
}

/// Build the join message for `name`, enriched with whatever the
/// geolocation lookup returns. A failed lookup still yields a message,
/// carrying the "Unknown" placeholders.
pub async fn enriched_join_message(
    name: &str,
    timestamp: i64,
    geo: &broadcast_room_client::GeoClient,
) -> EmbedMessage {
    let info = geo.lookup_or_unknown().await;
    EmbedMessage::JoinRequest(JoinRequestPayload::new(name, timestamp, info))
}

/// Exact match against the allow-list. Trailing slashes are ignored; there
/// is no wildcard.
pub fn origin_allowed(allowed: &[String], origin: &str) -> bool {
    let origin = origin.trim_end_matches('/');
    !origin.is_empty() && allowed.iter().any(|a| a == origin)
}

/// Host-side `message` listener. Removed from the window on drop.
pub struct JoinMessageListener {
    closure: Closure<dyn FnMut(MessageEvent)>,
}

impl JoinMessageListener {
    pub fn install(
        allowed: Vec<String>,
        on_join: Callback<JoinRequestPayload>,
    ) -> Result<Self, BridgeError> {
        let window = web_sys::window().ok_or(BridgeError::NoWindow)?;
        let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
            let origin = event.origin();
            if !origin_allowed(&allowed, &origin) {
                log::debug!("Dropping message from non-allowed origin {origin}");
                return;
            }
            match serde_wasm_bindgen::from_value::<EmbedMessage>(event.data()) {
                Ok(EmbedMessage::JoinRequest(payload)) => on_join.emit(payload),
                Err(e) => log::debug!("Ignoring unrecognised message from {origin}: {e}"),
            }
        }) as Box<dyn FnMut(MessageEvent)>);

        window
            .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            .map_err(BridgeError::Listen)?;
        Ok(Self { closure })
    }
}

impl Drop for JoinMessageListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("message", self.closure.as_ref().unchecked_ref());
        }
    }
}
