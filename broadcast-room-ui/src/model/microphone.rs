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

//! Local microphone capture.
//!
//! Capture stays on this device. Nothing here sends audio anywhere; holding a
//! [`MicrophoneCapture`] only keeps the microphone and an `AudioContext`
//! open until it is stopped or dropped.

use gloo_utils::window;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioContext, MediaStream, MediaStreamConstraints, MediaStreamTrack};

#[derive(Debug, Error)]
pub enum MediaError {
    /// The browser exposes no media devices API (insecure context, old browser).
    #[error("Media devices unavailable: {0}")]
    Unavailable(String),

    /// The user or the platform refused microphone access.
    #[error("Microphone access denied: {0}")]
    Denied(String),

    #[error("Could not create audio context: {0}")]
    AudioContext(String),
}

fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// An open microphone stream plus the audio context created for it.
pub struct MicrophoneCapture {
    stream: MediaStream,
    audio_context: AudioContext,
}

impl MicrophoneCapture {
    /// Ask for exclusive microphone access.
    pub async fn start() -> Result<Self, MediaError> {
        let media_devices = window()
            .navigator()
            .media_devices()
            .map_err(|e| MediaError::Unavailable(describe(&e)))?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let promise = media_devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| MediaError::Unavailable(describe(&e)))?;

        let stream: MediaStream = JsFuture::from(promise)
            .await
            .map_err(|e| MediaError::Denied(describe(&e)))?
            .unchecked_into();

        let audio_context = match AudioContext::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                stop_tracks(&stream);
                return Err(MediaError::AudioContext(describe(&e)));
            }
        };

        log::info!("Microphone capture started ({} track(s))", stream.get_tracks().length());
        Ok(Self {
            stream,
            audio_context,
        })
    }

    /// Release the microphone and close the audio context.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for MicrophoneCapture {
    fn drop(&mut self) {
        stop_tracks(&self.stream);
        if let Err(e) = self.audio_context.close() {
            log::warn!("Failed to close audio context: {}", describe(&e));
        }
        log::info!("Microphone capture stopped");
    }
}

fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        track.unchecked_into::<MediaStreamTrack>().stop();
    }
}
