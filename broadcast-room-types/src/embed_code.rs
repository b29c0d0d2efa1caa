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

//! Copyable iframe markup for embedding the request form on other sites.

/// Path of the embeddable request form, relative to the app origin.
pub const EMBED_PATH: &str = "/embed";

pub const EMBED_TITLE: &str = "Shared audio broadcast";

/// Width/height presets offered in the embed panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedSize {
    Compact,
    #[default]
    Standard,
    Large,
}

impl EmbedSize {
    pub const ALL: [EmbedSize; 3] = [EmbedSize::Compact, EmbedSize::Standard, EmbedSize::Large];

    /// `(width, height)` in CSS pixels.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            EmbedSize::Compact => (300, 400),
            EmbedSize::Standard => (400, 500),
            EmbedSize::Large => (500, 600),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmbedSize::Compact => "Compact",
            EmbedSize::Standard => "Standard",
            EmbedSize::Large => "Large",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            EmbedSize::Compact => "compact",
            EmbedSize::Standard => "standard",
            EmbedSize::Large => "large",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Iframe tag pointing at `{origin}/embed`.
pub fn embed_code(origin: &str, size: EmbedSize) -> String {
    let (width, height) = size.dimensions();
    format!(
        "<iframe \n  src=\"{}{}\" \n  width=\"{}\" \n  height=\"{}\" \n  frameborder=\"0\"\n  title=\"{}\">\n</iframe>",
        origin.trim_end_matches('/'),
        EMBED_PATH,
        width,
        height,
        EMBED_TITLE
    )
}
