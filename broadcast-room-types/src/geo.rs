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

//! Best-effort provenance metadata attached to a join event.

use serde::{Deserialize, Serialize};

/// Placeholder used for every field when the lookup fails.
pub const UNKNOWN: &str = "Unknown";

/// Shown when a country code cannot be turned into a flag.
pub const GLOBE: &str = "\u{1F30D}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoInfo {
    pub ip: String,
    pub country: String,
    pub country_code: String,
    pub city: String,
}

impl GeoInfo {
    /// The fixed record substituted for any failed lookup.
    pub fn unknown() -> Self {
        Self {
            ip: UNKNOWN.to_string(),
            country: UNKNOWN.to_string(),
            country_code: UNKNOWN.to_string(),
            city: UNKNOWN.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::unknown()
    }
}

/// Regional-indicator flag for a two-letter ISO country code.
///
/// Anything that is not exactly two ASCII letters (including `"Unknown"`)
/// maps to [`GLOBE`].
pub fn flag_emoji(country_code: &str) -> String {
    let code = country_code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return GLOBE.to_string();
    }
    code.to_ascii_uppercase()
        .chars()
        .filter_map(|c| char::from_u32(0x1F1A5 + c as u32))
        .collect()
}
