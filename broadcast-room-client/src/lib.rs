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

//! Best-effort IP geolocation for join requests.
//!
//! Works on WASM (browser) and native targets via [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use broadcast_room_client::GeoClient;
//!
//! # async fn example() {
//! let client = GeoClient::new(broadcast_room_client::DEFAULT_GEO_API_URL);
//! // Never fails: any error becomes the "Unknown" placeholder.
//! let geo = client.lookup_or_unknown().await;
//! println!("{} ({})", geo.city, geo.country);
//! # }
//! ```

pub mod error;

pub use broadcast_room_types;
pub use error::GeoError;

use broadcast_room_types::GeoInfo;
use reqwest::Client;
use serde::Deserialize;

/// Public endpoint used when the runtime config does not name one.
pub const DEFAULT_GEO_API_URL: &str = "https://ipapi.co/json/";

/// Body returned by the geolocation service. Every field is required; a
/// body missing any of them counts as a failed lookup.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    ip: String,
    country_name: String,
    country_code: String,
    city: String,
}

impl From<LookupResponse> for GeoInfo {
    fn from(r: LookupResponse) -> Self {
        GeoInfo {
            ip: r.ip,
            country: r.country_name,
            country_code: r.country_code,
            city: r.city,
        }
    }
}

/// Parse a geolocation response body.
pub fn parse_geo_body(body: &str) -> Result<GeoInfo, GeoError> {
    serde_json::from_str::<LookupResponse>(body)
        .map(GeoInfo::from)
        .map_err(|e| GeoError::Malformed(e.to_string()))
}

#[derive(Debug, Clone)]
pub struct GeoClient {
    url: String,
    http: Client,
}

impl GeoClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            http: Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Look up the caller's public IP location.
    ///
    /// Calls `GET {url}` once. No retry, no timeout beyond the platform's.
    pub async fn lookup(&self) -> Result<GeoInfo, GeoError> {
        let response = self.http.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(GeoError::Status {
                status: response.status().as_u16(),
            });
        }
        let body = response.text().await?;
        parse_geo_body(&body)
    }

    /// Like [`lookup`](Self::lookup) but substitutes [`GeoInfo::unknown`]
    /// for any failure. The failure is logged, never returned.
    pub async fn lookup_or_unknown(&self) -> GeoInfo {
        match self.lookup().await {
            Ok(geo) => geo,
            Err(e) => {
                log::warn!("Geolocation lookup via {} failed: {e}", self.url);
                GeoInfo::unknown()
            }
        }
    }
}
