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

//! Error types for the geolocation client.

use thiserror::Error;

/// Errors returned by [`GeoClient::lookup`](crate::GeoClient::lookup).
///
/// Callers that only want enrichment should use
/// [`GeoClient::lookup_or_unknown`](crate::GeoClient::lookup_or_unknown),
/// which swallows all of these.
#[derive(Debug, Error)]
pub enum GeoError {
    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Geolocation service returned status {status}")]
    Status { status: u16 },

    /// The body did not have the expected shape.
    #[error("Malformed geolocation response: {0}")]
    Malformed(String),
}
