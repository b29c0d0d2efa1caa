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

//! The join-request record.

use serde::{Deserialize, Serialize};

use crate::geo::GeoInfo;

/// Opaque identifier of a join request. Assigned once, never changed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a join request stands in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Banned,
}

impl RequestStatus {
    /// Human-readable label for status badges.
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Banned => "Banned",
        }
    }

    /// CSS modifier class for status badges.
    pub fn css_class(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "status-pending",
            RequestStatus::Approved => "status-approved",
            RequestStatus::Rejected => "status-rejected",
            RequestStatus::Banned => "status-banned",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Banned => "banned",
        };
        f.write_str(s)
    }
}

/// A visitor's ask to take part in the broadcast.
///
/// `status` is private: only [`crate::roster::Roster`] moves it, and only
/// along the allowed moderation transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub id: RequestId,
    pub name: String,
    /// Unix timestamp in milliseconds.
    pub requested_at: i64,
    status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl JoinRequest {
    /// A fresh pending request with no provenance metadata.
    pub fn new(id: RequestId, name: impl Into<String>, requested_at: i64) -> Self {
        Self {
            id,
            name: name.into(),
            requested_at,
            status: RequestStatus::Pending,
            ip: None,
            country: None,
            country_code: None,
            city: None,
        }
    }

    /// Attach geolocation metadata.
    pub fn with_geo(mut self, geo: GeoInfo) -> Self {
        self.ip = Some(geo.ip);
        self.country = Some(geo.country);
        self.country_code = Some(geo.country_code);
        self.city = Some(geo.city);
        self
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }

    /// Whole minutes elapsed between `requested_at` and `now_ms`, never
    /// negative.
    pub fn minutes_waiting(&self, now_ms: i64) -> i64 {
        (now_ms.saturating_sub(self.requested_at) / 60_000).max(0)
    }

    /// Flag emoji for `country_code`, or a globe when it is unusable.
    pub fn flag(&self) -> String {
        crate::geo::flag_emoji(self.country_code.as_deref().unwrap_or_default())
    }

    /// `"city, country"` with missing parts left blank.
    pub fn location_line(&self) -> String {
        format!(
            "{}, {}",
            self.city.as_deref().unwrap_or_default(),
            self.country.as_deref().unwrap_or_default()
        )
    }
}
