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

//! Cross-window message contract between the embedded request form and the
//! page hosting the iframe.
//!
//! ```json
//! { "type": "JOIN_REQUEST",
//!   "data": { "name": "Ahmad", "timestamp": 1700000000000,
//!             "ip": "...", "country": "...", "countryCode": "SA", "city": "..." } }
//! ```

use serde::{Deserialize, Serialize};

use crate::geo::GeoInfo;
use crate::request::{JoinRequest, RequestId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EmbedMessage {
    #[serde(rename = "JOIN_REQUEST")]
    JoinRequest(JoinRequestPayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestPayload {
    pub name: String,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    pub ip: String,
    pub country: String,
    pub country_code: String,
    pub city: String,
}

impl JoinRequestPayload {
    pub fn new(name: impl Into<String>, timestamp: i64, geo: GeoInfo) -> Self {
        Self {
            name: name.into(),
            timestamp,
            ip: geo.ip,
            country: geo.country,
            country_code: geo.country_code,
            city: geo.city,
        }
    }

    pub fn geo(&self) -> GeoInfo {
        GeoInfo {
            ip: self.ip.clone(),
            country: self.country.clone(),
            country_code: self.country_code.clone(),
            city: self.city.clone(),
        }
    }

    /// Turn the payload into a pending request under the given id.
    pub fn into_request(self, id: RequestId) -> JoinRequest {
        let geo = self.geo();
        JoinRequest::new(id, self.name, self.timestamp).with_geo(geo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestStatus;
    use serde_json::json;

    #[test]
    fn join_request_wire_shape() {
        let msg = EmbedMessage::JoinRequest(JoinRequestPayload::new(
            "Ahmad",
            1_700_000_000_000,
            GeoInfo::unknown(),
        ));
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "JOIN_REQUEST",
                "data": {
                    "name": "Ahmad",
                    "timestamp": 1_700_000_000_000i64,
                    "ip": "Unknown",
                    "country": "Unknown",
                    "countryCode": "Unknown",
                    "city": "Unknown"
                }
            })
        );
    }

    #[test]
    fn foreign_message_types_are_rejected() {
        let value = json!({ "type": "RESIZE", "data": { "height": 10 } });
        assert!(serde_json::from_value::<EmbedMessage>(value).is_err());
    }

    #[test]
    fn payload_becomes_pending_request() {
        let payload = JoinRequestPayload::new(
            "Fatima",
            5,
            GeoInfo {
                ip: "10.0.0.50".into(),
                country: "United Arab Emirates".into(),
                country_code: "AE".into(),
                city: "Dubai".into(),
            },
        );
        let req = payload.into_request("embed-1".into());
        assert_eq!(req.status(), RequestStatus::Pending);
        assert_eq!(req.requested_at, 5);
        assert_eq!(req.country_code.as_deref(), Some("AE"));
    }
}
