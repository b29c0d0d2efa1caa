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

//! Shared types for the broadcast room.
//!
//! This crate holds everything that does not need a DOM: the join-request
//! record, display-name validation, the moderation roster, the cross-window
//! message contract and the iframe markup generator. It is framework-agnostic
//! so the lifecycle rules can be tested natively.

pub mod embed_code;
pub mod error;
pub mod geo;
pub mod message;
pub mod name;
pub mod request;
pub mod roster;

pub use error::{ModerationError, NameError};
pub use geo::GeoInfo;
pub use message::{EmbedMessage, JoinRequestPayload};
pub use request::{JoinRequest, RequestId, RequestStatus};
pub use roster::{MemoryStore, Partitions, RequestStore, Roster, MAX_ACTIVE_PARTICIPANTS};

/// Interpret a config string as a boolean flag (`"true"` or `"1"`,
/// case-insensitive).
pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.to_lowercase())
    } else {
        false
    }
}
