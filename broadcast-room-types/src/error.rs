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

//! Error types.
//!
//! None of these reach the user as-is: the UI turns [`NameError`] into a
//! toast and only logs [`ModerationError`].

use thiserror::Error;

use crate::request::{RequestId, RequestStatus};
use crate::roster::Moderation;

/// Why a display name was refused by [`crate::name::validate_display_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name is empty once surrounding whitespace is removed.
    #[error("name required")]
    Required,

    /// Fewer than [`crate::name::MIN_NAME_CHARS`] characters.
    #[error("name too short")]
    TooShort,

    /// More than [`crate::name::MAX_NAME_CHARS`] characters.
    #[error("name too long")]
    TooLong,
}

impl NameError {
    /// Toast title shown when validation fails.
    pub fn title(&self) -> &'static str {
        match self {
            NameError::Required => "Name required",
            NameError::TooShort => "Name too short",
            NameError::TooLong => "Name too long",
        }
    }

    /// Toast description shown when validation fails.
    pub fn description(&self) -> &'static str {
        match self {
            NameError::Required => "Please enter your name to join the audio broadcast",
            NameError::TooShort => "The name must be at least 2 characters long",
            NameError::TooLong => "The name must be at most 50 characters long",
        }
    }
}

/// A moderation action that could not be applied. The roster is left
/// untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModerationError {
    #[error("no join request with id '{0}'")]
    UnknownRequest(RequestId),

    #[error("cannot {action} request '{id}' while it is {from}")]
    InvalidTransition {
        id: RequestId,
        from: RequestStatus,
        action: Moderation,
    },

    #[error("join request '{0}' already exists")]
    DuplicateRequest(RequestId),

    #[error("join request '{id}' refused: {reason}")]
    InvalidName { id: RequestId, reason: NameError },
}
