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

//! Display-name validation for the request form.

use crate::error::NameError;

pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_NAME_CHARS: usize = 50;

/// Validate a raw form value and return the trimmed name.
///
/// Lengths are counted in characters, not bytes.
pub fn validate_display_name(raw: &str) -> Result<String, NameError> {
    let name = raw.trim();
    let len = name.chars().count();
    if len == 0 {
        return Err(NameError::Required);
    }
    if len < MIN_NAME_CHARS {
        return Err(NameError::TooShort);
    }
    if len > MAX_NAME_CHARS {
        return Err(NameError::TooLong);
    }
    Ok(name.to_string())
}
