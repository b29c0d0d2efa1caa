// SPDX-License-Identifier: MIT OR Apache-2.0

mod mic;
mod moderation;

pub use mic::{MicIcon, MicOffIcon};
pub use moderation::{BanIcon, CheckIcon, CloseIcon, GlobeIcon};
