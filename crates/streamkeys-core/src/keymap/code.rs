//! The prefixed 16-bit key code sent to the streaming host.
//!
//! Wire layout:
//! ```text
//! [prefix:8 = 0x80][vk:8]
//! ```
//! The prefix carries no meaning of its own; the host uses it to recognise
//! the key namespace.  Because every mapped code has the high byte set, the
//! value `0` can never be a legitimate code and is used as the "no mapping"
//! sentinel by [`crate::KeyTranslator::translate`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// High byte carried by every translated key code.
pub const KEY_PREFIX: u8 = 0x80;

/// Sentinel returned for key codes that have no mapping.
pub const NO_MAPPING: u16 = 0;

/// Errors raised when validating a raw 16-bit value as a [`StreamKeyCode`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyCodeError {
    /// The high byte is not [`KEY_PREFIX`].
    #[error("key code 0x{0:04X} is missing the 0x80 prefix")]
    MissingPrefix(u16),
}

/// A translated key code: [`KEY_PREFIX`] in the high byte, a Windows VK code
/// in the low byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamKeyCode(u16);

impl StreamKeyCode {
    /// Builds the code for a Windows VK byte.
    pub const fn from_vk(vk: u8) -> Self {
        Self(((KEY_PREFIX as u16) << 8) | vk as u16)
    }

    /// Validates a raw value received from elsewhere (e.g. a recorded
    /// session).
    ///
    /// # Errors
    ///
    /// Returns [`KeyCodeError::MissingPrefix`] if the high byte is not
    /// [`KEY_PREFIX`]; this includes the sentinel [`NO_MAPPING`].
    pub fn from_raw(raw: u16) -> Result<Self, KeyCodeError> {
        if (raw >> 8) as u8 == KEY_PREFIX {
            Ok(Self(raw))
        } else {
            Err(KeyCodeError::MissingPrefix(raw))
        }
    }

    /// The full prefixed value as sent on the wire.
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The Windows VK code in the low byte.
    pub const fn vk(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl From<StreamKeyCode> for u16 {
    fn from(code: StreamKeyCode) -> Self {
        code.raw()
    }
}

impl TryFrom<u16> for StreamKeyCode {
    type Error = KeyCodeError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl std::fmt::Display for StreamKeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}
