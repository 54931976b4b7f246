//! # streamkeys-core
//!
//! Translation tables that convert Android key event codes
//! (`KeyEvent.KEYCODE_*`) into the key codes a game-streaming host expects.
//!
//! The crate is pure: no OS APIs, no sockets, no global state.  Every call is
//! independent and safe to make from any thread.
//!
//! # Architecture overview (for beginners)
//!
//! An Android device reports each key press with an integer key code (for
//! example `KEYCODE_A = 29`).  The streaming host on the other end of the
//! connection speaks a different dialect: Windows Virtual Key codes
//! (`VK_A = 0x41`), tagged with a fixed high byte of `0x80` so the host can
//! tell the value belongs to this key namespace.
//!
//! - **`keymap::android`** – Named Android key code constants and a parser
//!   that resolves names like `"KEYCODE_DPAD_LEFT"`.
//!
//! - **`keymap::windows_vk`** – Named Windows VK byte constants.
//!
//! - **`keymap`** – The [`KeyTranslator`] itself plus the typed
//!   [`StreamKeyCode`] / [`TranslatedKey`] results.

pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `streamkeys_core::KeyTranslator` instead of the full module path.
pub use keymap::android::{keycode_from_name, KeyNameError};
pub use keymap::code::{KeyCodeError, StreamKeyCode, KEY_PREFIX, NO_MAPPING};
pub use keymap::{KeyTranslator, TranslatedKey};
