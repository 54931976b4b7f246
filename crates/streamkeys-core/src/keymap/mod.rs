//! Android key code → streaming-host key code translation.
//!
//! Translation runs in two stages:
//!
//! 1. Four guarded range rules map the contiguous Android blocks (digits,
//!    letters, numpad digits, F1–F12) onto the matching VK blocks with a
//!    single subtraction.
//! 2. Everything else is looked up in [`EXPLICIT_TABLE`].
//!
//! The resulting VK byte is tagged with [`code::KEY_PREFIX`].  Keys found in
//! neither stage yield [`code::NO_MAPPING`] (or `None` from the typed API).

pub mod android;
pub mod code;
pub mod windows_vk;

use serde::{Deserialize, Serialize};
use tracing::debug;

use android::*;
use code::{StreamKeyCode, NO_MAPPING};
use windows_vk::*;

/// A contiguous block of Android codes that maps linearly onto a VK block.
struct RangeRule {
    first: i32,
    last: i32,
    vk_base: u8,
}

impl RangeRule {
    fn apply(&self, keycode: i32) -> Option<u8> {
        if (self.first..=self.last).contains(&keycode) {
            // Blocks are at most 26 wide, so the offset always fits in a u8.
            Some(self.vk_base + (keycode - self.first) as u8)
        } else {
            None
        }
    }
}

/// Range rules, checked in order before the explicit table.
const RANGE_RULES: [RangeRule; 4] = [
    RangeRule { first: KEYCODE_0, last: KEYCODE_9, vk_base: VK_0 },
    RangeRule { first: KEYCODE_A, last: KEYCODE_Z, vk_base: VK_A },
    RangeRule { first: KEYCODE_NUMPAD_0, last: KEYCODE_NUMPAD_9, vk_base: VK_NUMPAD0 },
    RangeRule { first: KEYCODE_F1, last: KEYCODE_F12, vk_base: VK_F1 },
];

/// Android codes outside the contiguous blocks, paired with their VK byte.
const EXPLICIT_TABLE: &[(i32, u8)] = &[
    // ── Modifiers (each side distinct) ────────────────────────────────────────
    (KEYCODE_ALT_LEFT, VK_LMENU),
    (KEYCODE_ALT_RIGHT, VK_RMENU),
    (KEYCODE_CTRL_LEFT, VK_LCONTROL),
    (KEYCODE_CTRL_RIGHT, VK_RCONTROL),
    (KEYCODE_SHIFT_LEFT, VK_LSHIFT),
    (KEYCODE_SHIFT_RIGHT, VK_RSHIFT),
    (KEYCODE_META_LEFT, VK_LWIN),
    (KEYCODE_META_RIGHT, VK_RWIN),
    (KEYCODE_TV, VK_LWIN), // remote-control TV button opens the Start menu

    // ── Locks ─────────────────────────────────────────────────────────────────
    (KEYCODE_CAPS_LOCK, VK_CAPITAL),
    (KEYCODE_NUM_LOCK, VK_NUMLOCK),
    (KEYCODE_SCROLL_LOCK, VK_SCROLL),

    // ── Navigation ────────────────────────────────────────────────────────────
    (KEYCODE_DPAD_LEFT, VK_LEFT),
    (KEYCODE_DPAD_RIGHT, VK_RIGHT),
    (KEYCODE_DPAD_UP, VK_UP),
    (KEYCODE_DPAD_DOWN, VK_DOWN),
    (KEYCODE_MOVE_HOME, VK_HOME),
    (KEYCODE_MOVE_END, VK_END),
    (KEYCODE_PAGE_UP, VK_PRIOR),
    (KEYCODE_PAGE_DOWN, VK_NEXT),
    (KEYCODE_INSERT, VK_INSERT),
    (KEYCODE_FORWARD_DEL, VK_DELETE),

    // ── Editing / control ─────────────────────────────────────────────────────
    (KEYCODE_DEL, VK_BACK),
    (KEYCODE_ENTER, VK_RETURN),
    (KEYCODE_ESCAPE, VK_ESCAPE),
    (KEYCODE_DVR, VK_TAB),
    (KEYCODE_SPACE, VK_SPACE),
    (KEYCODE_CLEAR, VK_CLEAR),
    (KEYCODE_BREAK, VK_PAUSE),
    (KEYCODE_SYSRQ, VK_PRINTSCREEN),

    // ── Punctuation ───────────────────────────────────────────────────────────
    (KEYCODE_COMMA, VK_OEM_COMMA),
    (KEYCODE_PERIOD, VK_OEM_PERIOD),
    (KEYCODE_SLASH, VK_OEM_2),
    (KEYCODE_BACKSLASH, VK_OEM_5),
    (KEYCODE_LEFT_BRACKET, VK_OEM_4),
    (KEYCODE_RIGHT_BRACKET, VK_OEM_6),
    (KEYCODE_SEMICOLON, VK_OEM_1),
    (KEYCODE_APOSTROPHE, VK_OEM_7),
    (KEYCODE_GRAVE, VK_OEM_3),
    (KEYCODE_MINUS, VK_OEM_MINUS),
    (KEYCODE_EQUALS, VK_OEM_PLUS),
    (KEYCODE_PLUS, VK_OEM_PLUS),

    // ── Numpad operators ──────────────────────────────────────────────────────
    (KEYCODE_NUMPAD_DIVIDE, VK_DIVIDE),
    (KEYCODE_NUMPAD_MULTIPLY, VK_MULTIPLY),
    (KEYCODE_NUMPAD_SUBTRACT, VK_SUBTRACT),
    (KEYCODE_NUMPAD_ADD, VK_ADD),
    (KEYCODE_NUMPAD_DOT, VK_DECIMAL),

    // ── Shifted digits on a US layout ─────────────────────────────────────────
    (KEYCODE_AT, VK_0 + 2),
    (KEYCODE_POUND, VK_0 + 3),
    (KEYCODE_STAR, VK_0 + 8),
];

/// Symbols that need Shift held to be typed on a US layout.
const SHIFTED_KEYS: [i32; 4] = [KEYCODE_AT, KEYCODE_POUND, KEYCODE_PLUS, KEYCODE_STAR];

/// The result of translating one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslatedKey {
    /// Prefixed key code to send to the host.
    pub code: StreamKeyCode,
    /// Whether the sender should wrap the key in a synthetic Shift press.
    pub needs_shift: bool,
}

/// Stateless Android → streaming-host key translator.
///
/// All methods are associated functions; there is nothing to construct.
pub struct KeyTranslator;

impl KeyTranslator {
    /// Returns `true` if `keycode` is a symbol that requires Shift on a US
    /// layout (`@`, `#`, `+`, `*`).
    ///
    /// Unknown key codes return `false`.
    pub fn needs_shift(keycode: i32) -> bool {
        SHIFTED_KEYS.contains(&keycode)
    }

    /// Translates an Android key code into the prefixed 16-bit host code.
    ///
    /// Returns [`NO_MAPPING`] (0) for keys without a mapping.  Callers must
    /// not forward a 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamkeys_core::keymap::android::{KEYCODE_A, KEYCODE_ESCAPE};
    /// use streamkeys_core::KeyTranslator;
    ///
    /// assert_eq!(KeyTranslator::translate(KEYCODE_A), 0x8041);
    /// assert_eq!(KeyTranslator::translate(KEYCODE_ESCAPE), 0x801B);
    /// assert_eq!(KeyTranslator::translate(-1), 0);
    /// ```
    pub fn translate(keycode: i32) -> u16 {
        Self::translate_key(keycode).map_or(NO_MAPPING, StreamKeyCode::raw)
    }

    /// Typed form of [`KeyTranslator::translate`]: `None` instead of the
    /// sentinel.
    ///
    /// Unmapped keys are reported at `debug` level.
    pub fn translate_key(keycode: i32) -> Option<StreamKeyCode> {
        match vk_for(keycode) {
            Some(vk) => Some(StreamKeyCode::from_vk(vk)),
            None => {
                debug!(keycode, "no key mapping for Android key code");
                None
            }
        }
    }

    /// Translates a key press into its host code plus the shift requirement.
    pub fn translate_event(keycode: i32) -> Option<TranslatedKey> {
        Self::translate_key(keycode).map(|code| TranslatedKey {
            code,
            needs_shift: Self::needs_shift(keycode),
        })
    }
}

/// Resolves the VK byte for `keycode`: range rules first, then the table.
fn vk_for(keycode: i32) -> Option<u8> {
    RANGE_RULES
        .iter()
        .find_map(|rule| rule.apply(keycode))
        .or_else(|| {
            EXPLICIT_TABLE
                .iter()
                .find(|&&(code, _)| code == keycode)
                .map(|&(_, vk)| vk)
        })
}
