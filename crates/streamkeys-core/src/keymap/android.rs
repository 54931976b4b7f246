//! Android `KeyEvent.KEYCODE_*` values.
//!
//! Reference: `android.view.KeyEvent` (API level 11+ for the PC keyboard keys).
//! Only the codes the translator knows about are listed here.
//!
//! # How Android numbers its keys (for beginners)
//!
//! Android's key codes grew out of phone keypads, so the numbering is not
//! ASCII-like.  Digits start at 7 (`KEYCODE_0`), letters at 29 (`KEYCODE_A`),
//! and the "PC keyboard" keys (Escape, Ctrl, F1…) were bolted on later in the
//! 110–160 range.  The digit, letter, numpad-digit and F-key blocks are each
//! contiguous, which the translator exploits with range checks.

use thiserror::Error;

// ── Digits (contiguous) ──────────────────────────────────────────────────────
pub const KEYCODE_0: i32 = 7;
pub const KEYCODE_9: i32 = 16;

// ── Letters (contiguous) ─────────────────────────────────────────────────────
pub const KEYCODE_A: i32 = 29;
pub const KEYCODE_Z: i32 = 54;

// ── Numpad digits (contiguous) ───────────────────────────────────────────────
pub const KEYCODE_NUMPAD_0: i32 = 144;
pub const KEYCODE_NUMPAD_9: i32 = 153;

// ── Function keys (contiguous) ───────────────────────────────────────────────
pub const KEYCODE_F1: i32 = 131;
pub const KEYCODE_F12: i32 = 142;

// ── Symbols that share a key with a digit on US layouts ──────────────────────
pub const KEYCODE_STAR: i32 = 17;
pub const KEYCODE_POUND: i32 = 18;
pub const KEYCODE_AT: i32 = 77;
pub const KEYCODE_PLUS: i32 = 81;

// ── Navigation ───────────────────────────────────────────────────────────────
pub const KEYCODE_DPAD_UP: i32 = 19;
pub const KEYCODE_DPAD_DOWN: i32 = 20;
pub const KEYCODE_DPAD_LEFT: i32 = 21;
pub const KEYCODE_DPAD_RIGHT: i32 = 22;
pub const KEYCODE_PAGE_UP: i32 = 92;
pub const KEYCODE_PAGE_DOWN: i32 = 93;
pub const KEYCODE_MOVE_HOME: i32 = 122;
pub const KEYCODE_MOVE_END: i32 = 123;
pub const KEYCODE_INSERT: i32 = 124;
pub const KEYCODE_FORWARD_DEL: i32 = 112;

// ── Editing / control ────────────────────────────────────────────────────────
pub const KEYCODE_CLEAR: i32 = 28;
pub const KEYCODE_SPACE: i32 = 62;
pub const KEYCODE_ENTER: i32 = 66;
pub const KEYCODE_DEL: i32 = 67;
pub const KEYCODE_ESCAPE: i32 = 111;
pub const KEYCODE_SYSRQ: i32 = 120;
pub const KEYCODE_BREAK: i32 = 121;
pub const KEYCODE_DVR: i32 = 173;
pub const KEYCODE_TV: i32 = 170;

// ── Punctuation ──────────────────────────────────────────────────────────────
pub const KEYCODE_COMMA: i32 = 55;
pub const KEYCODE_PERIOD: i32 = 56;
pub const KEYCODE_GRAVE: i32 = 68;
pub const KEYCODE_MINUS: i32 = 69;
pub const KEYCODE_EQUALS: i32 = 70;
pub const KEYCODE_LEFT_BRACKET: i32 = 71;
pub const KEYCODE_RIGHT_BRACKET: i32 = 72;
pub const KEYCODE_BACKSLASH: i32 = 73;
pub const KEYCODE_SEMICOLON: i32 = 74;
pub const KEYCODE_APOSTROPHE: i32 = 75;
pub const KEYCODE_SLASH: i32 = 76;

// ── Modifiers and locks ──────────────────────────────────────────────────────
pub const KEYCODE_ALT_LEFT: i32 = 57;
pub const KEYCODE_ALT_RIGHT: i32 = 58;
pub const KEYCODE_SHIFT_LEFT: i32 = 59;
pub const KEYCODE_SHIFT_RIGHT: i32 = 60;
pub const KEYCODE_CTRL_LEFT: i32 = 113;
pub const KEYCODE_CTRL_RIGHT: i32 = 114;
pub const KEYCODE_CAPS_LOCK: i32 = 115;
pub const KEYCODE_SCROLL_LOCK: i32 = 116;
pub const KEYCODE_META_LEFT: i32 = 117;
pub const KEYCODE_META_RIGHT: i32 = 118;
pub const KEYCODE_NUM_LOCK: i32 = 143;

// ── Numpad operators ─────────────────────────────────────────────────────────
pub const KEYCODE_NUMPAD_DIVIDE: i32 = 154;
pub const KEYCODE_NUMPAD_MULTIPLY: i32 = 155;
pub const KEYCODE_NUMPAD_SUBTRACT: i32 = 156;
pub const KEYCODE_NUMPAD_ADD: i32 = 157;
pub const KEYCODE_NUMPAD_DOT: i32 = 158;

/// Errors returned by [`keycode_from_name`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyNameError {
    /// The input was empty or only whitespace.
    #[error("empty key name")]
    Empty,

    /// The name does not match any known Android key.
    #[error("unknown Android key name: {0:?}")]
    Unknown(String),
}

/// Names of the non-range keys, without the `KEYCODE_` prefix.
///
/// Digits, letters, numpad digits and F-keys are resolved arithmetically in
/// [`keycode_from_name`] and are not listed.
const NAMED_KEYS: &[(&str, i32)] = &[
    ("STAR", KEYCODE_STAR),
    ("POUND", KEYCODE_POUND),
    ("AT", KEYCODE_AT),
    ("PLUS", KEYCODE_PLUS),
    ("DPAD_UP", KEYCODE_DPAD_UP),
    ("DPAD_DOWN", KEYCODE_DPAD_DOWN),
    ("DPAD_LEFT", KEYCODE_DPAD_LEFT),
    ("DPAD_RIGHT", KEYCODE_DPAD_RIGHT),
    ("PAGE_UP", KEYCODE_PAGE_UP),
    ("PAGE_DOWN", KEYCODE_PAGE_DOWN),
    ("MOVE_HOME", KEYCODE_MOVE_HOME),
    ("MOVE_END", KEYCODE_MOVE_END),
    ("INSERT", KEYCODE_INSERT),
    ("FORWARD_DEL", KEYCODE_FORWARD_DEL),
    ("CLEAR", KEYCODE_CLEAR),
    ("SPACE", KEYCODE_SPACE),
    ("ENTER", KEYCODE_ENTER),
    ("DEL", KEYCODE_DEL),
    ("ESCAPE", KEYCODE_ESCAPE),
    ("SYSRQ", KEYCODE_SYSRQ),
    ("BREAK", KEYCODE_BREAK),
    ("DVR", KEYCODE_DVR),
    ("TV", KEYCODE_TV),
    ("COMMA", KEYCODE_COMMA),
    ("PERIOD", KEYCODE_PERIOD),
    ("GRAVE", KEYCODE_GRAVE),
    ("MINUS", KEYCODE_MINUS),
    ("EQUALS", KEYCODE_EQUALS),
    ("LEFT_BRACKET", KEYCODE_LEFT_BRACKET),
    ("RIGHT_BRACKET", KEYCODE_RIGHT_BRACKET),
    ("BACKSLASH", KEYCODE_BACKSLASH),
    ("SEMICOLON", KEYCODE_SEMICOLON),
    ("APOSTROPHE", KEYCODE_APOSTROPHE),
    ("SLASH", KEYCODE_SLASH),
    ("ALT_LEFT", KEYCODE_ALT_LEFT),
    ("ALT_RIGHT", KEYCODE_ALT_RIGHT),
    ("SHIFT_LEFT", KEYCODE_SHIFT_LEFT),
    ("SHIFT_RIGHT", KEYCODE_SHIFT_RIGHT),
    ("CTRL_LEFT", KEYCODE_CTRL_LEFT),
    ("CTRL_RIGHT", KEYCODE_CTRL_RIGHT),
    ("CAPS_LOCK", KEYCODE_CAPS_LOCK),
    ("SCROLL_LOCK", KEYCODE_SCROLL_LOCK),
    ("META_LEFT", KEYCODE_META_LEFT),
    ("META_RIGHT", KEYCODE_META_RIGHT),
    ("NUM_LOCK", KEYCODE_NUM_LOCK),
    ("NUMPAD_DIVIDE", KEYCODE_NUMPAD_DIVIDE),
    ("NUMPAD_MULTIPLY", KEYCODE_NUMPAD_MULTIPLY),
    ("NUMPAD_SUBTRACT", KEYCODE_NUMPAD_SUBTRACT),
    ("NUMPAD_ADD", KEYCODE_NUMPAD_ADD),
    ("NUMPAD_DOT", KEYCODE_NUMPAD_DOT),
];

/// Resolves an Android key name to its key code.
///
/// Matching is case-insensitive and the `KEYCODE_` prefix is optional, so
/// `"KEYCODE_DPAD_LEFT"`, `"dpad_left"` and `"Dpad_Left"` all resolve to
/// [`KEYCODE_DPAD_LEFT`].
///
/// # Errors
///
/// Returns [`KeyNameError::Empty`] for blank input and
/// [`KeyNameError::Unknown`] when no key has that name.
///
/// # Examples
///
/// ```rust
/// use streamkeys_core::keymap::android::{keycode_from_name, KEYCODE_A, KEYCODE_F12};
///
/// assert_eq!(keycode_from_name("KEYCODE_A"), Ok(KEYCODE_A));
/// assert_eq!(keycode_from_name("f12"), Ok(KEYCODE_F12));
/// ```
pub fn keycode_from_name(name: &str) -> Result<i32, KeyNameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(KeyNameError::Empty);
    }

    let upper = trimmed.to_ascii_uppercase();
    let bare = upper.strip_prefix("KEYCODE_").unwrap_or(&upper);

    if let Some(code) = range_key(bare) {
        return Ok(code);
    }

    NAMED_KEYS
        .iter()
        .find(|(n, _)| *n == bare)
        .map(|&(_, code)| code)
        .ok_or_else(|| KeyNameError::Unknown(trimmed.to_string()))
}

/// Resolves names in the contiguous blocks: `0`–`9`, `A`–`Z`,
/// `NUMPAD_0`–`NUMPAD_9`, `F1`–`F12`.
fn range_key(bare: &str) -> Option<i32> {
    let bytes = bare.as_bytes();
    match bytes {
        [d @ b'0'..=b'9'] => Some(KEYCODE_0 + i32::from(d - b'0')),
        [c @ b'A'..=b'Z'] => Some(KEYCODE_A + i32::from(c - b'A')),
        _ => {
            if let Some(rest) = bare.strip_prefix("NUMPAD_") {
                match rest.as_bytes() {
                    [d @ b'0'..=b'9'] => Some(KEYCODE_NUMPAD_0 + i32::from(d - b'0')),
                    _ => None,
                }
            } else if let Some(rest) = bare.strip_prefix('F') {
                // Reject "F01" and friends; only canonical spellings match.
                if rest.starts_with('0') {
                    return None;
                }
                match rest.parse::<i32>() {
                    Ok(n @ 1..=12) => Some(KEYCODE_F1 + n - 1),
                    _ => None,
                }
            } else {
                None
            }
        }
    }
}

/// Returns the canonical `KEYCODE_*` name for `keycode`, if it is one of the
/// keys this crate knows about.
pub fn keycode_name(keycode: i32) -> Option<String> {
    let bare = match keycode {
        KEYCODE_0..=KEYCODE_9 => ((b'0' + (keycode - KEYCODE_0) as u8) as char).to_string(),
        KEYCODE_A..=KEYCODE_Z => ((b'A' + (keycode - KEYCODE_A) as u8) as char).to_string(),
        KEYCODE_NUMPAD_0..=KEYCODE_NUMPAD_9 => format!("NUMPAD_{}", keycode - KEYCODE_NUMPAD_0),
        KEYCODE_F1..=KEYCODE_F12 => format!("F{}", keycode - KEYCODE_F1 + 1),
        _ => NAMED_KEYS
            .iter()
            .find(|&&(_, code)| code == keycode)
            .map(|&(n, _)| n.to_string())?,
    };
    Some(format!("KEYCODE_{bare}"))
}
