//! Windows Virtual Key (VK) codes understood by the streaming host.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h).
//! <https://learn.microsoft.com/windows/win32/inputdev/virtual-key-codes>
//!
//! # What is a Windows Virtual Key (VK) code? (for beginners)
//!
//! Windows assigns each keyboard key a number called a "Virtual Key code".
//! They are "virtual" because they represent *logical* keys rather than
//! physical scan codes: `VK_A = 0x41` no matter where the A key sits.  Digits
//! and letters conveniently reuse their ASCII values (`'0' = 0x30`,
//! `'A' = 0x41`), which is why the translator can map whole blocks with one
//! subtraction.
//!
//! Only the codes the translator produces are listed here.

// ── Block bases ──────────────────────────────────────────────────────────────
pub const VK_0: u8 = 0x30;
pub const VK_A: u8 = 0x41;
pub const VK_NUMPAD0: u8 = 0x60;
pub const VK_F1: u8 = 0x70;

// ── Editing / control ────────────────────────────────────────────────────────
pub const VK_BACK: u8 = 0x08;
pub const VK_TAB: u8 = 0x09;
pub const VK_CLEAR: u8 = 0x0C;
pub const VK_RETURN: u8 = 0x0D;
pub const VK_PAUSE: u8 = 0x13;
pub const VK_CAPITAL: u8 = 0x14;
pub const VK_ESCAPE: u8 = 0x1B;
pub const VK_SPACE: u8 = 0x20;

// ── Navigation ───────────────────────────────────────────────────────────────
pub const VK_PRIOR: u8 = 0x21;
pub const VK_NEXT: u8 = 0x22;
pub const VK_END: u8 = 0x23;
pub const VK_HOME: u8 = 0x24;
pub const VK_LEFT: u8 = 0x25;
pub const VK_UP: u8 = 0x26;
pub const VK_RIGHT: u8 = 0x27;
pub const VK_DOWN: u8 = 0x28;
pub const VK_INSERT: u8 = 0x2D;
pub const VK_DELETE: u8 = 0x2E;

// ── Windows keys ─────────────────────────────────────────────────────────────
pub const VK_LWIN: u8 = 0x5B;
pub const VK_RWIN: u8 = 0x5C;

// ── Numpad operators ─────────────────────────────────────────────────────────
pub const VK_MULTIPLY: u8 = 0x6A;
pub const VK_ADD: u8 = 0x6B;
pub const VK_SUBTRACT: u8 = 0x6D;
pub const VK_DECIMAL: u8 = 0x6E;
pub const VK_DIVIDE: u8 = 0x6F;

// ── Locks ────────────────────────────────────────────────────────────────────
pub const VK_NUMLOCK: u8 = 0x90;
pub const VK_SCROLL: u8 = 0x91;

/// Print Screen as the host expects it.  This is 0x9A, not `VK_SNAPSHOT`
/// (0x2C).
pub const VK_PRINTSCREEN: u8 = 0x9A;

// ── Sided modifiers ──────────────────────────────────────────────────────────
pub const VK_LSHIFT: u8 = 0xA0;
pub const VK_RSHIFT: u8 = 0xA1;
pub const VK_LCONTROL: u8 = 0xA2;
pub const VK_RCONTROL: u8 = 0xA3;
pub const VK_LMENU: u8 = 0xA4;
pub const VK_RMENU: u8 = 0xA5;

// ── OEM punctuation (US layout) ──────────────────────────────────────────────
pub const VK_OEM_1: u8 = 0xBA; // ; :
pub const VK_OEM_PLUS: u8 = 0xBB; // = +
pub const VK_OEM_COMMA: u8 = 0xBC; // , <
pub const VK_OEM_MINUS: u8 = 0xBD; // - _
pub const VK_OEM_PERIOD: u8 = 0xBE; // . >
pub const VK_OEM_2: u8 = 0xBF; // / ?
pub const VK_OEM_3: u8 = 0xC0; // ` ~
pub const VK_OEM_4: u8 = 0xDB; // [ {
pub const VK_OEM_5: u8 = 0xDC; // \ |
pub const VK_OEM_6: u8 = 0xDD; // ] }
pub const VK_OEM_7: u8 = 0xDE; // ' "

const DIGIT_NAMES: [&str; 10] = [
    "VK_0", "VK_1", "VK_2", "VK_3", "VK_4", "VK_5", "VK_6", "VK_7", "VK_8", "VK_9",
];

const LETTER_NAMES: [&str; 26] = [
    "VK_A", "VK_B", "VK_C", "VK_D", "VK_E", "VK_F", "VK_G", "VK_H", "VK_I", "VK_J", "VK_K",
    "VK_L", "VK_M", "VK_N", "VK_O", "VK_P", "VK_Q", "VK_R", "VK_S", "VK_T", "VK_U", "VK_V",
    "VK_W", "VK_X", "VK_Y", "VK_Z",
];

const NUMPAD_NAMES: [&str; 10] = [
    "VK_NUMPAD0", "VK_NUMPAD1", "VK_NUMPAD2", "VK_NUMPAD3", "VK_NUMPAD4", "VK_NUMPAD5",
    "VK_NUMPAD6", "VK_NUMPAD7", "VK_NUMPAD8", "VK_NUMPAD9",
];

const FUNCTION_NAMES: [&str; 12] = [
    "VK_F1", "VK_F2", "VK_F3", "VK_F4", "VK_F5", "VK_F6", "VK_F7", "VK_F8", "VK_F9", "VK_F10",
    "VK_F11", "VK_F12",
];

/// Returns a human-readable `VK_*` name for `vk`.
///
/// Returns `None` for codes the translator never produces.
pub fn vk_name(vk: u8) -> Option<&'static str> {
    let name = match vk {
        0x30..=0x39 => DIGIT_NAMES[usize::from(vk - VK_0)],
        0x41..=0x5A => LETTER_NAMES[usize::from(vk - VK_A)],
        0x60..=0x69 => NUMPAD_NAMES[usize::from(vk - VK_NUMPAD0)],
        0x70..=0x7B => FUNCTION_NAMES[usize::from(vk - VK_F1)],
        VK_BACK => "VK_BACK",
        VK_TAB => "VK_TAB",
        VK_CLEAR => "VK_CLEAR",
        VK_RETURN => "VK_RETURN",
        VK_PAUSE => "VK_PAUSE",
        VK_CAPITAL => "VK_CAPITAL",
        VK_ESCAPE => "VK_ESCAPE",
        VK_SPACE => "VK_SPACE",
        VK_PRIOR => "VK_PRIOR",
        VK_NEXT => "VK_NEXT",
        VK_END => "VK_END",
        VK_HOME => "VK_HOME",
        VK_LEFT => "VK_LEFT",
        VK_UP => "VK_UP",
        VK_RIGHT => "VK_RIGHT",
        VK_DOWN => "VK_DOWN",
        VK_INSERT => "VK_INSERT",
        VK_DELETE => "VK_DELETE",
        VK_LWIN => "VK_LWIN",
        VK_RWIN => "VK_RWIN",
        VK_MULTIPLY => "VK_MULTIPLY",
        VK_ADD => "VK_ADD",
        VK_SUBTRACT => "VK_SUBTRACT",
        VK_DECIMAL => "VK_DECIMAL",
        VK_DIVIDE => "VK_DIVIDE",
        VK_NUMLOCK => "VK_NUMLOCK",
        VK_SCROLL => "VK_SCROLL",
        VK_PRINTSCREEN => "VK_PRINTSCREEN",
        VK_LSHIFT => "VK_LSHIFT",
        VK_RSHIFT => "VK_RSHIFT",
        VK_LCONTROL => "VK_LCONTROL",
        VK_RCONTROL => "VK_RCONTROL",
        VK_LMENU => "VK_LMENU",
        VK_RMENU => "VK_RMENU",
        VK_OEM_1 => "VK_OEM_1",
        VK_OEM_PLUS => "VK_OEM_PLUS",
        VK_OEM_COMMA => "VK_OEM_COMMA",
        VK_OEM_MINUS => "VK_OEM_MINUS",
        VK_OEM_PERIOD => "VK_OEM_PERIOD",
        VK_OEM_2 => "VK_OEM_2",
        VK_OEM_3 => "VK_OEM_3",
        VK_OEM_4 => "VK_OEM_4",
        VK_OEM_5 => "VK_OEM_5",
        VK_OEM_6 => "VK_OEM_6",
        VK_OEM_7 => "VK_OEM_7",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_bases_match_ascii() {
        assert_eq!(VK_0, b'0');
        assert_eq!(VK_A, b'A');
    }

    #[test]
    fn test_vk_name_for_block_keys() {
        assert_eq!(vk_name(0x35), Some("VK_5"));
        assert_eq!(vk_name(0x5A), Some("VK_Z"));
        assert_eq!(vk_name(0x63), Some("VK_NUMPAD3"));
        assert_eq!(vk_name(0x7B), Some("VK_F12"));
    }

    #[test]
    fn test_vk_name_for_named_keys() {
        assert_eq!(vk_name(VK_ESCAPE), Some("VK_ESCAPE"));
        assert_eq!(vk_name(VK_LMENU), Some("VK_LMENU"));
        assert_eq!(vk_name(VK_OEM_7), Some("VK_OEM_7"));
    }

    #[test]
    fn test_vk_name_block_tables_line_up_with_codes() {
        for vk in (0x30u8..=0x39).chain(0x41..=0x5A) {
            assert_eq!(vk_name(vk), Some(format!("VK_{}", vk as char).as_str()));
        }
        for n in 0u8..=9 {
            assert_eq!(vk_name(VK_NUMPAD0 + n), Some(format!("VK_NUMPAD{n}").as_str()));
        }
        for n in 1u8..=12 {
            assert_eq!(vk_name(VK_F1 + n - 1), Some(format!("VK_F{n}").as_str()));
        }
    }

    #[test]
    fn test_vk_name_unknown_is_none() {
        // Mouse buttons and F13+ are never produced.
        for vk in [0x00u8, 0x01, 0x02, 0x7C, 0xFF] {
            assert_eq!(vk_name(vk), None, "VK 0x{vk:02X} should have no name");
        }
    }
}
