//! Integration tests pinning the full Android → host translation table.
//!
//! The expected values are written as raw numbers (Android `KEYCODE_*` value,
//! host VK byte) rather than through the crate's constants, so a typo in a
//! constant cannot hide a wrong mapping.

use streamkeys_core::{keycode_from_name, KeyTranslator, StreamKeyCode, NO_MAPPING};

/// (Android key code, expected VK byte) for every non-range key.
const EXPLICIT_MAPPINGS: &[(i32, u8)] = &[
    (57, 0xA4),  // ALT_LEFT
    (58, 0xA5),  // ALT_RIGHT
    (170, 0x5B), // TV
    (73, 0xDC),  // BACKSLASH
    (115, 20),   // CAPS_LOCK
    (28, 12),    // CLEAR
    (55, 0xBC),  // COMMA
    (113, 0xA2), // CTRL_LEFT
    (114, 0xA3), // CTRL_RIGHT
    (67, 8),     // DEL
    (66, 0x0D),  // ENTER
    (81, 0xBB),  // PLUS
    (70, 0xBB),  // EQUALS
    (111, 27),   // ESCAPE
    (112, 0x2E), // FORWARD_DEL
    (124, 0x2D), // INSERT
    (71, 0xDB),  // LEFT_BRACKET
    (117, 0x5B), // META_LEFT
    (118, 0x5C), // META_RIGHT
    (69, 0xBD),  // MINUS
    (123, 35),   // MOVE_END
    (122, 36),   // MOVE_HOME
    (143, 144),  // NUM_LOCK
    (93, 34),    // PAGE_DOWN
    (92, 33),    // PAGE_UP
    (56, 0xBE),  // PERIOD
    (72, 0xDD),  // RIGHT_BRACKET
    (116, 145),  // SCROLL_LOCK
    (74, 0xBA),  // SEMICOLON
    (59, 0xA0),  // SHIFT_LEFT
    (60, 0xA1),  // SHIFT_RIGHT
    (76, 0xBF),  // SLASH
    (62, 32),    // SPACE
    (120, 154),  // SYSRQ
    (173, 9),    // DVR
    (21, 37),    // DPAD_LEFT
    (22, 39),    // DPAD_RIGHT
    (19, 38),    // DPAD_UP
    (20, 40),    // DPAD_DOWN
    (68, 192),   // GRAVE
    (75, 0xDE),  // APOSTROPHE
    (121, 19),   // BREAK
    (154, 0x6F), // NUMPAD_DIVIDE
    (155, 0x6A), // NUMPAD_MULTIPLY
    (156, 0x6D), // NUMPAD_SUBTRACT
    (157, 0x6B), // NUMPAD_ADD
    (158, 0x6E), // NUMPAD_DOT
    (77, 50),    // AT
    (18, 51),    // POUND
    (17, 56),    // STAR
];

#[test]
fn test_explicit_mappings_match_host_expectations() {
    for &(keycode, vk) in EXPLICIT_MAPPINGS {
        let result = KeyTranslator::translate(keycode);
        assert_eq!(
            result,
            0x8000 | u16::from(vk),
            "Android key {keycode} should map to VK 0x{vk:02X}"
        );
    }
}

#[test]
fn test_range_blocks_use_raw_android_values() {
    // Digits 7..=16, letters 29..=54, numpad 144..=153, F-keys 131..=142.
    let blocks = [(7, 16, 48u16), (29, 54, 65), (144, 153, 96), (131, 142, 112)];
    for (first, last, base) in blocks {
        for keycode in first..=last {
            let expected = 0x8000 | (base + (keycode - first) as u16);
            assert_eq!(KeyTranslator::translate(keycode), expected, "keycode {keycode}");
        }
    }
}

#[test]
fn test_mapped_set_is_exactly_ranges_plus_table() {
    // Arrange: everything the translator should know about
    let mut known: Vec<i32> = EXPLICIT_MAPPINGS.iter().map(|&(k, _)| k).collect();
    known.extend(7..=16);
    known.extend(29..=54);
    known.extend(144..=153);
    known.extend(131..=142);

    // Act / Assert: every other code in a generous window is unmapped
    for keycode in -64..=512 {
        let mapped = KeyTranslator::translate(keycode) != NO_MAPPING;
        assert_eq!(mapped, known.contains(&keycode), "keycode {keycode}");
    }
}

#[test]
fn test_keyboard_tab_is_not_mapped() {
    // KEYCODE_TAB (61) has no entry; only the DVR remote button sends Tab.
    assert_eq!(KeyTranslator::translate(61), NO_MAPPING);
}

#[test]
fn test_needs_shift_raw_values() {
    for keycode in [77, 18, 81, 17] {
        assert!(KeyTranslator::needs_shift(keycode));
    }
    for keycode in [-1, 70, 9, 15, 61] {
        assert!(!KeyTranslator::needs_shift(keycode));
    }
}

#[test]
fn test_translated_output_validates_as_stream_key_code() {
    for &(keycode, _) in EXPLICIT_MAPPINGS {
        let raw = KeyTranslator::translate(keycode);
        assert!(StreamKeyCode::from_raw(raw).is_ok());
    }
    assert!(StreamKeyCode::from_raw(KeyTranslator::translate(-1)).is_err());
}

#[test]
fn test_names_resolve_then_translate() {
    let keycode = keycode_from_name("KEYCODE_NUMPAD_ADD").unwrap();
    assert_eq!(KeyTranslator::translate(keycode), 0x806B);
}

#[test]
fn test_translate_event_serializes_to_json() {
    let event = KeyTranslator::translate_event(77).unwrap();
    let json = serde_json::to_value(event).unwrap();
    assert_eq!(json["code"], 0x8032);
    assert_eq!(json["needs_shift"], true);
}
