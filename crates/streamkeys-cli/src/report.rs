//! Turning key arguments into translation reports.

use serde::Serialize;
use streamkeys_core::keymap::android::keycode_name;
use streamkeys_core::keymap::windows_vk::vk_name;
use streamkeys_core::{keycode_from_name, KeyNameError, KeyTranslator, NO_MAPPING};

use crate::config::OutputFormat;

/// Parses one key argument: a decimal Android key code, or a key name such
/// as `KEYCODE_ENTER` / `dpad_left`.
///
/// Numbers win, so `"5"` is key code 5; write `KEYCODE_5` for the digit key.
///
/// # Errors
///
/// Returns the [`KeyNameError`] from name resolution when the argument is
/// neither a number nor a known name.
pub fn parse_key_arg(arg: &str) -> Result<i32, KeyNameError> {
    match arg.trim().parse::<i32>() {
        Ok(keycode) => Ok(keycode),
        Err(_) => keycode_from_name(arg),
    }
}

/// The translation of one Android key code, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyReport {
    pub keycode: i32,
    pub name: Option<String>,
    pub mapped: bool,
    /// Prefixed host code, `0` when unmapped.
    pub code: u16,
    pub vk: Option<&'static str>,
    pub needs_shift: bool,
}

impl KeyReport {
    /// Looks `keycode` up once; an unmapped key logs a single diagnostic.
    pub fn new(keycode: i32) -> Self {
        let translated = KeyTranslator::translate_event(keycode);
        Self {
            keycode,
            name: keycode_name(keycode),
            mapped: translated.is_some(),
            code: translated.map_or(NO_MAPPING, |t| t.code.raw()),
            vk: translated.and_then(|t| vk_name(t.code.vk())),
            needs_shift: KeyTranslator::needs_shift(keycode),
        }
    }

    /// Renders the report as a single line in `format`.
    ///
    /// # Errors
    ///
    /// Propagates JSON serialization failures.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string(self),
            OutputFormat::Text => Ok(self.to_text()),
        }
    }

    fn to_text(&self) -> String {
        let name = self.name.as_deref().unwrap_or("?");
        if !self.mapped {
            return format!("{name} ({}) -> unmapped", self.keycode);
        }
        let mut line = format!(
            "{name} ({}) -> 0x{:04X} {}",
            self.keycode,
            self.code,
            self.vk.unwrap_or("?")
        );
        if self.needs_shift {
            line.push_str(" [shift]");
        }
        line
    }
}
