use unicode_normalization::UnicodeNormalization;

/// A keystroke the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A single printable character, composed to Unicode NFC.
    Char(char),
    Backspace,
    Escape,
    Enter,
}

impl Key {
    /// Classify a DOM `KeyboardEvent.key` value.
    ///
    /// Named keys other than Backspace/Escape/Enter (`"Shift"`, `"Tab"`,
    /// `"Dead"`, ...) and strings that do not compose to exactly one
    /// printable character return `None`.
    pub fn from_dom(key: &str) -> Option<Key> {
        match key {
            "Backspace" => return Some(Key::Backspace),
            "Escape" | "Esc" => return Some(Key::Escape),
            "Enter" => return Some(Key::Enter),
            _ => {}
        }
        // Decomposed input ("e" + U+0301) must match the precomposed form.
        let mut composed = key.nfc();
        match (composed.next(), composed.next()) {
            (Some(c), None) if !c.is_control() => Some(Key::Char(c)),
            _ => None,
        }
    }
}

/// Modifier keys held during a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// True if any command modifier (Ctrl/Alt/Meta) is held. Shift is not tracked.
    pub fn any(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}
