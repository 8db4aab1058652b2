//! Text folding used to compare keystrokes against words.
//!
//! Both sides go through the same fixed pipeline, independent of the
//! browser's locale: Unicode NFC composition, then per-character simple
//! lowercase. A character whose lowercase expands to several characters
//! (e.g. `İ`) is kept as is, so a folded word always has exactly as many
//! characters as its NFC form.

use unicode_normalization::UnicodeNormalization;

/// Case-fold a single (already composed) character.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Compose `text` to NFC.
pub fn compose(text: &str) -> String {
    text.nfc().collect()
}

/// NFC-compose and fold `text`, one entry per NFC character.
pub fn fold_str(text: &str) -> Vec<char> {
    text.nfc().map(fold_char).collect()
}
