//! Keyboard Shortcuts
//!
//! Decodes modifier+key chords into checklist commands.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Modifier+R: confirm-gated reset
    Reset,
    /// Modifier+S: "saved" announcement
    SaveAnnounce,
}

/// Key chord as reported by a keydown event
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyChord<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
}

impl Shortcut {
    /// Ctrl or Meta plus `r`/`s`; the caller suppresses the host default on a hit
    pub fn from_chord(chord: &KeyChord<'_>) -> Option<Self> {
        if !(chord.ctrl || chord.meta) {
            return None;
        }
        if chord.key.eq_ignore_ascii_case("r") {
            Some(Shortcut::Reset)
        } else if chord.key.eq_ignore_ascii_case("s") {
            Some(Shortcut::SaveAnnounce)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(key: &str, ctrl: bool, meta: bool) -> KeyChord<'_> {
        KeyChord { key, ctrl, meta }
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(Shortcut::from_chord(&chord("r", true, false)), Some(Shortcut::Reset));
        assert_eq!(Shortcut::from_chord(&chord("S", false, true)), Some(Shortcut::SaveAnnounce));
        assert_eq!(Shortcut::from_chord(&chord("r", false, false)), None);
        assert_eq!(Shortcut::from_chord(&chord("x", true, false)), None);
    }
}
