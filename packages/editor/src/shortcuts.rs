//! Keyboard bindings for the builder.
//!
//! | Chord | Command |
//! |---|---|
//! | `Mod+Z` | undo |
//! | `Mod+Y`, `Mod+Shift+Z` | redo |
//! | `Delete` | delete selection |
//! | `Mod+D` | duplicate selection |
//! | `Escape` | clear selection |
//!
//! `Mod` is Ctrl or Cmd. Selection-bound chords do nothing without a selection.

use crate::commands::Command;

/// A key press with its modifier state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    fn has_modifier(&self) -> bool {
        self.ctrl || self.meta
    }

    fn is(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }
}

/// Map a key press to the command it triggers
pub fn resolve(chord: &KeyChord, selection: Option<&str>) -> Option<Command> {
    if chord.has_modifier() && chord.is("z") {
        return Some(if chord.shift {
            Command::Redo
        } else {
            Command::Undo
        });
    }

    if chord.has_modifier() && chord.is("y") {
        return Some(Command::Redo);
    }

    let selected = selection?.to_string();

    if chord.is("Delete") {
        return Some(Command::DeleteComponent {
            component_id: selected,
        });
    }

    if chord.has_modifier() && chord.is("d") {
        return Some(Command::DuplicateComponent {
            component_id: selected,
        });
    }

    if chord.is("Escape") {
        return Some(Command::Select { component_id: None });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_chords() {
        assert_eq!(resolve(&KeyChord::new("z").ctrl(), None), Some(Command::Undo));
        assert_eq!(resolve(&KeyChord::new("z").meta(), None), Some(Command::Undo));
        assert_eq!(resolve(&KeyChord::new("y").ctrl(), None), Some(Command::Redo));
        assert_eq!(
            resolve(&KeyChord::new("Z").meta().shift(), None),
            Some(Command::Redo)
        );
    }

    #[test]
    fn test_selection_chords_need_selection() {
        assert_eq!(resolve(&KeyChord::new("Delete"), None), None);
        assert_eq!(resolve(&KeyChord::new("d").ctrl(), None), None);
        assert_eq!(resolve(&KeyChord::new("Escape"), None), None);
    }

    #[test]
    fn test_selection_chords() {
        assert_eq!(
            resolve(&KeyChord::new("Delete"), Some("text_1")),
            Some(Command::DeleteComponent {
                component_id: "text_1".to_string()
            })
        );
        assert_eq!(
            resolve(&KeyChord::new("D").meta(), Some("text_1")),
            Some(Command::DuplicateComponent {
                component_id: "text_1".to_string()
            })
        );
        assert_eq!(
            resolve(&KeyChord::new("Escape"), Some("text_1")),
            Some(Command::Select { component_id: None })
        );
    }

    #[test]
    fn test_plain_d_does_nothing() {
        assert_eq!(resolve(&KeyChord::new("d"), Some("text_1")), None);
    }
}
