//! Keybinding registry: maps key events to dashboard actions.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NavDown,
    NavUp,
    PageDown,
    PageUp,
    CycleFocus,
    OpenLink,
    Refresh,
    CycleTheme,
}

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

/// Registry of keybindings.
///
/// Lookup is O(1) via HashMap.
pub struct KeybindingRegistry {
    lookup: HashMap<KeySpec, Action>,
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingRegistry {
    pub fn new() -> Self {
        let defaults = [
            (KeySpec::plain(KeyCode::Char('q')), Action::Quit),
            (KeySpec::plain(KeyCode::Esc), Action::Quit),
            // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
            (KeySpec::ctrl('c'), Action::Quit),
            (KeySpec::plain(KeyCode::Char('j')), Action::NavDown),
            (KeySpec::plain(KeyCode::Down), Action::NavDown),
            (KeySpec::plain(KeyCode::Char('k')), Action::NavUp),
            (KeySpec::plain(KeyCode::Up), Action::NavUp),
            (KeySpec::plain(KeyCode::PageDown), Action::PageDown),
            (KeySpec::ctrl('d'), Action::PageDown),
            (KeySpec::plain(KeyCode::PageUp), Action::PageUp),
            (KeySpec::ctrl('u'), Action::PageUp),
            (KeySpec::plain(KeyCode::Tab), Action::CycleFocus),
            (KeySpec::plain(KeyCode::Enter), Action::OpenLink),
            (KeySpec::plain(KeyCode::Char('o')), Action::OpenLink),
            (KeySpec::plain(KeyCode::Char('r')), Action::Refresh),
            (KeySpec::plain(KeyCode::Char('t')), Action::CycleTheme),
        ];
        Self {
            lookup: defaults.into_iter().collect(),
        }
    }

    /// Look up the action for a key event.
    ///
    /// SHIFT is ignored for character keys since the character itself
    /// already carries the case.
    pub fn action_for_key(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let modifiers = match code {
            KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        self.lookup.get(&KeySpec::new(code, modifiers)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_quit() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Esc, KeyModifiers::NONE),
            Some(Action::Quit)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_default_nav_keys() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Action::NavDown)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Down, KeyModifiers::NONE),
            Some(Action::NavDown)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('k'), KeyModifiers::NONE),
            Some(Action::NavUp)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Up, KeyModifiers::NONE),
            Some(Action::NavUp)
        );
    }

    #[test]
    fn test_open_link_keys() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::OpenLink)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('o'), KeyModifiers::NONE),
            Some(Action::OpenLink)
        );
    }

    #[test]
    fn test_shift_ignored_for_chars() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('r'), KeyModifiers::SHIFT),
            Some(Action::Refresh)
        );
    }

    #[test]
    fn test_unbound_key() {
        let reg = KeybindingRegistry::new();
        assert_eq!(reg.action_for_key(KeyCode::Char('x'), KeyModifiers::NONE), None);
        assert_eq!(reg.action_for_key(KeyCode::Char('j'), KeyModifiers::CONTROL), None);
    }
}
