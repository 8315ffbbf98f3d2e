// this_file: crates/glyphcode-gen/src/ui.rs

//! Thin UI action gate.
//!
//! Turns high-level input events into an enabled-action set and a selected
//! tab. The generation pipeline never depends on this state; regeneration
//! is triggered by glyph/option changes, not by tab selection.

use bitflags::bitflags;

bitflags! {
    /// Actions currently available to the user.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Actions: u16 {
        const ADD_GLYPH = 1 << 0;
        const SAVE      = 1 << 1;
        const COPY      = 1 << 2;
        const CLOSE     = 1 << 3;
        const PRINT     = 1 << 4;
        const EXPORT    = 1 << 5;
        const TAB_EDIT  = 1 << 6;
        const TAB_CODE  = 1 << 7;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Edit,
    Code,
}

/// Direct interface manipulation (tab clicks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceAction {
    TabEdit,
    TabCode,
}

/// Document-level user activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserAction {
    #[default]
    Idle,
    LoadedFace,
    LoadedGlyph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Interface(InterfaceAction),
    User(UserAction),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub actions: Actions,
    pub last_user_action: UserAction,
    pub selected_tab: Tab,
}

impl UiState {
    /// Apply an input event, returning the resulting state. Pure; callers
    /// compare against the previous state to decide whether to re-render.
    pub fn apply(&self, event: InputEvent) -> UiState {
        let mut state = *self;
        match event {
            InputEvent::Interface(action) => match action {
                InterfaceAction::TabEdit => state.selected_tab = Tab::Edit,
                InterfaceAction::TabCode => state.selected_tab = Tab::Code,
            },
            InputEvent::User(action) => {
                state.last_user_action = action;
                match action {
                    UserAction::Idle => {
                        state.actions = Actions::empty();
                    }
                    UserAction::LoadedFace => {
                        state.actions = Actions::ADD_GLYPH
                            | Actions::SAVE
                            | Actions::CLOSE
                            | Actions::PRINT
                            | Actions::EXPORT
                            | Actions::TAB_CODE;
                    }
                    UserAction::LoadedGlyph => {
                        state.actions |= Actions::COPY;
                    }
                }
                state.actions |= Actions::TAB_EDIT;
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_clears_everything_but_edit_tab() {
        let state = UiState::default().apply(InputEvent::User(UserAction::Idle));
        assert_eq!(state.actions, Actions::TAB_EDIT);
        assert_eq!(state.last_user_action, UserAction::Idle);
    }

    #[test]
    fn test_loaded_face_enables_document_actions() {
        let state = UiState::default().apply(InputEvent::User(UserAction::LoadedFace));
        for expected in [
            Actions::ADD_GLYPH,
            Actions::SAVE,
            Actions::CLOSE,
            Actions::PRINT,
            Actions::EXPORT,
            Actions::TAB_CODE,
            Actions::TAB_EDIT,
        ] {
            assert!(state.actions.contains(expected), "{:?}", expected);
        }
        assert!(!state.actions.contains(Actions::COPY));
    }

    #[test]
    fn test_loaded_glyph_adds_copy() {
        let state = UiState::default()
            .apply(InputEvent::User(UserAction::LoadedFace))
            .apply(InputEvent::User(UserAction::LoadedGlyph));
        assert!(state.actions.contains(Actions::COPY));
        // Face-level actions survive a glyph load.
        assert!(state.actions.contains(Actions::SAVE));
    }

    #[test]
    fn test_tab_selection() {
        let state = UiState::default().apply(InputEvent::Interface(InterfaceAction::TabCode));
        assert_eq!(state.selected_tab, Tab::Code);
        let state = state.apply(InputEvent::Interface(InterfaceAction::TabEdit));
        assert_eq!(state.selected_tab, Tab::Edit);
        // Tab clicks never touch the action set.
        assert_eq!(state.actions, Actions::empty());
    }

    #[test]
    fn test_face_reload_resets_glyph_state() {
        let state = UiState::default()
            .apply(InputEvent::User(UserAction::LoadedFace))
            .apply(InputEvent::User(UserAction::LoadedGlyph))
            .apply(InputEvent::User(UserAction::LoadedFace));
        assert!(!state.actions.contains(Actions::COPY));
    }
}
