use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
}

/// Everything on the page that changes at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub phase: LoadPhase,
    pub menu_open: bool,
    /// Always within `[0, 1]`.
    pub scroll_progress: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Loading,
            menu_open: false,
            scroll_progress: 0.0,
        }
    }
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Pure transition function behind the yew reducer.
    pub fn apply(&self, action: UiAction) -> UiState {
        match action {
            UiAction::Load => {
                if self.is_loading() {
                    info!("loading finished, mounting page");
                }
                UiState {
                    phase: LoadPhase::Ready,
                    ..self.clone()
                }
            }
            UiAction::ToggleMenu => {
                debug!("mobile menu {}", if self.menu_open { "closed" } else { "opened" });
                UiState {
                    menu_open: !self.menu_open,
                    ..self.clone()
                }
            }
            UiAction::CloseMenu => UiState {
                menu_open: false,
                ..self.clone()
            },
            UiAction::ScrollUpdate(p) => {
                // nothing scrolls behind the loading screen
                if self.is_loading() {
                    return self.clone();
                }
                let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
                UiState {
                    scroll_progress: p,
                    ..self.clone()
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    Load,
    ToggleMenu,
    CloseMenu,
    ScrollUpdate(f64),
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Shared through a `ContextProvider` from the landing page down.
pub type UiHandle = UseReducerHandle<UiState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> UiState {
        UiState::default().apply(UiAction::Load)
    }

    #[test]
    fn test_starts_loading_with_menu_closed() {
        let state = UiState::default();
        assert!(state.is_loading());
        assert!(!state.menu_open);
        assert_eq!(state.scroll_progress, 0.0);
    }

    #[test]
    fn test_load_is_one_way() {
        let state = ready();
        assert_eq!(state.phase, LoadPhase::Ready);

        let again = state.apply(UiAction::Load);
        assert_eq!(again, state);

        for action in [UiAction::ToggleMenu, UiAction::CloseMenu, UiAction::ScrollUpdate(0.4)] {
            assert_eq!(state.apply(action).phase, LoadPhase::Ready);
        }
    }

    #[test]
    fn test_toggle_twice_returns_closed() {
        let open = ready().apply(UiAction::ToggleMenu);
        assert!(open.menu_open);
        let closed = open.apply(UiAction::ToggleMenu);
        assert!(!closed.menu_open);
    }

    #[test]
    fn test_close_menu_is_idempotent() {
        let open = ready().apply(UiAction::ToggleMenu);
        let closed = open.apply(UiAction::CloseMenu);
        assert!(!closed.menu_open);
        assert!(!closed.apply(UiAction::CloseMenu).menu_open);
        assert!(!ready().apply(UiAction::CloseMenu).menu_open);
    }

    #[test]
    fn test_scroll_update_is_clamped() {
        let state = ready();
        assert_eq!(state.apply(UiAction::ScrollUpdate(0.42)).scroll_progress, 0.42);
        assert_eq!(state.apply(UiAction::ScrollUpdate(1.7)).scroll_progress, 1.0);
        assert_eq!(state.apply(UiAction::ScrollUpdate(-0.2)).scroll_progress, 0.0);
        assert_eq!(state.apply(UiAction::ScrollUpdate(f64::NAN)).scroll_progress, 0.0);
    }

    #[test]
    fn test_scroll_ignored_while_loading() {
        let state = UiState::default().apply(UiAction::ScrollUpdate(0.8));
        assert_eq!(state.scroll_progress, 0.0);
        assert!(state.is_loading());
    }

    #[test]
    fn test_reduce_keeps_rc_when_unchanged() {
        let state = Rc::new(ready());
        let same = state.clone().reduce(UiAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &same));

        let changed = state.clone().reduce(UiAction::ToggleMenu);
        assert!(!Rc::ptr_eq(&state, &changed));
    }
}
