use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Mount state of an element that animates out before it is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Absent,
    Present,
    Exiting,
}

impl Presence {
    pub fn follow(self, open: bool) -> Self {
        if open {
            Presence::Present
        } else {
            self.hide()
        }
    }

    pub fn hide(self) -> Self {
        match self {
            Presence::Present => Presence::Exiting,
            other => other,
        }
    }

    pub fn exit_complete(self) -> Self {
        match self {
            Presence::Exiting => Presence::Absent,
            other => other,
        }
    }

    pub fn is_mounted(self) -> bool {
        !matches!(self, Presence::Absent)
    }
}

/// Tracks `open`, keeping the element mounted in `Exiting` for `exit_ms`
/// after it closes. Reopening during the exit cancels the pending unmount.
#[hook]
pub fn use_presence(open: bool, exit_ms: u32) -> Presence {
    let presence = use_state_eq(|| if open { Presence::Present } else { Presence::Absent });
    let exit_timer = use_mut_ref(|| None::<Timeout>);

    {
        let presence = presence.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let next = (*presence).follow(*open);
                exit_timer.borrow_mut().take();

                if next == Presence::Exiting {
                    let setter = presence.setter();
                    *exit_timer.borrow_mut() = Some(Timeout::new(exit_ms, move || {
                        setter.set(next.exit_complete());
                    }));
                }
                presence.set(next);

                // dropping the Timeout clears it
                move || {
                    exit_timer.borrow_mut().take();
                }
            },
            open,
        );
    }

    *presence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_cycle_unmounts() {
        let mut p = Presence::Absent;
        p = p.follow(true);
        assert_eq!(p, Presence::Present);
        assert!(p.is_mounted());

        p = p.follow(false);
        assert_eq!(p, Presence::Exiting);
        assert!(p.is_mounted(), "exit animation must finish before unmount");

        p = p.exit_complete();
        assert_eq!(p, Presence::Absent);
        assert!(!p.is_mounted());
    }

    #[test]
    fn test_reopen_during_exit() {
        let p = Presence::Present.follow(false).follow(true);
        assert_eq!(p, Presence::Present);
        // a stale exit completion does not unmount an open element
        assert_eq!(p.exit_complete(), Presence::Present);
    }

    #[test]
    fn test_closing_absent_is_noop() {
        assert_eq!(Presence::Absent.follow(false), Presence::Absent);
        assert_eq!(Presence::Absent.exit_complete(), Presence::Absent);
    }
}
