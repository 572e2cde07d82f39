use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::error::DomError;

/// Remembers whether an element has ever entered the viewport.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EntryLatch {
    entered: bool,
}

impl EntryLatch {
    /// Feeds one intersection report. Returns true only for the report that
    /// first sees the element on screen; later reports, in or out, are ignored.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.entered || !intersecting {
            return false;
        }
        self.entered = true;
        true
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }
}

type EntryCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An `IntersectionObserver` watching a single element until it first
/// intersects. Dropping it disconnects the observer.
struct EntryObserver {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl EntryObserver {
    fn watch(target: &Element, on_enter: impl Fn() + 'static) -> Result<Self, DomError> {
        let latch = Rc::new(Cell::new(EntryLatch::default()));

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut state = latch.get();
            if state.has_entered() {
                return;
            }

            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            if state.observe(intersecting) {
                latch.set(state);
                // one-shot: nothing left to watch
                observer.disconnect();
                on_enter();
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config::VIEWPORT_THRESHOLD));
        init.set_root_margin(config::VIEWPORT_ROOT_MARGIN);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for EntryObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// True once the referenced element has intersected the viewport; never
/// goes back to false for the lifetime of the component.
#[hook]
pub fn use_viewport_entry(node: NodeRef) -> bool {
    let entered = use_state_eq(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = if *entered {
                    None
                } else if let Some(target) = node.cast::<Element>() {
                    let setter = entered.setter();
                    match EntryObserver::watch(&target, move || {
                        debug!("element entered viewport");
                        setter.set(true);
                    }) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            warn!("viewport observer unavailable, revealing immediately: {}", e);
                            entered.set(true);
                            None
                        }
                    }
                } else {
                    entered.set(true);
                    None
                };

                move || drop(observer)
            },
            node,
        );
    }

    *entered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once() {
        let mut latch = EntryLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.has_entered());

        assert!(latch.observe(true));
        assert!(latch.has_entered());

        // scrolled out and back in
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.has_entered());
    }

    #[test]
    fn test_latch_ignores_reports_until_intersecting() {
        let mut latch = EntryLatch::default();
        for _ in 0..5 {
            assert!(!latch.observe(false));
        }
        assert!(latch.observe(true));
    }
}
