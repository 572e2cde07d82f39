use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, Window};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::error::{self, DomError};
use crate::motion::transform::ScrollMetrics;

pub fn read_metrics() -> Result<ScrollMetrics, DomError> {
    let window = error::window()?;
    let root = error::root_element()?;
    let offset = window.scroll_y()?;
    Ok(ScrollMetrics::new(
        offset,
        root.scroll_height() as f64,
        root.client_height() as f64,
    ))
}

/// Passive window scroll listener, removed when dropped.
struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    fn attach(on_progress: impl Fn(f64) + 'static) -> Result<Self, DomError> {
        let window = error::window()?;

        let callback = Closure::wrap(Box::new(move || match read_metrics() {
            Ok(metrics) => on_progress(metrics.progress()),
            Err(e) => warn!("could not read scroll position: {}", e),
        }) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        // Initial read so a restored scroll position shows up before the first event
        callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&JsValue::NULL)?;

        Ok(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

/// Reports document scroll progress in `[0, 1]` on every scroll and resize.
#[hook]
pub fn use_scroll_progress<F>(on_progress: F)
where
    F: Fn(f64) + 'static,
{
    let on_progress = Rc::new(on_progress);

    {
        let on_progress = on_progress.clone();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::attach(move |p| on_progress(p))
                    .map_err(|e| warn!("scroll tracking disabled: {}", e))
                    .ok();
                move || drop(listener)
            },
            (),
        );
    }

    use_event_with_window("resize", move |_: Event| match read_metrics() {
        Ok(metrics) => on_progress(metrics.progress()),
        Err(e) => warn!("could not read scroll position: {}", e),
    });
}
