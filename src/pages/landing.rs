use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::components::loading::LoadingScreen;
use crate::components::nav::Nav;
use crate::config;
use crate::motion::scroll::use_scroll_progress;
use crate::sections::{
    about::About, contact::Contact, footer::Footer, hero::Hero, portfolio::Portfolio,
    services::Services, testimonials::Testimonials,
};
use crate::state::{UiAction, UiHandle, UiState};

/// Schedules the single `Load` after the configured delay. Dropping the
/// returned handle cancels it.
fn arm_loading_gate(dispatcher: UseReducerDispatcher<UiState>) -> Timeout {
    info!("loading gate armed for {}ms", config::LOADING_DELAY_MS);
    Timeout::new(config::LOADING_DELAY_MS, move || dispatcher.dispatch(UiAction::Load))
}

/// Owns the page state. Shows the loading screen until the gate timer
/// fires, then mounts everything else.
#[function_component(Landing)]
pub fn landing() -> Html {
    let ui = use_reducer_eq(UiState::default);

    {
        let dispatcher = ui.dispatcher();
        use_effect_with_deps(
            move |_| {
                let gate = arm_loading_gate(dispatcher);
                // Unmounting before the timer fires clears it
                move || drop(gate)
            },
            (),
        );
    }

    if ui.is_loading() {
        return html! { <LoadingScreen /> };
    }

    html! {
        <ContextProvider<UiHandle> context={ui.clone()}>
            <Page ui={ui.clone()} />
        </ContextProvider<UiHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct PageProps {
    ui: UiHandle,
}

/// The mounted page. Scroll tracking lives here so it only exists once the
/// loading gate has opened.
#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    let ui = &props.ui;

    {
        let dispatcher = ui.dispatcher();
        use_scroll_progress(move |p| dispatcher.dispatch(UiAction::ScrollUpdate(p)));
    }

    let on_toggle = {
        let dispatcher = ui.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(UiAction::ToggleMenu))
    };
    let on_close = {
        let dispatcher = ui.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(UiAction::CloseMenu))
    };

    html! {
        <div class="landing-page">
            <Nav
                scroll_progress={ui.scroll_progress}
                menu_open={ui.menu_open}
                {on_toggle}
                {on_close}
            />
            <Hero />
            <About />
            <Services />
            <Portfolio />
            <Testimonials />
            <Contact />
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_waits_two_seconds() {
        assert_eq!(config::LOADING_DELAY_MS, 2000);
    }

    #[test]
    fn test_gate_opens_once() {
        let ready = UiState::default().apply(UiAction::Load);
        assert!(!ready.is_loading());
        // a late second firing changes nothing
        assert_eq!(ready.apply(UiAction::Load), ready);
    }

    #[tokio::test]
    async fn test_first_render_is_the_loading_screen() {
        // effects never run here, so the gate timer is not armed
        let html = yew::ServerRenderer::<Landing>::new().render().await;
        assert!(html.contains("class=\"loading-screen\""));
        assert!(!html.contains("id=\"services\""));
        assert!(!html.contains("class=\"hero\""));
    }
}
