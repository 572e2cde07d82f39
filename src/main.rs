use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod error;
mod state;
mod theme;
mod motion {
    pub mod transform;
    pub mod variants;
    pub mod viewport;
    pub mod scroll;
    pub mod presence;
    pub mod orbit;
}
mod components {
    pub mod icon;
    pub mod ui;
    pub mod reveal;
    pub mod section_header;
    pub mod loading;
    pub mod nav;
    pub mod contact_form;
}
mod sections {
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod portfolio;
    pub mod testimonials;
    pub mod contact;
    pub mod footer;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use theme::GlobalStyles;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyles />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
