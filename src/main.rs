use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod element;
mod animation;
mod motion;
mod scroll;
mod contact;
mod sections {
    pub mod header;
    pub mod hero;
    pub mod about;
    pub mod projects;
    pub mod contact;
    pub mod footer;
    pub mod progress_bar;
    pub mod cursor;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
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
