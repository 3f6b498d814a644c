use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod contact;
mod content;
mod sections;
mod components {
    pub mod icons;
    pub mod reveal;
    pub mod toast;
}
mod pages {
    pub mod index;
    pub mod hero;
    pub mod about;
    pub mod portfolio;
    pub mod contact;
}

use components::toast::ToastProvider;
use pages::index::Index;

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
            html! { <Index /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <Link<Route> to={Route::Home}>
                        {"Back to the portfolio"}
                    </Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}'s portfolio", config::OWNER_FIRST_NAME);
    yew::Renderer::<App>::new().render();
}
