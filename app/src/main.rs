#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

mod components;
mod download;
mod pages;
mod state;

use components::Header;
use yew::prelude::*;
use yew_router::prelude::*;

/// Application routes. The catalog and any derived recipe live inside the
/// creation page, so none of the routes carry parameters.
#[derive(Clone, PartialEq, Routable)]
enum Route {
    #[at("/")]
    Home,
    #[at("/create")]
    Create,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: &Route) -> Html {
    match routes {
        Route::Home => html! { <pages::Home/> },
        Route::Create => html! { <pages::Create/> },
        Route::NotFound => html! { <pages::NotFound/> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Header/>
            <main>
                <Switch<Route> render={Switch::render(switch)} />
            </main>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::start_app::<App>();
}
