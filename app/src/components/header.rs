use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <Link<Route> classes={classes!("brand")} to={Route::Home}>{ "BrewNation" }</Link<Route>>
        </header>
    }
}
