use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub struct NotFound;

impl Component for NotFound {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <h1>{ "404" }</h1>
                <Link<Route> to={Route::Home}>{ "Back to the start" }</Link<Route>>
            </>
        }
    }
}
