use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Landing page copy: feature card titles and descriptions.
const FEATURES: [(&str, &str); 4] = [
    (
        "Classic Beer Styles",
        "Choose from a wide variety of beer styles, from crisp lagers to unique craft brews.",
    ),
    (
        "Custom Ingredients",
        "Get precise measurements for malts, hops and yeasts based on your desired quantity.",
    ),
    (
        "Detailed Instructions",
        "Follow step-by-step brewing instructions with exact temperatures and timings.",
    ),
    (
        "Downloadable Recipes",
        "Save your custom recipe as a PDF for future reference.",
    ),
];

pub struct Home;

impl Component for Home {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let features = FEATURES
            .iter()
            .map(|(title, description)| {
                html! {
                    <div class="feature">
                        <h3>{ *title }</h3>
                        <p>{ *description }</p>
                    </div>
                }
            })
            .collect::<Html>();

        html! {
            <div class="home">
                <h1>{ "Create Your Perfect Beer Recipe" }</h1>
                <p>
                    { "Design your own personalized beer recipe by picking a style \
                       and the quantity you wish to brew." }
                </p>
                <Link<Route> classes={classes!("cta")} to={Route::Create}>{ "Get Started" }</Link<Route>>
                <div class="features">{ features }</div>
            </div>
        }
    }
}
