//! Creation view: pick a style, pick a batch size, generate, download.

use crate::components::{BatchInput, Recipe, StyleSelect};
use crate::state::Creator;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Path of the catalog file served next to the app bundle.
const CATALOG_PATH: &str = "/recipes.json";

/// Artificial delay before a scaled recipe appears. Drives the loading
/// affordance only; nothing times out or retries around it.
const SCALE_DELAY_MS: u32 = 1_500;

pub enum Msg {
    CatalogLoaded(models::Catalog),
    CatalogFailed(String),
    StyleSelected(String),
    VolumeChanged(String),
    Generate,
    ScalingDone,
    Export,
}

pub struct Create {
    creator: Creator,
    /// Handle of the running scaling delay. Dropping it cancels the
    /// in-flight generation, which is exactly what a style change wants.
    delay: Option<Timeout>,
}

async fn fetch_catalog() -> anyhow::Result<models::Catalog> {
    Ok(gloo_net::http::Request::get(CATALOG_PATH)
        .send()
        .await?
        .json()
        .await?)
}

impl Component for Create {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();

        // One fetch per view activation, no retry.
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_catalog().await {
                Ok(catalog) => link.send_message(Msg::CatalogLoaded(catalog)),
                Err(err) => link.send_message(Msg::CatalogFailed(err.to_string())),
            }
        });

        Self {
            creator: Creator::new(),
            delay: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CatalogLoaded(catalog) => {
                self.creator.catalog_loaded(catalog);
                true
            }
            Msg::CatalogFailed(err) => {
                log::error!("Loading the recipe catalog failed: {}", err);
                self.creator.catalog_failed();
                true
            }
            Msg::StyleSelected(name) => {
                self.delay = None;
                self.creator.select_style(name);
                true
            }
            Msg::VolumeChanged(raw) => {
                self.creator.set_volume(raw);
                true
            }
            Msg::Generate => {
                if !self.creator.begin_scaling() {
                    return false;
                }

                let link = ctx.link().clone();
                self.delay = Some(Timeout::new(SCALE_DELAY_MS, move || {
                    link.send_message(Msg::ScalingDone)
                }));
                true
            }
            Msg::ScalingDone => {
                self.delay = None;
                self.creator.finish_scaling();
                true
            }
            Msg::Export => {
                if let Some(recipe) = self.creator.recipe() {
                    export(recipe);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let generate_label = if self.creator.scaling() {
            "Generating Recipe..."
        } else {
            "Generate Recipe"
        };

        html! {
            <div class="creator">
                <h1>{ "Create Your Recipe" }</h1>
                <StyleSelect
                    styles={self.creator.styles()}
                    selected={self.creator.selected_style().map(String::from)}
                    on_select={link.callback(Msg::StyleSelected)}
                />
                <BatchInput
                    volume={self.creator.volume_field().to_string()}
                    on_change={link.callback(Msg::VolumeChanged)}
                />
                <button
                    onclick={link.callback(|_| Msg::Generate)}
                    disabled={!self.creator.can_generate()}
                >
                    { generate_label }
                </button>
                <button
                    onclick={link.callback(|_| Msg::Export)}
                    disabled={!self.creator.can_export()}
                >
                    { "Download PDF Recipe" }
                </button>
                {
                    match self.creator.recipe() {
                        Some(recipe) => html! { <Recipe recipe={recipe.clone()}/> },
                        None if self.creator.scaling() => html! {},
                        None => html! {
                            <p class="hint">
                                { "Select your preferred beer style and batch size to \
                                   generate a custom recipe." }
                            </p>
                        },
                    }
                }
            </div>
        }
    }
}

/// Render the recipe sheet and hand it to the browser as a download.
fn export(recipe: &models::ScaledRecipe) {
    match pdf::render(recipe) {
        Ok(bytes) => {
            let name = pdf::file_name(&recipe.name);

            if let Err(err) = crate::download::save(&name, &bytes, "application/pdf") {
                log::error!("Offering the recipe download failed: {}", err);
            }
        }
        Err(err) => log::error!("Rendering the recipe sheet failed: {}", err),
    }
}
