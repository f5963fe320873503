use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub recipe: models::ScaledRecipe,
}

#[function_component(Recipe)]
pub fn recipe(Props { recipe }: &Props) -> Html {
    let malts = recipe
        .ingredients
        .malts
        .iter()
        .map(|malt| html! { <li>{ format!("{}: {:.2} kg", malt.name, malt.amount) }</li> })
        .collect::<Html>();

    let hops = recipe
        .ingredients
        .hops
        .iter()
        .map(|hop| {
            html! { <li>{ format!("{}: {:.2} kg ({})", hop.name, hop.amount, hop.timing) }</li> }
        })
        .collect::<Html>();

    let spices = (!recipe.ingredients.spices.is_empty()).then(|| {
        let items = recipe
            .ingredients
            .spices
            .iter()
            .map(|spice| {
                html! {
                    <li>{ format!("{}: {:.2} kg ({})", spice.name, spice.amount, spice.timing) }</li>
                }
            })
            .collect::<Html>();

        html! {
            <>
            <h4>{ "Spices:" }</h4>
            <ul>{ items }</ul>
            </>
        }
    });

    let instructions = recipe
        .instructions
        .iter()
        .map(|instruction| html! { <li>{ &instruction.description }</li> })
        .collect::<Html>();

    html! {
        <div class="recipe">
            <h2>{ format!("{} Recipe", recipe.name) }</h2>
            <p>{ format!("Batch Size: {} liters", recipe.batch_liters) }</p>
            <h3>{ "Ingredients" }</h3>
            <h4>{ "Malts:" }</h4>
            <ul>{ malts }</ul>
            <h4>{ "Hops:" }</h4>
            <ul>{ hops }</ul>
            { for spices }
            <h4>{ "Yeast:" }</h4>
            <p>{ recipe.ingredients.yeast.clone() }</p>
            <h4>{ "Water:" }</h4>
            <p>{ format!("{:.2} liters", recipe.ingredients.water_liters) }</p>
            <h3>{ "Brewing Instructions" }</h3>
            <ol>{ instructions }</ol>
        </div>
    }
}
