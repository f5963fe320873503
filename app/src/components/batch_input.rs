use models::{MAX_BATCH_LITERS, MIN_BATCH_LITERS};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Raw field content; the view owns validation.
    pub volume: String,
    pub on_change: Callback<String>,
}

#[function_component(BatchInput)]
pub fn batch_input(props: &Props) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();

        Callback::from(move |event: InputEvent| {
            on_change.emit(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    html! {
        <div class="field">
            <label for="batch">{ "Batch Size (Liters)" }</label>
            <input
                id="batch"
                type="number"
                min={MIN_BATCH_LITERS.to_string()}
                max={MAX_BATCH_LITERS.to_string()}
                step="1"
                value={props.volume.clone()}
                oninput={on_input}
            />
        </div>
    }
}
