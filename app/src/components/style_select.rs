use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Sorted style names; empty while the catalog is loading or failed.
    pub styles: Vec<String>,
    pub selected: Option<String>,
    pub on_select: Callback<String>,
}

#[function_component(StyleSelect)]
pub fn style_select(props: &Props) -> Html {
    let on_change = {
        let on_select = props.on_select.clone();

        Callback::from(move |event: Event| {
            let value = event.target_unchecked_into::<HtmlSelectElement>().value();

            if !value.is_empty() {
                on_select.emit(value);
            }
        })
    };

    let options = props
        .styles
        .iter()
        .map(|name| {
            let selected = props.selected.as_deref() == Some(name.as_str());
            html! { <option value={name.clone()} selected={selected}>{ name }</option> }
        })
        .collect::<Html>();

    html! {
        <div class="field">
            <label for="style">{ "Select Beer Style" }</label>
            <select id="style" onchange={on_change}>
                <option value="" disabled=true selected={props.selected.is_none()}>
                    { "Choose a style" }
                </option>
                { options }
            </select>
        </div>
    }
}
