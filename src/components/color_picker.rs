use crate::types::Color;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ColorPickerProps {
    pub value: Color,
    pub on_change: Callback<Color>,
}

/// Native `<input type="color">`; emits the picked "#rrggbb" value as-is
#[function_component(ColorPicker)]
pub fn color_picker(props: &ColorPickerProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(Color::from(input.value()));
            }
        })
    };

    html! {
        <input
            type="color"
            value={props.value.to_string()}
            {oninput}
        />
    }
}
