use yew::prelude::*;

use crate::components::{ColorPicker, DrawingSurface};
use crate::config::BoardConfig;
use crate::store::{StoreEvent, StoreHandle};
use crate::types::Color;

#[derive(Properties, Clone, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: BoardConfig,
}

/// Owns the drawing store and shares it with the board through context
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let store = {
        let initial_color = props.config.initial_color.clone();
        (*use_memo((), move |_| {
            let store = StoreHandle::new();
            store.set_color(initial_color);
            store
        }))
        .clone()
    };
    let force_update = use_force_update();

    // The color input is controlled, so it must follow color changes
    {
        use_effect_with(store.clone(), move |store| {
            let subscription = store.subscribe(move |event, _| {
                if event == StoreEvent::ColorChanged {
                    force_update.force_update();
                }
            });

            move || drop(subscription)
        });
    }

    let on_color_change = {
        let store = store.clone();
        Callback::from(move |color: Color| store.set_color(color))
    };

    html! {
        <ContextProvider<StoreHandle> context={store.clone()}>
            <div>
                <DrawingSurface config={props.config.clone()} />
                <ColorPicker value={store.color()} on_change={on_color_change} />
            </div>
        </ContextProvider<StoreHandle>>
    }
}
