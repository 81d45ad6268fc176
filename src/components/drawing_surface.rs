use crate::config::BoardConfig;
use crate::error::SurfaceError;
use crate::store::StoreHandle;
use crate::surface::SurfaceBinding;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

/// Props for the drawing surface component
#[derive(Properties, Clone, PartialEq)]
pub struct DrawingSurfaceProps {
    /// Size, border, pen and rendering mode
    #[prop_or_default]
    pub config: BoardConfig,
}

/// Canvas that captures strokes into the store from the surrounding
/// `ContextProvider<StoreHandle>`.
///
/// Listeners are attached on mount and released on unmount, or rebound when
/// the store or config changes.
#[function_component(DrawingSurface)]
pub fn drawing_surface(props: &DrawingSurfaceProps) -> Html {
    let store = use_context::<StoreHandle>()
        .expect("DrawingSurface must be rendered inside a ContextProvider<StoreHandle>");
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();

        use_effect_with((store, props.config.clone()), move |(store, config)| {
            let binding = canvas_ref
                .cast::<HtmlCanvasElement>()
                .ok_or(SurfaceError::NotMounted)
                .and_then(|canvas| SurfaceBinding::mount(canvas, store.clone(), config));

            let binding = match binding {
                Ok(binding) => Some(binding),
                Err(e) => {
                    log::error!("Failed to bind drawing surface: {}", e);
                    None
                }
            };

            move || drop(binding)
        });
    }

    let config = &props.config;

    html! {
        <canvas
            ref={canvas_ref}
            width={config.width.to_string()}
            height={config.height.to_string()}
            style={config.canvas_style()}
        />
    }
}
