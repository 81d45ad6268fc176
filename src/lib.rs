mod app;

pub mod components;
pub mod config;
pub mod error;
pub mod render;
pub mod state;
pub mod store;
pub mod stroke;
pub mod surface;
pub mod types;

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
