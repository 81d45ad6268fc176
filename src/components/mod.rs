mod color_picker;
mod drawing_surface;

pub use color_picker::*;
pub use drawing_surface::*;
