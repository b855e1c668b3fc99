mod component;
mod legend;
mod render;
mod state;

pub use component::SelfMapCanvas;
pub use legend::Legend;
