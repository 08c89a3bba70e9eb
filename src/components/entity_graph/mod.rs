mod component;
mod projection;
mod render;
pub mod scale;
mod state;

pub use component::EntityGraphSvg;
pub use scale::type_color;
pub use state::SelectionState;
