mod component;
mod highlight;

pub use component::ExcerptPanel;
