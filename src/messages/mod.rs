//! Message types handed from the store to the UI layer.

pub mod render;

pub use render::RenderState;
