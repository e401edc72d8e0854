pub mod in_memory;
mod maud_renderer;

pub use maud_renderer::MaudPageRenderer;
