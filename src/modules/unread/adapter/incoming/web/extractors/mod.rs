mod viewer;

pub use viewer::Viewer;
