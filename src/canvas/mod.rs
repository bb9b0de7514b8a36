mod canvas_transform;
mod uniform;

pub use canvas_transform::CanvasTransform;
pub use uniform::Uniforms;
