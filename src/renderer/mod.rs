//! WebGPU rendering

pub mod batch;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::StrokeBatch;
pub use pipeline::RenderState;
pub use vertex::Vertex;
