//! WebGPU rendering module
//!
//! `shapes::scene` projects the world into colored triangles; `pipeline`
//! uploads and draws them.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, playfield_to_ndc};
pub use shapes::scene;
pub use vertex::Vertex;
