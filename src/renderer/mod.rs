//! WebGPU rendering module
//!
//! The whole scene is flat colored triangles: rounded rects for teeth, fans
//! for germs and the tongue, quads for the brush. Layout doubles as the
//! hit-testing service for the input layer.

pub mod layout;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use layout::MouthLayout;
pub use pipeline::RenderState;
pub use scene::build_scene;
