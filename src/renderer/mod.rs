//! Rendering module
//!
//! The scene is drawn immediate-mode onto a [`Canvas`]; the host records it
//! into a [`ShapeList`], tessellates it and hands the triangles to WebGPU.

pub mod canvas;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, Color, Rect, Shape, ShapeList};
pub use pipeline::RenderState;
pub use scene::draw_scene;
