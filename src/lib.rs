//! Introductory OpenGL programs on top of glow: shader programs, vertex
//! layouts, buffers, textures and a minimal render loop.

pub mod error;
pub mod logging;
pub mod mix_value;
pub mod render_loop;
pub mod shader_program;
pub mod shapes;
pub mod texture;
pub mod vertex_array;
pub mod vertex_layout;
pub mod window;

pub use error::{Error, Result};

/// GLSL header prepended to every stage source.
pub fn shader_version() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        "#version 300 es\nprecision mediump float;"
    } else {
        "#version 330 core"
    }
}
