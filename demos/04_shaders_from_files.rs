//! One triangle with interleaved position + color. The shader sources are read
//! from `demos/shaders/`; the vertex stage hands the position to the fragment
//! stage, which uses it as the color.

use learn_glow::render_loop::{self, Scene};
use learn_glow::shader_program::ShaderProgram;
use learn_glow::shapes;
use learn_glow::vertex_array::VertexArray;
use learn_glow::vertex_layout::VertexLayout;
use learn_glow::window::WindowConfig;

const VS_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/demos/shaders/position_as_color.vert"
);
const FS_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/demos/shaders/position_as_color.frag"
);

struct ColoredTriangle {
    program: ShaderProgram,
    triangle: VertexArray,
}

impl ColoredTriangle {
    fn new(gl: &std::sync::Arc<glow::Context>) -> learn_glow::Result<Self> {
        let program = ShaderProgram::from_files(gl, VS_PATH, FS_PATH)?;
        let layout = VertexLayout::interleaved(&[3, 3]);
        let triangle = VertexArray::new(
            gl,
            glow::TRIANGLES,
            &shapes::TRIANGLE_VTX2XYZRGB,
            &layout,
        )?;
        Ok(ColoredTriangle { program, triangle })
    }
}

impl Scene for ColoredTriangle {
    fn paint(&self) {
        self.program.use_program();
        self.triangle.draw();
    }
}

fn main() -> std::process::ExitCode {
    learn_glow::logging::init_logging();
    let config = WindowConfig::default();
    render_loop::exit_code(render_loop::run_scene(&config, ColoredTriangle::new))
}
