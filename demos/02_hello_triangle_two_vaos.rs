//! Two triangles next to each other, each with its own vertex array, drawn
//! with a single program.

use learn_glow::render_loop::{self, Scene};
use learn_glow::shader_program::ShaderProgram;
use learn_glow::shapes;
use learn_glow::vertex_array::VertexArray;
use learn_glow::vertex_layout::VertexLayout;
use learn_glow::window::WindowConfig;

const VS_SRC: &str = r#"
layout (location = 0) in vec3 aPos;
void main() {
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

const FS_SRC: &str = r#"
out vec4 FragColor;
void main() {
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

struct TwoTriangles {
    program: ShaderProgram,
    triangles: [VertexArray; 2],
}

impl TwoTriangles {
    fn new(gl: &std::sync::Arc<glow::Context>) -> learn_glow::Result<Self> {
        let program = ShaderProgram::new(gl, VS_SRC, FS_SRC)?;
        let layout = VertexLayout::positions(3);
        let first = VertexArray::new(gl, glow::TRIANGLES, &shapes::FIRST_TRIANGLE, &layout)?;
        let second = VertexArray::new(gl, glow::TRIANGLES, &shapes::SECOND_TRIANGLE, &layout)?;
        Ok(TwoTriangles {
            program,
            triangles: [first, second],
        })
    }
}

impl Scene for TwoTriangles {
    fn paint(&self) {
        self.program.use_program();
        for triangle in &self.triangles {
            triangle.draw();
        }
    }
}

fn main() -> std::process::ExitCode {
    learn_glow::logging::init_logging();
    let config = WindowConfig::default();
    render_loop::exit_code(render_loop::run_scene(&config, TwoTriangles::new))
}
