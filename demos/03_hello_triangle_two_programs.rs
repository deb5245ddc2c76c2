//! Two triangles, each drawn by its own program. Both programs share one
//! compiled vertex stage and differ only in the fragment color.

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

fn fragment_source(rgba: [f32; 4]) -> String {
    let [r, g, b, a] = rgba;
    format!(
        r#"
out vec4 FragColor;
void main() {{
    FragColor = vec4({r:?}, {g:?}, {b:?}, {a:?});
}}
"#
    )
}

struct DrawUnit {
    program: ShaderProgram,
    triangle: VertexArray,
}

struct TwoPrograms {
    units: Vec<DrawUnit>,
}

impl TwoPrograms {
    fn new(gl: &std::sync::Arc<glow::Context>) -> learn_glow::Result<Self> {
        let fs_orange = fragment_source(shapes::ORANGE);
        let fs_olive = fragment_source(shapes::OLIVE);
        let programs =
            ShaderProgram::new_siblings(gl, VS_SRC, &[fs_orange.as_str(), fs_olive.as_str()])?;
        let layout = VertexLayout::positions(3);
        let triangles = [shapes::FIRST_TRIANGLE, shapes::SECOND_TRIANGLE]
            .iter()
            .map(|vtx2xyz| VertexArray::new(gl, glow::TRIANGLES, vtx2xyz, &layout))
            .collect::<learn_glow::Result<Vec<_>>>()?;
        let units = programs
            .into_iter()
            .zip(triangles)
            .map(|(program, triangle)| DrawUnit { program, triangle })
            .collect();
        Ok(TwoPrograms { units })
    }
}

impl Scene for TwoPrograms {
    fn paint(&self) {
        for unit in &self.units {
            unit.program.use_program();
            unit.triangle.draw();
        }
    }
}

fn main() -> std::process::ExitCode {
    learn_glow::logging::init_logging();
    let config = WindowConfig::default();
    render_loop::exit_code(render_loop::run_scene(&config, TwoPrograms::new))
}
