//! Indexed quad blending two textures. Up/Down change the blend factor.

use learn_glow::mix_value::MixValue;
use learn_glow::render_loop::{self, FrameInput, Scene};
use learn_glow::shader_program::ShaderProgram;
use learn_glow::shapes;
use learn_glow::texture::Texture;
use learn_glow::vertex_array::VertexArray;
use learn_glow::vertex_layout::VertexLayout;
use learn_glow::window::WindowConfig;

const VS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/shaders/textured.vert");
const FS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/shaders/texture_mix.frag");
const CONTAINER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/asset/container.png");
const FACE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/asset/awesomeface.png");

struct TexturedQuad {
    program: ShaderProgram,
    quad: VertexArray,
    textures: [Texture; 2],
    mix_value: MixValue,
}

impl TexturedQuad {
    fn new(gl: &std::sync::Arc<glow::Context>) -> learn_glow::Result<Self> {
        let program = ShaderProgram::from_files(gl, VS_PATH, FS_PATH)?;
        let layout = VertexLayout::interleaved(&[3, 3, 2]);
        let mut quad = VertexArray::new(
            gl,
            glow::TRIANGLES,
            &shapes::QUAD_VTX2XYZRGBUV,
            &layout,
        )?;
        quad.set_elem2vtx(&shapes::QUAD_TRI2VTX)?;
        let container = Texture::from_file(gl, CONTAINER_PATH, false)?;
        // image rows start at the top, texture coordinates at the bottom
        let face = Texture::from_file(gl, FACE_PATH, true)?;
        program.use_program();
        program.set_int("texture1", 0);
        program.set_int("texture2", 1);
        Ok(TexturedQuad {
            program,
            quad,
            textures: [container, face],
            mix_value: MixValue::default(),
        })
    }
}

impl Scene for TexturedQuad {
    fn process_input(&mut self, input: &FrameInput) {
        if input.up {
            self.mix_value.increase();
        }
        if input.down {
            self.mix_value.decrease();
        }
    }

    fn paint(&self) {
        for (unit, texture) in self.textures.iter().enumerate() {
            texture.bind(unit as u32);
        }
        self.program.use_program();
        self.program.set_float("mixValue", self.mix_value.get());
        self.quad.draw();
    }
}

fn main() -> std::process::ExitCode {
    learn_glow::logging::init_logging();
    let config = WindowConfig::default().with_title("LearnOpenGL - textures");
    render_loop::exit_code(render_loop::run_scene(&config, TexturedQuad::new))
}
