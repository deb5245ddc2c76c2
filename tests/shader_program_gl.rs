//! Needs a display and an OpenGL 3.3 driver: `cargo test -- --ignored`.
//!
//! winit builds one event loop per process, so every check shares the single
//! window opened below. Failures are collected while the context is current and
//! asserted once the loop has returned.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use glow::HasContext as _;
use learn_glow::render_loop::{self, Scene};
use learn_glow::shader_program::{ShaderProgram, ShaderStage};
use learn_glow::vertex_array::VertexArray;
use learn_glow::vertex_layout::VertexLayout;
use learn_glow::window::WindowConfig;
use learn_glow::{shapes, Error};

const VS_SRC: &str = r#"
layout (location = 0) in vec3 aPos;
void main() {
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

const FS_ORANGE: &str = r#"
out vec4 FragColor;
void main() {
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

const FS_OLIVE: &str = r#"
out vec4 FragColor;
void main() {
    FragColor = vec4(0.5, 0.5, 0.2, 1.0);
}
"#;

/// reads a varying the vertex stage above never writes
const FS_UNMATCHED_INPUT: &str = r#"
in vec3 ourColor;
out vec4 FragColor;
void main() {
    FragColor = vec4(ourColor, 1.0);
}
"#;

const BROKEN: &str = "void main( {";

/// filled while the scene is built
#[derive(Default)]
struct Setup {
    fragment_error: Option<Error>,
    vertex_error: Option<Error>,
    sibling_error: Option<Error>,
    link_error: Option<Error>,
    programs: Vec<glow::Program>,
    num_vtxs: Vec<usize>,
}

struct TwoPrograms {
    gl: Arc<glow::Context>,
    units: Vec<(ShaderProgram, VertexArray)>,
    /// `glGetError` right after the first paint
    gl_error_after_paint: Arc<Mutex<Option<u32>>>,
}

impl TwoPrograms {
    fn new(
        gl: &Arc<glow::Context>,
        setup: Rc<RefCell<Setup>>,
        gl_error_after_paint: Arc<Mutex<Option<u32>>>,
    ) -> learn_glow::Result<Self> {
        {
            let mut r = setup.borrow_mut();
            r.fragment_error = ShaderProgram::new(gl, VS_SRC, BROKEN).err();
            r.vertex_error = ShaderProgram::new(gl, BROKEN, FS_ORANGE).err();
            r.sibling_error = ShaderProgram::new_siblings(gl, VS_SRC, &[FS_ORANGE, BROKEN]).err();
            r.link_error = ShaderProgram::new(gl, VS_SRC, FS_UNMATCHED_INPUT).err();
        }
        let programs = ShaderProgram::new_siblings(gl, VS_SRC, &[FS_ORANGE, FS_OLIVE])?;
        let layout = VertexLayout::positions(3);
        let triangles = [shapes::FIRST_TRIANGLE, shapes::SECOND_TRIANGLE]
            .iter()
            .map(|vtx2xyz| VertexArray::new(gl, glow::TRIANGLES, vtx2xyz, &layout))
            .collect::<learn_glow::Result<Vec<_>>>()?;
        {
            let mut r = setup.borrow_mut();
            r.programs = programs.iter().map(|p| p.program()).collect();
            r.num_vtxs = triangles.iter().map(|t| t.num_vtx()).collect();
        }
        Ok(TwoPrograms {
            gl: gl.clone(),
            units: programs.into_iter().zip(triangles).collect(),
            gl_error_after_paint,
        })
    }
}

impl Scene for TwoPrograms {
    fn paint(&self) {
        for (program, triangle) in &self.units {
            program.use_program();
            triangle.draw();
        }
        let err = unsafe { self.gl.get_error() };
        self.gl_error_after_paint.lock().unwrap().get_or_insert(err);
    }

    fn close_requested(&self) -> bool {
        self.gl_error_after_paint.lock().unwrap().is_some()
    }
}

#[test]
#[ignore = "opens a window"]
fn shader_errors_and_two_program_draw() {
    let setup = Rc::new(RefCell::new(Setup::default()));
    let gl_error_after_paint = Arc::new(Mutex::new(None));
    let config = WindowConfig {
        any_thread: true,
        ..Default::default()
    }
    .with_title("shader_program_gl");
    let result = {
        let setup = setup.clone();
        let gl_error_after_paint = gl_error_after_paint.clone();
        render_loop::run_scene(&config, move |gl| {
            TwoPrograms::new(gl, setup, gl_error_after_paint)
        })
    };
    assert!(result.is_ok(), "{:?}", result.err());

    let r = setup.borrow();
    assert!(matches!(
        r.fragment_error,
        Some(Error::ShaderCompile {
            stage: ShaderStage::Fragment,
            ..
        })
    ));
    assert!(matches!(
        r.vertex_error,
        Some(Error::ShaderCompile {
            stage: ShaderStage::Vertex,
            ..
        })
    ));
    assert!(matches!(
        r.sibling_error,
        Some(Error::ShaderCompile {
            stage: ShaderStage::Fragment,
            ..
        })
    ));
    match &r.link_error {
        Some(Error::ProgramLink { log }) => assert!(!log.is_empty()),
        other => panic!("expected a link error, got {other:?}"),
    }
    assert_eq!(r.programs.len(), 2);
    assert_ne!(r.programs[0], r.programs[1]);
    assert_eq!(r.num_vtxs, vec![3, 3]);
    assert_eq!(*gl_error_after_paint.lock().unwrap(), Some(glow::NO_ERROR));
}
