//! Vertex + fragment stages linked into a program object.

use std::path::Path;
use std::sync::Arc;

use glow::HasContext as _;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("VERTEX"),
            ShaderStage::Fragment => f.write_str("FRAGMENT"),
        }
    }
}

/// A compiled stage. The shader object is deleted when this goes out of scope,
/// whether or not linking succeeded.
struct CompiledStage<'a> {
    gl: &'a glow::Context,
    shader: glow::Shader,
}

impl CompiledStage<'_> {
    fn compile<'a>(
        gl: &'a glow::Context,
        stage: ShaderStage,
        source: &str,
    ) -> Result<CompiledStage<'a>> {
        let shader = unsafe { gl.create_shader(stage.gl_type()) }.map_err(|reason| {
            Error::GlObject {
                what: "shader",
                reason,
            }
        })?;
        let compiled = CompiledStage { gl, shader };
        unsafe {
            gl.shader_source(shader, &format!("{}\n{source}", crate::shader_version()));
            gl.compile_shader(shader);
            if !gl.get_shader_compile_status(shader) {
                return Err(Error::ShaderCompile {
                    stage,
                    log: gl.get_shader_info_log(shader),
                });
            }
        }
        log::debug!("compiled {stage} stage");
        Ok(compiled)
    }
}

impl Drop for CompiledStage<'_> {
    fn drop(&mut self) {
        unsafe { self.gl.delete_shader(self.shader) };
    }
}

/// A linked program. Uniform locations are looked up on every `set_*` call;
/// an unknown name resolves to no location and the call does nothing.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    program: glow::Program,
}

impl ShaderProgram {
    pub fn new(
        gl: &Arc<glow::Context>,
        vertex_shader_source: &str,
        fragment_shader_source: &str,
    ) -> Result<Self> {
        let vs = CompiledStage::compile(gl, ShaderStage::Vertex, vertex_shader_source)?;
        let fs = CompiledStage::compile(gl, ShaderStage::Fragment, fragment_shader_source)?;
        Self::link(gl, &vs, &fs)
    }

    /// Reads both stage sources from disk, then behaves like [`ShaderProgram::new`].
    pub fn from_files(
        gl: &Arc<glow::Context>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let vs_src = read_source(vertex_path)?;
        let fs_src = read_source(fragment_path)?;
        Self::new(gl, &vs_src, &fs_src)
    }

    /// Compiles the vertex stage once and links it against each fragment stage,
    /// giving one program per fragment source, in order.
    pub fn new_siblings(
        gl: &Arc<glow::Context>,
        vertex_shader_source: &str,
        fragment_shader_sources: &[&str],
    ) -> Result<Vec<Self>> {
        let vs = CompiledStage::compile(gl, ShaderStage::Vertex, vertex_shader_source)?;
        let fss = fragment_shader_sources
            .iter()
            .map(|src| CompiledStage::compile(gl, ShaderStage::Fragment, src))
            .collect::<Result<Vec<_>>>()?;
        fss.iter().map(|fs| Self::link(gl, &vs, fs)).collect()
    }

    fn link(gl: &Arc<glow::Context>, vs: &CompiledStage, fs: &CompiledStage) -> Result<Self> {
        let program = unsafe { gl.create_program() }.map_err(|reason| Error::GlObject {
            what: "program",
            reason,
        })?;
        // from here on the program is released by `Drop` if linking fails
        let linked = ShaderProgram {
            gl: gl.clone(),
            program,
        };
        unsafe {
            gl.attach_shader(program, vs.shader);
            gl.attach_shader(program, fs.shader);
            gl.link_program(program);
            let status = gl.get_program_link_status(program);
            gl.detach_shader(program, vs.shader);
            gl.detach_shader(program, fs.shader);
            if !status {
                return Err(Error::ProgramLink {
                    log: gl.get_program_info_log(program),
                });
            }
        }
        log::debug!("linked program {program:?}");
        Ok(linked)
    }

    pub fn program(&self) -> glow::Program {
        self.program
    }

    pub fn use_program(&self) {
        unsafe { self.gl.use_program(Some(self.program)) };
    }

    pub fn set_bool(&self, name: &str, value: bool) {
        self.set_int(name, value as i32);
    }

    pub fn set_int(&self, name: &str, value: i32) {
        unsafe {
            let loc = self.gl.get_uniform_location(self.program, name);
            self.gl.uniform_1_i32(loc.as_ref(), value);
        }
    }

    pub fn set_float(&self, name: &str, value: f32) {
        unsafe {
            let loc = self.gl.get_uniform_location(self.program, name);
            self.gl.uniform_1_f32(loc.as_ref(), value);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        log::debug!("deleting program {:?}", self.program);
        unsafe { self.gl.delete_program(self.program) };
    }
}

pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| Error::ShaderSource {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names() {
        assert_eq!(ShaderStage::Vertex.to_string(), "VERTEX");
        assert_eq!(ShaderStage::Fragment.to_string(), "FRAGMENT");
        assert_eq!(ShaderStage::Vertex.gl_type(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_type(), glow::FRAGMENT_SHADER);
    }

    #[test]
    fn missing_source_file_is_reported_with_its_path() {
        let path = std::env::temp_dir().join("learn_glow_no_such_shader.vert");
        let err = read_source(&path).unwrap_err();
        match err {
            Error::ShaderSource { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn source_file_is_read_verbatim() {
        let path = std::env::temp_dir().join("learn_glow_read_source.frag");
        let src = "out vec4 FragColor;\nvoid main() { FragColor = vec4(1.0); }\n";
        std::fs::write(&path, src).unwrap();
        assert_eq!(read_source(&path).unwrap(), src);
        std::fs::remove_file(&path).unwrap();
    }
}
