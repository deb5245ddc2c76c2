use std::path::PathBuf;

use crate::shader_program::ShaderStage;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Failed to create the window: {0}")]
    WindowCreation(String),
    #[error("ERROR::SHADER::{stage}::COMPILATION_FAILED\n{log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("ERROR::SHADER::PROGRAM::LINKING_FAILED\n{log}")]
    ProgramLink { log: String },
    #[error("Failed to read shader source {}: {source}", path.display())]
    ShaderSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load texture {}: {source}", path.display())]
    TextureLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Cannot create {what}: {reason}")]
    GlObject { what: &'static str, reason: String },
    /// eframe failure after the window and its context were up
    #[error("Window system error: {0}")]
    Eframe(#[source] eframe::Error),
}

impl Error {
    /// Errors eframe reports before the app was created are creation failures;
    /// later ones come from the running event loop.
    pub fn from_eframe(e: eframe::Error, app_created: bool) -> Self {
        if app_created {
            Error::Eframe(e)
        } else {
            Error::WindowCreation(e.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
