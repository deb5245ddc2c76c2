//! Window + OpenGL context creation through eframe's glow backend.

use std::sync::Arc;

use eframe::egui;
use glow::HasContext as _;

use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// lowest acceptable desktop OpenGL version, `(major, minor)`
    pub gl_version: (u32, u32),
    pub multisampling: u16,
    pub vsync: bool,
    /// run the event loop off the main thread (test harness threads)
    pub any_thread: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 800.0,
            height: 600.0,
            title: "LearnOpenGL".to_string(),
            gl_version: (3, 3),
            multisampling: 4,
            vsync: true,
            any_thread: false,
        }
    }
}

impl WindowConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        let mut options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.width, self.height])
                .with_title(&self.title),
            multisampling: self.multisampling,
            vsync: self.vsync,
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };
        if self.any_thread {
            options.event_loop_builder = Some(Box::new(|builder| allow_any_thread(builder)));
        }
        options
    }

    /// Rejects contexts older than `gl_version`. An embedded (ES / WebGL2)
    /// context only has to reach 3.0, the level `#version 300 es` needs.
    pub fn check_gl_version(&self, major: u32, minor: u32, is_embedded: bool) -> Result<()> {
        let required = if is_embedded { (3, 0) } else { self.gl_version };
        if (major, minor) < required {
            return Err(Error::WindowCreation(format!(
                "OpenGL {}.{} context required, got {major}.{minor}",
                required.0, required.1
            )));
        }
        Ok(())
    }
}

fn allow_any_thread<T>(builder: &mut winit::event_loop::EventLoopBuilder<T>) {
    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "ios", target_os = "android"))
    ))]
    {
        winit::platform::x11::EventLoopBuilderExtX11::with_any_thread(builder, true);
        winit::platform::wayland::EventLoopBuilderExtWayland::with_any_thread(builder, true);
    }
    #[cfg(target_os = "windows")]
    winit::platform::windows::EventLoopBuilderExtWindows::with_any_thread(builder, true);
    #[cfg(not(any(
        target_os = "windows",
        all(
            unix,
            not(any(target_os = "macos", target_os = "ios", target_os = "android"))
        )
    )))]
    let _ = builder;
}

/// The context eframe made current for this window, checked against `config`.
pub fn gl_context(
    cc: &eframe::CreationContext<'_>,
    config: &WindowConfig,
) -> Result<Arc<glow::Context>> {
    let gl = cc.gl.clone().ok_or_else(|| {
        Error::WindowCreation("eframe was not started with the glow backend".to_string())
    })?;
    let version = gl.version();
    log::info!(
        "OpenGL {}.{}{} ({})",
        version.major,
        version.minor,
        if version.is_embedded { " ES" } else { "" },
        version.vendor_info
    );
    config.check_gl_version(version.major, version.minor, version.is_embedded)?;
    Ok(gl)
}
