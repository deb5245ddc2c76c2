//! Running -> Closing render loop driven by eframe.

use std::cell::{Cell, RefCell};
use std::process::ExitCode;
use std::rc::Rc;
use std::sync::Arc;

use eframe::{egui, egui_glow};
use egui::mutex::Mutex;
use glow::HasContext as _;

use crate::window::{self, WindowConfig};
use crate::{Error, Result};

type DynError = Box<dyn std::error::Error + Send + Sync>;

pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closing,
}

impl LoopState {
    /// Closing is terminal; Escape or a close request ends Running.
    pub fn next(self, input: &FrameInput) -> LoopState {
        match self {
            LoopState::Running if input.escape || input.close_requested => LoopState::Closing,
            state => state,
        }
    }
}

/// Keyboard and window state polled once per frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameInput {
    pub escape: bool,
    pub close_requested: bool,
    pub up: bool,
    pub down: bool,
}

impl FrameInput {
    pub fn poll(ctx: &egui::Context) -> Self {
        ctx.input(|i| FrameInput {
            escape: i.key_down(egui::Key::Escape),
            close_requested: i.viewport().close_requested(),
            up: i.key_down(egui::Key::ArrowUp),
            down: i.key_down(egui::Key::ArrowDown),
        })
    }
}

/// One tutorial program: GPU objects created at startup, painted every frame.
pub trait Scene: Send + 'static {
    fn clear_color(&self) -> [f32; 4] {
        CLEAR_COLOR
    }

    fn process_input(&mut self, _input: &FrameInput) {}

    /// Binds program(s) and geometry and issues the draw calls.
    fn paint(&self);

    /// Lets the program end the loop itself, like a close request.
    fn close_requested(&self) -> bool {
        false
    }
}

struct SceneApp<S: Scene> {
    /// `None` once torn down
    scene: Arc<Mutex<Option<S>>>,
    clear_color: [f32; 4],
    state: LoopState,
}

impl<S: Scene> SceneApp<S> {
    fn new(scene: S) -> Self {
        let clear_color = scene.clear_color();
        SceneApp {
            scene: Arc::new(Mutex::new(Some(scene))),
            clear_color,
            state: LoopState::Running,
        }
    }

    fn custom_painting(&self, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let scene = self.scene.clone();
        let [r, g, b, a] = self.clear_color;
        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();
                // follow the framebuffer size so a resized window is fully covered
                let vp = info.viewport_in_pixels();
                unsafe {
                    gl.viewport(vp.left_px, vp.from_bottom_px, vp.width_px, vp.height_px);
                    gl.clear_color(r, g, b, a);
                    gl.clear(glow::COLOR_BUFFER_BIT);
                }
                if let Some(scene) = scene.lock().as_ref() {
                    scene.paint();
                }
            })),
        };
        ui.painter().add(callback);
    }
}

impl<S: Scene> eframe::App for SceneApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut input = FrameInput::poll(ctx);
        if let Some(scene) = self.scene.lock().as_ref() {
            input.close_requested |= scene.close_requested();
        }
        self.state = self.state.next(&input);
        if self.state == LoopState::Closing {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        if let Some(scene) = self.scene.lock().as_mut() {
            scene.process_input(&input);
        }
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.custom_painting(ui));
        // no frame pacing: draw again as soon as this frame is presented
        ctx.request_repaint();
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        self.clear_color
    }

    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        // the context is still current here; dropping releases every GPU object
        if self.scene.lock().take().is_some() {
            log::info!("scene released");
        }
    }
}

/// Opens the window described by `config`, builds the scene with the new
/// context and runs the render loop until Escape or a close request.
///
/// An error from `build` aborts before the first frame and is returned as is;
/// the GPU objects it already created are released on the way out.
pub fn run_scene<S, F>(config: &WindowConfig, build: F) -> Result<()>
where
    S: Scene,
    F: FnOnce(&Arc<glow::Context>) -> Result<S> + 'static,
{
    let setup_error: Rc<RefCell<Option<Error>>> = Rc::new(RefCell::new(None));
    let app_created = Rc::new(Cell::new(false));
    let result = {
        let setup_error = setup_error.clone();
        let app_created = app_created.clone();
        let config0 = config.clone();
        eframe::run_native(
            &config.title,
            config.native_options(),
            Box::new(
                move |cc: &eframe::CreationContext<'_>| -> std::result::Result<
                    Box<dyn eframe::App>,
                    DynError,
                > {
                    let scene = window::gl_context(cc, &config0).and_then(|gl| build(&gl));
                    match scene {
                        Ok(scene) => {
                            app_created.set(true);
                            Ok(Box::new(SceneApp::new(scene)))
                        }
                        Err(e) => {
                            let msg = e.to_string();
                            *setup_error.borrow_mut() = Some(e);
                            Err(msg.into())
                        }
                    }
                },
            ),
        )
    };
    if let Some(e) = setup_error.borrow_mut().take() {
        return Err(e);
    }
    result.map_err(|e| Error::from_eframe(e, app_created.get()))
}

/// Logs a fatal error and turns the outcome into the process exit code.
pub fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes() {
        let input = FrameInput {
            escape: true,
            ..Default::default()
        };
        assert_eq!(LoopState::Running.next(&input), LoopState::Closing);
    }

    #[test]
    fn close_request_closes() {
        let input = FrameInput {
            close_requested: true,
            ..Default::default()
        };
        assert_eq!(LoopState::Running.next(&input), LoopState::Closing);
    }

    #[test]
    fn other_keys_keep_running() {
        let input = FrameInput {
            up: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(LoopState::Running.next(&input), LoopState::Running);
        assert_eq!(
            LoopState::Running.next(&FrameInput::default()),
            LoopState::Running
        );
    }

    #[test]
    fn closing_is_terminal() {
        assert_eq!(
            LoopState::Closing.next(&FrameInput::default()),
            LoopState::Closing
        );
    }
}
