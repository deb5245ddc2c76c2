//! Opens an 800x600 window and clears it every frame until Escape is pressed.

use learn_glow::render_loop::{self, Scene};
use learn_glow::window::WindowConfig;

struct HelloWindow;

impl Scene for HelloWindow {
    fn paint(&self) {}
}

fn main() -> std::process::ExitCode {
    learn_glow::logging::init_logging();
    let config = WindowConfig::default();
    render_loop::exit_code(render_loop::run_scene(&config, |_gl| Ok(HelloWindow)))
}
