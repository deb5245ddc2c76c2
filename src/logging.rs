use std::sync::Once;

static INIT: Once = Once::new();

/// Logs to stderr. `RUST_LOG` (env_logger filter syntax, e.g.
/// `learn_glow=debug,eframe=warn`) overrides the default `info` level.
///
/// Only the first call has an effect.
pub fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }
        builder.init();
        log::debug!("logging initialized");
    });
}
