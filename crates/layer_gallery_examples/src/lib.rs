#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{
    collect_shapes, render_preview_to_png, render_shapes, RenderConfig, Shape,
};

use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when several examples share a process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
