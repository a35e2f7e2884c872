//! Optional tracing subscriber setup.
//!
//! The algorithms only emit `tracing` events; nothing is printed unless the
//! host installs a subscriber, either its own or the one from `init_logging`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wasm_bindgen::prelude::*;

const CRATE_TARGET: &str = "graph_search_wasm";

/// Build the filter directive: bare levels ("debug") are scoped to this
/// crate, anything containing '=' is used as-is, empty means "warn".
fn directive(filter: &str) -> String {
    let filter = filter.trim();
    if filter.is_empty() {
        format!("{CRATE_TARGET}=warn")
    } else if filter.contains('=') {
        filter.to_string()
    } else {
        format!("{CRATE_TARGET}={filter}")
    }
}

/// Install a compact fmt subscriber writing to stderr.
///
/// Timestamps are disabled so this also works on wasm32. Fails if a global
/// subscriber is already set.
pub fn init_logging(filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(directive(filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

/// JS entry point for `init_logging`; `filter` defaults to "warn".
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging_js(filter: Option<String>) -> Result<(), JsError> {
    init_logging(filter.as_deref().unwrap_or("warn")).map_err(|e| JsError::new(&e.to_string()))
}
