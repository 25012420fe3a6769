//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads the `CALLGRAPH_LOG` environment variable for per-module log levels.
/// Format: `CALLGRAPH_LOG=callgraph_analysis::call_graph=debug,callgraph_core=warn`
///
/// Falls back to `callgraph=info` if `CALLGRAPH_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CALLGRAPH_LOG")
            .unwrap_or_else(|_| EnvFilter::new("callgraph=info"));

        // Another subscriber may already be installed by the host pipeline.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
