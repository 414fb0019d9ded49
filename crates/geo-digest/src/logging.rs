/*!
Logging and profiling setup for the geo-digest binary.

Two implementations share one API:

- real: compiled with `feature = "profiling"`. Adds a `tracing-chrome` layer
  writing a Chrome trace file when one is requested; the returned guard
  flushes the file when dropped.
- stub: compiled in all other configurations. Logging only.

Logs go to stderr so that stdout only carries the report. `RUST_LOG` controls
the filter and defaults to `info`.
*/

use tracing_subscriber::EnvFilter;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(feature = "profiling")]
mod inner {
    use std::path::Path;

    use tracing_chrome::{ChromeLayerBuilder, FlushGuard};
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    /// Keeps the trace file open; dropping it flushes the trace
    pub struct ProfilingGuard {
        _guard: Option<FlushGuard>,
    }

    /// Initialize logging and, when `trace_file` is given, Chrome tracing.
    pub fn setup_logging_and_profiling(trace_file: Option<&Path>) -> ProfilingGuard {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(super::default_filter());
        let registry = tracing_subscriber::registry().with(fmt_layer);

        match trace_file {
            Some(path) => {
                let (chrome_layer, guard) = ChromeLayerBuilder::new()
                    .file(path)
                    .include_args(true)
                    .build();
                registry.with(chrome_layer).init();
                tracing::info!("Profiling enabled, writing trace to {}", path.display());
                ProfilingGuard {
                    _guard: Some(guard),
                }
            }
            None => {
                registry.init();
                ProfilingGuard { _guard: None }
            }
        }
    }
}

#[cfg(not(feature = "profiling"))]
mod inner {
    use std::path::Path;

    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    pub struct ProfilingGuard;

    /// Initialize logging; profiling is a no-op here.
    pub fn setup_logging_and_profiling(trace_file: Option<&Path>) -> ProfilingGuard {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(super::default_filter());
        tracing_subscriber::registry().with(fmt_layer).init();

        if let Some(path) = trace_file {
            tracing::warn!(
                "Ignoring trace file {}: profiling is disabled in this build",
                path.display()
            );
        }
        ProfilingGuard
    }
}

pub use inner::{ProfilingGuard, setup_logging_and_profiling};
