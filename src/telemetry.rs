use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for the CLI.
///
/// - Reads `RUST_LOG` for level directives, defaulting to `warn`.
/// - `debug` forces `debug` for this crate on top of whatever `RUST_LOG` says.
/// - Writes compact lines to stderr so stdout stays machine readable.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init(debug: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if debug {
        if let Ok(directive) = "pinata=debug".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
