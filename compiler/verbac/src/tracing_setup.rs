//! Subscriber installation for the binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a subscriber if `RUST_LOG` is set; otherwise tracing stays off.
///
/// Output goes to stderr. With `VERBA_LOG_TREE` set, spans are drawn as an
/// indented tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let hierarchical = std::env::var_os("VERBA_LOG_TREE").is_some();

        let flat = (!hierarchical).then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
        });
        let tree = hierarchical.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
                .with_indent_lines(true)
        });

        tracing_subscriber::registry()
            .with(flat)
            .with(tree)
            .with(EnvFilter::from_default_env())
            .init();
    });
}
