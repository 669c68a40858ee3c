#[macro_use]
mod macros;

mod mock;
pub use mock::{MockRow, MockRows};

pub use rowbind::{Error, Result, Value};

/// Installs a test subscriber honoring `RUST_LOG`. Safe to call from every
/// test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
