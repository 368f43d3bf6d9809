use tracing::Level;
use tracing_subscriber::fmt;

/// Install the process-wide subscriber for app runs
pub fn init(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let _ = fmt().with_max_level(level).with_target(false).try_init();
}

/// Initialize structured logging for tests
pub fn init_for_tests() { let _ = fmt().with_target(false).with_test_writer().try_init(); }
