use std::sync::Once;

static LOGGER: Once = Once::new();

/// Routes the crate's trace records to stderr, once per test binary.
pub fn init_logging() {
    LOGGER.call_once(|| {
        let _ = stderrlog::new()
            .module("mem256")
            .verbosity(4usize)
            .init();
    });
}
