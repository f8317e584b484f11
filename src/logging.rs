use tracing::debug;

use crate::config::TraceLevel;

/// Install the global diagnostic subscriber.
///
/// Called once at startup; the level is fixed for the rest of the process. Output goes to stderr,
/// one line per event. A second call keeps the subscriber already installed.
pub fn init(level: TraceLevel) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level.level_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(err) = installed {
        debug!(%err, "diagnostic subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_first_subscriber() {
        init(TraceLevel::VERBOSE);
        init(TraceLevel::OFF);
        assert!(tracing::enabled!(tracing::Level::TRACE));
    }
}
